//! Tree listing and search via the external tree utility.
//!
//! Browsing never decrypts anything: tree(1) renders the directory
//! hierarchy and its output is relayed verbatim. Search builds one
//! combined OR-glob as a pure string transform, kept separate from
//! process invocation so it is independently testable.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::core::constants;
use crate::core::paths;
use crate::error::{Error, Result};

/// Renders the store hierarchy by delegating to tree(1).
///
/// The program name defaults to `tree` and can be overridden with
/// `DREY_TREE`.
pub struct TreeView {
    program: OsString,
}

impl TreeView {
    pub fn new() -> Self {
        let program = std::env::var_os(constants::TREE_ENV).unwrap_or_else(|| "tree".into());
        Self { program }
    }

    fn check_agent(&self) -> Result<()> {
        which::which(&self.program)
            .map_err(|_| Error::AgentNotFound(self.program.to_string_lossy().into_owned()))?;
        Ok(())
    }

    /// Render `subfolder` under `root`, or the whole store when the
    /// subfolder is empty.
    pub fn list(&self, root: &Path, subfolder: &str) -> Result<Vec<u8>> {
        let target = if subfolder.is_empty() {
            root.canonicalize()?
        } else {
            paths::resolve(root, subfolder)?
        };
        self.render(&target, None)
    }

    /// Render the store pruned to entries whose names match any of
    /// `terms`, case-insensitively.
    pub fn find(&self, root: &Path, terms: &[String]) -> Result<Vec<u8>> {
        let pattern = search_pattern(terms);
        self.render(root, Some(&pattern))
    }

    fn render(&self, path: &Path, pattern: Option<&str>) -> Result<Vec<u8>> {
        self.check_agent()?;
        trace!(path = %path.display(), pattern, "rendering tree");

        let mut cmd = Command::new(&self.program);
        cmd.args(["-C", "-l", "--noreport"]);
        if let Some(pattern) = pattern {
            cmd.args(["-P", pattern])
                .args(["--prune", "--matchdirs", "--ignore-case"]);
        }
        cmd.arg(path);

        let out = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::ListingFailed(format!("failed to spawn tree: {}", e)))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(Error::ListingFailed(stderr.trim().to_string()));
        }

        Ok(out.stdout)
    }
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined OR-glob matching any entry whose name contains any term.
///
/// An empty term list yields `**`, which matches everything.
pub fn search_pattern(terms: &[String]) -> String {
    format!("*{}*", terms.join("*|*"))
}

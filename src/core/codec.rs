//! Secret encryption and decryption via the external gpg agent.
//!
//! Private-key material and cipher logic live entirely outside this
//! process: the codec's job is correct process invocation, stream
//! plumbing, and faithful propagation of failure. The agent is
//! reached through the [`Codec`] trait so tests can substitute a
//! deterministic fake.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::core::constants;
use crate::error::{Error, Result};

/// Encryption boundary between the store and the external agent.
pub trait Codec {
    /// Encrypt `plaintext` for `recipient`, writing the artifact to
    /// `output`. On failure the output file is whatever the agent
    /// left behind; the operation as a whole did not complete.
    fn encrypt(&self, plaintext: &[u8], recipient: &str, output: &Path) -> Result<()>;

    /// Decrypt the artifact at `input`, returning the plaintext.
    fn decrypt(&self, input: &Path) -> Result<Vec<u8>>;
}

/// Codec backed by the gpg CLI.
///
/// The program name defaults to `gpg` and can be overridden with
/// `DREY_GPG`.
pub struct GpgCodec {
    program: OsString,
}

impl GpgCodec {
    pub fn new() -> Self {
        let program = std::env::var_os(constants::GPG_ENV).unwrap_or_else(|| "gpg".into());
        Self { program }
    }

    fn check_agent(&self) -> Result<()> {
        which::which(&self.program)
            .map_err(|_| Error::AgentNotFound(self.program.to_string_lossy().into_owned()))?;
        Ok(())
    }
}

impl Default for GpgCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for GpgCodec {
    fn encrypt(&self, plaintext: &[u8], recipient: &str, output: &Path) -> Result<()> {
        self.check_agent()?;
        trace!(
            plaintext_len = plaintext.len(),
            output = %output.display(),
            "encrypting"
        );

        let mut child = Command::new(&self.program)
            .arg("-e")
            .args(["-r", recipient])
            .args(["--batch", "--yes", "--use-agent", "--no-tty"])
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::EncryptionFailed(format!("failed to spawn gpg: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(plaintext)
                .map_err(|e| Error::EncryptionFailed(format!("failed to write plaintext: {}", e)))?;
        }

        let out = child
            .wait_with_output()
            .map_err(|e| Error::EncryptionFailed(format!("gpg did not run: {}", e)))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(Error::EncryptionFailed(stderr.trim().to_string()));
        }

        trace!(output = %output.display(), "encrypted");
        Ok(())
    }

    fn decrypt(&self, input: &Path) -> Result<Vec<u8>> {
        self.check_agent()?;
        trace!(input = %input.display(), "decrypting");

        let out = Command::new(&self.program)
            .args(["--quiet", "--batch", "--use-agent", "-d"])
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::DecryptionFailed(format!("failed to spawn gpg: {}", e)))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(Error::DecryptionFailed(stderr.trim().to_string()));
        }

        trace!(plaintext_len = out.stdout.len(), "decrypted");
        Ok(out.stdout)
    }
}

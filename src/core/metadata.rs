//! Store metadata: the `.gpg-id` recipient marker.
//!
//! The marker's trimmed contents are the recipient identity. It is
//! read once at the start of every operation and written only by
//! `init`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

/// Store location plus the recipient its marker names.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub root: PathBuf,
    pub recipient: String,
}

impl Metadata {
    /// Load the marker from `root/.gpg-id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if the marker is absent or
    /// names no recipient.
    pub fn load(root: &Path) -> Result<Self> {
        let marker = root.join(constants::GPG_ID_FILE);
        if !marker.is_file() {
            return Err(Error::NotInitialized);
        }

        let recipient = fs::read_to_string(&marker)?.trim().to_string();
        if recipient.is_empty() {
            return Err(Error::NotInitialized);
        }

        debug!(root = %root.display(), recipient = %recipient, "metadata loaded");
        Ok(Self {
            root: root.to_path_buf(),
            recipient,
        })
    }

    /// Create `root` (and parents) idempotently and write the marker,
    /// truncating any prior content. Safe to re-run; the last written
    /// recipient wins.
    pub fn init(root: &Path, recipient: &str) -> Result<()> {
        fs::create_dir_all(root)?;
        fs::write(
            root.join(constants::GPG_ID_FILE),
            format!("{}\n", recipient),
        )?;
        debug!(root = %root.display(), recipient = %recipient, "marker written");
        Ok(())
    }
}

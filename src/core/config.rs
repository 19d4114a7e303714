//! Store-root resolution.
//!
//! The root comes from the `--store` flag (which clap also feeds from
//! `DREY_STORE_DIR`), falling back to `~/.drey`.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

/// Resolve the store root directory.
pub fn store_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        debug!(root = %root.display(), "store root from flag/env");
        return Ok(root);
    }

    let home = dirs::home_dir().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "unable to determine home directory",
        ))
    })?;
    Ok(home.join(constants::STORE_DIR))
}

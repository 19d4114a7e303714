//! Init command - create a store and record its recipient.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Initialize a password store for `gpg_id`.
pub fn execute(root: &Path, gpg_id: &str, path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| root.to_path_buf());

    Store::init(&target, gpg_id)?;
    info!("initialized store at {}", target.display());

    output::success(&format!(
        "initialized {} for {}",
        target.display(),
        output::key(gpg_id)
    ));
    output::hint(&format!("add a secret: {}", output::cmd("drey insert <name>")));
    Ok(())
}

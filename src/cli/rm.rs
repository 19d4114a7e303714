//! Rm command - delete a secret or namespace.

use std::path::Path;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Remove `name` from the store.
pub fn execute(root: &Path, name: &str, recursive: bool) -> Result<()> {
    let store = Store::open(root)?;
    store.remove(name, recursive)?;

    output::success(&format!("removed {}", output::key(name)));
    Ok(())
}

//! Ls command - render the store tree.

use std::io::{self, Write};
use std::path::Path;

use crate::core::store::Store;
use crate::core::tree::TreeView;
use crate::error::Result;

/// Render the tree under `subfolder` (the whole store when empty).
///
/// The renderer's output is relayed verbatim.
pub fn execute(root: &Path, subfolder: &str) -> Result<()> {
    let store = Store::open(root)?;
    let listing = TreeView::new().list(store.root(), subfolder)?;

    io::stdout().write_all(&listing)?;
    Ok(())
}

//! Find command - search the store tree by name.

use std::io::{self, Write};
use std::path::Path;

use crate::cli::output;
use crate::core::store::Store;
use crate::core::tree::TreeView;
use crate::error::Result;

/// Render the tree pruned to entries matching any of `terms`.
pub fn execute(root: &Path, terms: &[String]) -> Result<()> {
    let store = Store::open(root)?;

    output::dimmed(&format!("search terms: {}", terms.join(",")));
    let listing = TreeView::new().find(store.root(), terms)?;

    io::stdout().write_all(&listing)?;
    Ok(())
}

//! Show command - decrypt a secret to stdout.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::core::codec::GpgCodec;
use crate::core::store::Store;
use crate::error::Result;

/// Decrypt `name` and write the plaintext to stdout.
///
/// Bytes are relayed untouched so piped output stays binary-safe; a
/// trailing newline is added only on a terminal.
pub fn execute(root: &Path, name: &str) -> Result<()> {
    let store = Store::open(root)?;
    let plaintext = store.show(&GpgCodec::new(), name)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&plaintext)?;
    if io::stdout().is_terminal() && !plaintext.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

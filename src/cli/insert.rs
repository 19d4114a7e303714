//! Insert command.
//!
//! Interactively add a secret with hidden input and confirmation.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::codec::GpgCodec;
use crate::core::store::Store;
use crate::error::Result;

/// Prompt for a secret and encrypt it under `name`.
pub fn execute(root: &Path, name: &str) -> Result<()> {
    let store = Store::open(root)?;

    // The plaintext lives only long enough to hand to the agent.
    let secret: Zeroizing<String> = if !io::stdin().is_terminal() {
        // Piped input: first line, no confirmation prompt.
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Zeroizing::new(input)
    } else {
        Zeroizing::new(
            Password::new()
                .with_prompt(format!("Enter the password for {}", output::key(name)))
                .with_confirmation("Retype the password", "passwords do not match")
                .interact()?,
        )
    };

    let value = secret.trim_end_matches(|c| c == '\r' || c == '\n');
    store.insert(&GpgCodec::new(), name, value.as_bytes())?;
    info!("inserted {}", name);

    output::success(&format!("stored {}", output::key(name)));
    Ok(())
}

//! Command-line interface.

pub mod completions;
pub mod find;
pub mod init;
pub mod insert;
pub mod ls;
pub mod output;
pub mod rm;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config;
use crate::error::Result;

/// Drey - a gpg-backed hierarchical password store.
#[derive(Parser)]
#[command(
    name = "drey",
    about = "A gpg-backed hierarchical password store",
    version,
    after_help = "Stash it high. 🐿️"
)]
pub struct Cli {
    /// Store root directory
    #[arg(long, global = true, env = "DREY_STORE_DIR", value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `ls` of the whole store when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a password store for a recipient
    Init {
        /// Recipient identity (gpg key id or email)
        gpg_id: String,
        /// Where to create the store (defaults to the store root)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Insert a secret, prompting for its value
    Insert {
        /// Secret name (e.g. email/work)
        name: String,
    },

    /// Decrypt a secret to stdout
    Show {
        /// Secret name
        name: String,
    },

    /// Remove a secret or, with --recursive, a whole namespace
    Rm {
        /// Secret or namespace name
        name: String,
        /// Delete a namespace and everything under it
        #[arg(short, long)]
        recursive: bool,
    },

    /// List the store tree
    Ls {
        /// Namespace to list (defaults to the whole store)
        subfolder: Option<String>,
    },

    /// List entries whose names match any search term
    Find {
        /// Case-insensitive substring terms
        terms: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Option<Command>, store: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let root = config::store_root(store)?;

    // No subcommand behaves as `ls` of the whole store.
    match command.unwrap_or(Ls { subfolder: None }) {
        Init { gpg_id, path } => init::execute(&root, &gpg_id, path),
        Insert { name } => insert::execute(&root, &name),
        Show { name } => show::execute(&root, &name),
        Rm { name, recursive } => rm::execute(&root, &name, recursive),
        Ls { subfolder } => ls::execute(&root, subfolder.as_deref().unwrap_or("")),
        Find { terms } => find::execute(&root, &terms),
        Completions { shell } => completions::execute(shell),
    }
}

//! Drey - a gpg-backed hierarchical password store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a store and record the recipient
//! │   ├── insert        # Prompt for a secret and encrypt it
//! │   ├── show          # Decrypt a secret to stdout
//! │   ├── rm            # Delete a secret or namespace
//! │   ├── ls            # Render the store tree
//! │   ├── find          # Render the tree filtered by search terms
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Store-root resolution
//!     ├── paths         # Safe name → path resolution
//!     ├── metadata      # .gpg-id marker handling
//!     ├── codec         # Encrypt/decrypt via the external gpg agent
//!     ├── store         # insert / show / remove operations
//!     └── tree          # ls / find via the external tree utility
//! ```
//!
//! Secrets live as individually gpg-encrypted files in a directory
//! tree; drey never decrypts anything in-process. Its job is safe
//! path resolution inside the store root and correct invocation of
//! the external agents.

pub mod cli;
pub mod core;
pub mod error;

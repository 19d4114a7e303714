//! Constants used throughout drey.
//!
//! Centralizes magic strings and configuration values.

/// Marker file at the store root naming the recipient (.gpg-id).
pub const GPG_ID_FILE: &str = ".gpg-id";

/// Extension carried by every encrypted secret artifact.
pub const ARTIFACT_EXT: &str = "gpg";

/// Store directory relative to HOME (~/.drey).
pub const STORE_DIR: &str = ".drey";

/// Environment variable overriding the store root.
pub const STORE_DIR_ENV: &str = "DREY_STORE_DIR";

/// Environment variable overriding the gpg program name.
pub const GPG_ENV: &str = "DREY_GPG";

/// Environment variable overriding the tree program name.
pub const TREE_ENV: &str = "DREY_TREE";

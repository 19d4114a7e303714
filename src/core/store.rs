//! Store operations: insert, show, remove.
//!
//! Every operation loads the recipient marker first, then resolves
//! its target through [`crate::core::paths`], then acts through the
//! codec or the filesystem. Writes are last-writer-wins; there is no
//! locking across independent invocations.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::codec::Codec;
use crate::core::metadata::Metadata;
use crate::core::paths;
use crate::error::{Error, Result};

/// An opened store: root directory plus configured recipient.
#[derive(Debug)]
pub struct Store {
    metadata: Metadata,
}

impl Store {
    /// Open a store, loading the recipient marker.
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self {
            metadata: Metadata::load(root)?,
        })
    }

    /// Create the store directory and record the recipient.
    ///
    /// Idempotent; re-running with a different recipient overwrites
    /// the marker.
    pub fn init(root: &Path, recipient: &str) -> Result<()> {
        Metadata::init(root, recipient)
    }

    pub fn root(&self) -> &Path {
        &self.metadata.root
    }

    pub fn recipient(&self) -> &str {
        &self.metadata.recipient
    }

    /// Encrypt `plaintext` into the artifact for `name`, overwriting
    /// any previous value. Missing namespace directories are created;
    /// the agent cannot create them itself.
    pub fn insert(&self, codec: &dyn Codec, name: &str, plaintext: &[u8]) -> Result<()> {
        let target = paths::resolve_artifact(self.root(), name)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        codec.encrypt(plaintext, self.recipient(), &target)?;
        info!("inserted {}", name);
        Ok(())
    }

    /// Decrypt the artifact for `name` and return the plaintext.
    pub fn show(&self, codec: &dyn Codec, name: &str) -> Result<Vec<u8>> {
        let target = paths::resolve_artifact(self.root(), name)?;
        if !target.is_file() {
            return Err(Error::NotFound(name.to_string()));
        }
        codec.decrypt(&target)
    }

    /// Delete the artifact for `name`, or its whole namespace when
    /// `recursive` is set.
    ///
    /// A namespace directory takes precedence over a same-named
    /// artifact. Deleting a directory without `recursive` fails with
    /// [`Error::IsNamespace`] and leaves the tree untouched.
    pub fn remove(&self, name: &str, recursive: bool) -> Result<()> {
        let as_namespace = paths::resolve(self.root(), name)?;
        let target = if as_namespace.is_dir() {
            as_namespace
        } else {
            paths::resolve_artifact(self.root(), name)?
        };
        debug!(target = %target.display(), recursive, "removing");

        if !target.exists() {
            return Err(Error::NotFound(name.to_string()));
        }

        if target.is_dir() {
            if !recursive {
                return Err(Error::IsNamespace(name.to_string()));
            }
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }

        info!("removed {}", name);
        Ok(())
    }
}

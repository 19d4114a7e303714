//! Safe resolution of logical secret names to store paths.
//!
//! A secret name is a slash-separated identifier supplied by the
//! caller. Resolution must never produce a path outside the store
//! root, whether via `..` segments or symlinks planted inside the
//! store. `.` and `..` are rejected lexically; symlinks are defeated
//! by canonicalizing the deepest existing prefix of the joined path
//! (the target itself may not exist yet) and requiring the result to
//! stay a descendant of the canonicalized root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::constants;
use crate::error::{Error, Result};

/// Resolve `name` as a namespace path under `root`.
pub fn resolve(root: &Path, name: &str) -> Result<PathBuf> {
    resolve_inner(root, name, false)
}

/// Resolve `name` as an artifact path under `root`.
///
/// Appends the `.gpg` extension to the final segment before
/// resolution.
pub fn resolve_artifact(root: &Path, name: &str) -> Result<PathBuf> {
    resolve_inner(root, name, true)
}

fn resolve_inner(root: &Path, name: &str, artifact: bool) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(Error::InvalidName(name.to_string()));
    }

    let canon_root = root.canonicalize()?;
    let mut joined = canon_root.clone();

    let segments: Vec<&str> = name.split('/').collect();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(Error::InvalidName(name.to_string()));
        }
        if *segment == "." || *segment == ".." {
            return Err(Error::PathEscape(name.to_string()));
        }
        if artifact && i == last {
            joined.push(format!("{}.{}", segment, constants::ARTIFACT_EXT));
        } else {
            joined.push(segment);
        }
    }

    let resolved = canonicalize_partial(&joined)?;
    if !resolved.starts_with(&canon_root) {
        return Err(Error::PathEscape(name.to_string()));
    }
    Ok(resolved)
}

/// Canonicalize the deepest existing prefix of `path` and re-append
/// the not-yet-existing tail verbatim.
fn canonicalize_partial(path: &Path) -> Result<PathBuf> {
    let mut existing = path.to_path_buf();
    let mut pending: Vec<OsString> = Vec::new();

    while !existing.exists() {
        match existing.file_name() {
            Some(name) => {
                pending.push(name.to_os_string());
                existing.pop();
            }
            None => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    for segment in pending.iter().rev() {
        resolved.push(segment);
    }
    Ok(resolved)
}

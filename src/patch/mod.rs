// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release stamping for HAR packaging.
//!
//! ```text
//! <module>/build-profile.json5
//!   VERSION_PLACE_HOLDER_...      --> version   (first occurrence)
//!   COMMIT_HASH_PLACE_HOLDER_...  --> commit    (first occurrence)
//!
//! <harmony>/parameter.json
//!   dependencies.lynx_version     --> version   (2-space indent, key order kept)
//! ```
//!
//! The build profile is edited as text so comments and formatting survive.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{PatchError, Result};

pub const VERSION_PLACEHOLDER: &str = "VERSION_PLACE_HOLDER_TO_DISALLOW_PUBLISH_BY_ACCIDENT";
pub const COMMIT_HASH_PLACEHOLDER: &str = "COMMIT_HASH_PLACE_HOLDER_TO_DISALLOW_PUBLISH_BY_ACCIDENT";

/// Replaces the first occurrence of each placeholder.
///
/// Returns the new content and whether each placeholder was found, in
/// `(version, commit)` order.
#[must_use]
pub fn substitute_placeholders(content: &str, version: &str, commit: &str) -> (String, [bool; 2]) {
    let found = [
        content.contains(VERSION_PLACEHOLDER),
        content.contains(COMMIT_HASH_PLACEHOLDER),
    ];
    let patched = content
        .replacen(VERSION_PLACEHOLDER, version, 1)
        .replacen(COMMIT_HASH_PLACEHOLDER, commit, 1);
    (patched, found)
}

/// Stamps version and commit into `<module_dir>/build-profile.json5`.
///
/// A missing placeholder is logged and otherwise ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub async fn patch_build_profile(module_dir: &Path, version: &str, commit: &str) -> Result<PathBuf> {
    let path = module_dir.join("build-profile.json5");
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (patched, [has_version, has_commit]) = substitute_placeholders(&content, version, commit);
    if !has_version {
        warn!(path = %path.display(), "version placeholder not found");
    }
    if !has_commit {
        warn!(path = %path.display(), "commit hash placeholder not found");
    }

    tokio::fs::write(&path, &patched)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), version, commit, "patched build profile");
    debug!("{patched}");
    Ok(path)
}

/// Sets `dependencies.lynx_version` in a parsed parameter file.
///
/// # Errors
///
/// Returns [`PatchError`] if `dependencies` is missing or not an object.
pub fn set_lynx_version(
    document: &mut Value,
    version: &str,
    path: &Path,
) -> std::result::Result<(), PatchError> {
    let dependencies = document
        .get_mut("dependencies")
        .ok_or_else(|| PatchError::MissingKey {
            path: path.display().to_string(),
            key: "dependencies".to_string(),
        })?;

    let map = dependencies
        .as_object_mut()
        .ok_or_else(|| PatchError::NotAnObject {
            path: path.display().to_string(),
            key: "dependencies".to_string(),
        })?;

    map.insert("lynx_version".to_string(), Value::String(version.to_string()));
    Ok(())
}

/// Sets `dependencies.lynx_version` in `<harmony_dir>/parameter.json`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or written, or does
/// not have a `dependencies` object.
pub async fn patch_parameter_file(harmony_dir: &Path, version: &str) -> Result<PathBuf> {
    let path = harmony_dir.join("parameter.json");
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    set_lynx_version(&mut document, version, &path)?;

    let patched = serde_json::to_string_pretty(&document)?;
    tokio::fs::write(&path, &patched)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), version, "patched parameter file");
    debug!("{patched}");
    Ok(path)
}

#[cfg(test)]
mod tests;

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common task helper functions.
//!
//! # Functions
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`copy_into_dir`] | Copy a built file into a directory (dry-run aware) |
//! | [`remove_file`] | Delete a file if present (dry-run aware) |

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::task::TaskContext;
use crate::utility::fs::copy::{copy_file_into_dir, remove_file_if_exists};

/// Copies `src` into `dst_dir`, creating the directory.
///
/// Returns `false` without copying when `src` is not a file, so callers can
/// decide how loudly to report it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the copy fails.
pub async fn copy_into_dir(ctx: &TaskContext, src: &Path, dst_dir: &Path, label: &str) -> Result<bool> {
    if !src.is_file() {
        return Ok(false);
    }

    if ctx.is_dry_run() {
        info!(
            "[dry-run] Would copy {label} {} to {}",
            src.display(),
            dst_dir.display()
        );
        return Ok(true);
    }

    let dst = copy_file_into_dir(src, dst_dir).await?;
    debug!(src = %src.display(), dst = %dst.display(), "Copied {label}");
    Ok(true)
}

/// Deletes a file, ignoring one that is already gone.
///
/// # Errors
///
/// Returns an error if the file exists and cannot be removed.
pub async fn remove_file(ctx: &TaskContext, path: &Path, label: &str) -> Result<()> {
    if ctx.is_dry_run() {
        if path.exists() {
            info!("[dry-run] Would delete {label} {}", path.display());
        }
        return Ok(());
    }

    if remove_file_if_exists(path).await? {
        info!(path = %path.display(), "Deleted {label}");
    } else {
        debug!(path = %path.display(), "{label} already absent");
    }
    Ok(())
}

#[cfg(test)]
mod tests;

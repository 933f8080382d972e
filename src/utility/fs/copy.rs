// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copies a file into a directory, keeping its file name.
///
/// Creates `dst_dir` if it doesn't exist and overwrites an existing file.
///
/// # Example
/// ```no_run
/// use harmony_build::utility::fs::copy::copy_file_into_dir;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_into_dir(
///     Path::new("out/harmony_release_arm64/liblynx.so"),
///     Path::new("platform/harmony/lynx_harmony/libs/arm64-v8a"),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if `src` has no file name or any IO operation fails.
pub async fn copy_file_into_dir(src: &Path, dst_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("{} has no file name", src.display()))?;

    fs::create_dir_all(dst_dir)
        .await
        .with_context(|| format!("failed to create directory {}", dst_dir.display()))?;

    let dst = dst_dir.join(name);
    fs::copy(src, &dst)
        .await
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;

    Ok(dst)
}

/// Removes a file, treating a missing file as success.
///
/// Returns whether a file was removed.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}

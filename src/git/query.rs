// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query entry points using the gix backend.

use std::path::Path;

use super::{GitQuery, GixBackend};
use crate::error::HarmonyResult;

/// Get the full commit id of `HEAD`.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn head_commit(path: &Path) -> HarmonyResult<String> {
    GixBackend::head_commit(path)
}

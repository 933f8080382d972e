// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git queries.
//!
//! ```text
//! query.rs --> GitQuery --> GixBackend --> .git/ (no subprocess)
//!   head_commit(path)   full hex id stamped into HAR build profiles
//! ```

pub mod query;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

use crate::error::{GitError, HarmonyResult};

/// Read-only git query operations.
pub trait GitQuery {
    /// Full hex id of the commit `HEAD` points to.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or `HEAD` is unborn.
    fn head_commit(path: &Path) -> HarmonyResult<String>;
}

/// Pure Rust backend using gix.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn head_commit(path: &Path) -> HarmonyResult<String> {
        let repo = gix::discover(path).map_err(|e| GitError::Discover {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let id = repo.head_id().map_err(|e| GitError::Head {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(id.to_string())
    }
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Temporary source trees for task tests.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::config::Config;
use crate::core::env::container::Env;
use crate::task::TaskContext;

/// Config rooted at `root` with all derived paths resolved.
pub(crate) fn config_at(root: &Path) -> Config {
    let mut config = Config::default();
    config.paths.root = Some(root.to_path_buf());
    config.resolve_and_validate().expect("resolve config");
    config
}

/// A fresh temp root and a dry-run context pointing at it.
pub(crate) fn dry_context() -> (TempDir, TaskContext) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let config = config_at(temp.path());
    let ctx = TaskContext::new(Arc::new(config), Env::new()).with_dry_run(true);
    (temp, ctx)
}

/// Writes `content` to `root/rel`, creating parent directories.
pub(crate) fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, content).expect("write file");
}

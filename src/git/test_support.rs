// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-git repositories for tests.

use std::path::Path;
use std::process::Command;

pub(crate) fn git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a git repository with one commit using shell git.
pub(crate) fn init_test_repo_with_commit(path: &Path) -> String {
    git(path, &["init", "--quiet"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    std::fs::write(path.join("README.md"), "lynx\n").expect("write readme");
    git(path, &["add", "README.md"]);
    git(path, &["commit", "--quiet", "-m", "initial"]);
    git(path, &["rev-parse", "HEAD"])
}

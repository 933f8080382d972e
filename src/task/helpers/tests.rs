// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{copy_into_dir, remove_file};
use crate::core::env::container::Env;
use crate::task::TaskContext;
use std::sync::Arc;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn test_context() -> (TempDir, TaskContext) {
    let temp = temp_dir();
    let config = crate::config::Config::default();
    let ctx = TaskContext::new(Arc::new(config), Env::new());
    (temp, ctx)
}

#[tokio::test]
async fn copy_into_dir_copies_built_file() {
    let (temp, ctx) = test_context();
    let src = temp.path().join("liblynx.so");
    let dst_dir = temp.path().join("libs").join("x86_64");
    tokio::fs::write(&src, "elf").await.expect("write src");

    let copied = copy_into_dir(&ctx, &src, &dst_dir, "shared object")
        .await
        .expect("should copy");

    assert!(copied);
    let content = tokio::fs::read_to_string(dst_dir.join("liblynx.so"))
        .await
        .expect("read dst");
    assert_eq!(content, "elf");
}

#[tokio::test]
async fn copy_into_dir_reports_missing_source() {
    let (temp, ctx) = test_context();
    let dst_dir = temp.path().join("libs");

    let copied = copy_into_dir(&ctx, &temp.path().join("absent.so"), &dst_dir, "shared object")
        .await
        .expect("missing source is not an error");

    assert!(!copied);
    assert!(!dst_dir.exists());
}

#[tokio::test]
async fn copy_into_dir_dry_run() {
    let (temp, ctx) = test_context();
    let ctx = ctx.with_dry_run(true);
    let src = temp.path().join("liblynx.so");
    let dst_dir = temp.path().join("libs");
    tokio::fs::write(&src, "elf").await.expect("write src");

    let copied = copy_into_dir(&ctx, &src, &dst_dir, "shared object")
        .await
        .expect("should succeed");

    assert!(copied);
    assert!(!dst_dir.exists());
}

#[tokio::test]
async fn remove_file_respects_dry_run() {
    let (temp, ctx) = test_context();
    let ignore = temp.path().join(".gitignore");
    tokio::fs::write(&ignore, "*").await.expect("write");

    remove_file(&ctx.clone().with_dry_run(true), &ignore, "ignore file")
        .await
        .expect("dry run");
    assert!(ignore.exists());

    remove_file(&ctx, &ignore, "ignore file").await.expect("remove");
    assert!(!ignore.exists());

    remove_file(&ctx, &ignore, "ignore file")
        .await
        .expect("second remove is a no-op");
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `ninja -C <out> <target>`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct NinjaTool {
    out_dir: PathBuf,
    target: String,
    cwd: Option<PathBuf>,
}

impl NinjaTool {
    /// Builds `target` in `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl AsRef<Path>, target: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            target: target.into(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn command(&self, ctx: &ToolContext) -> ProcessBuilder {
        let mut builder = ctx
            .process(&ctx.config().tools.ninja)
            .arg("-C")
            .arg(&self.out_dir)
            .arg(&self.target);
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }
        builder
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.command(ctx);
        if dry_run_skip(ctx, &builder) {
            return Ok(());
        }

        builder.run().await.context("Failed to run ninja")?;

        info!(out = %self.out_dir.display(), target = %self.target, "ninja completed successfully");
        Ok(())
    }
}

impl Tool for NinjaTool {
    fn name(&self) -> &'static str {
        "ninja"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

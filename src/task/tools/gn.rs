// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gn gen` for one output directory.
//!
//! ```text
//! gn gen <out> --args=<arg1 arg2 ...> --export-compile-commands
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct GnTool {
    out_dir: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl GnTool {
    #[must_use]
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The `--args=` value: all gn args joined by spaces.
    #[must_use]
    pub fn args_value(&self) -> String {
        self.args.join(" ")
    }

    #[must_use]
    pub fn command(&self, ctx: &ToolContext) -> ProcessBuilder {
        let mut builder = ctx
            .process(&ctx.config().tools.gn)
            .arg("gen")
            .arg(&self.out_dir)
            .arg(format!("--args={}", self.args_value()))
            .arg("--export-compile-commands");
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

        builder.run().await.context("Failed to run gn gen")?;

        info!(out = %self.out_dir.display(), "gn gen completed successfully");
        Ok(())
    }
}

impl Tool for GnTool {
    fn name(&self) -> &'static str {
        "gn"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

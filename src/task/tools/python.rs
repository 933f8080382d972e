// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runs a Python build script with the configured interpreter.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PythonTool {
    script: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl PythonTool {
    #[must_use]
    pub fn new(script: impl AsRef<Path>) -> Self {
        Self {
            script: script.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn command(&self, ctx: &ToolContext) -> ProcessBuilder {
        let mut builder = ctx
            .process(&ctx.config().tools.python)
            .arg(&self.script)
            .args(&self.args);
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

        builder
            .run()
            .await
            .with_context(|| format!("Failed to run {}", self.script.display()))?;

        info!(script = %self.script.display(), "script completed successfully");
        Ok(())
    }
}

impl Tool for PythonTool {
    fn name(&self) -> &'static str {
        "python"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

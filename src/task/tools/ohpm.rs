// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `ohpm publish` for one HAR.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct OhpmTool {
    har: String,
    publish_id: String,
    key_path: String,
    cwd: Option<PathBuf>,
}

impl OhpmTool {
    /// Publishes `har` (a file name relative to the working directory).
    #[must_use]
    pub fn publish(
        har: impl Into<String>,
        publish_id: impl Into<String>,
        key_path: impl Into<String>,
    ) -> Self {
        Self {
            har: har.into(),
            publish_id: publish_id.into(),
            key_path: key_path.into(),
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
            .process(&ctx.config().tools.ohpm)
            .arg("publish")
            .arg(&self.har)
            .arg("--publish_id")
            .arg(&self.publish_id)
            .arg("--key_path")
            .arg(&self.key_path);
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
            .with_context(|| format!("Failed to publish {}", self.har))?;

        info!(har = %self.har, "ohpm publish completed successfully");
        Ok(())
    }
}

impl Tool for OhpmTool {
    fn name(&self) -> &'static str {
        "ohpm"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

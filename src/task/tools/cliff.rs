// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Changelog generation with `git-cliff`.
//!
//! ```text
//! git-cliff --config <cliff.toml> <base>..HEAD   (stdout captured)
//!        |
//!        v
//! "<!-- version -->" --> version   (every occurrence)
//!        |
//!        v
//! write <output>
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Marker in the cliff template replaced by the release version.
pub const VERSION_MARKER: &str = "<!-- version -->";

/// Replaces every version marker in rendered changelog text.
#[must_use]
pub fn stamp_version(changelog: &str, version: &str) -> String {
    changelog.replace(VERSION_MARKER, version)
}

#[derive(Debug, Clone)]
pub struct CliffTool {
    config: PathBuf,
    base_commit: String,
    version: String,
    output: PathBuf,
    cwd: Option<PathBuf>,
}

impl CliffTool {
    #[must_use]
    pub fn new(
        config: impl AsRef<Path>,
        base_commit: impl Into<String>,
        version: impl Into<String>,
        output: impl AsRef<Path>,
    ) -> Self {
        Self {
            config: config.as_ref().to_path_buf(),
            base_commit: base_commit.into(),
            version: version.into(),
            output: output.as_ref().to_path_buf(),
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
            .process(&ctx.config().tools.git_cliff)
            .arg("--config")
            .arg(&self.config)
            .arg(format!("{}..HEAD", self.base_commit))
            .capture_stdout();
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }
        builder
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.command(ctx);
        if dry_run_skip(ctx, &builder) {
            info!("[dry-run] Would write {}", self.output.display());
            return Ok(());
        }

        let output = builder.run().await.context("Failed to run git-cliff")?;
        let changelog = stamp_version(output.stdout(), &self.version);

        tokio::fs::write(&self.output, changelog)
            .await
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        info!(path = %self.output.display(), "changelog written");
        Ok(())
    }
}

impl Tool for CliffTool {
    fn name(&self) -> &'static str {
        "git-cliff"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

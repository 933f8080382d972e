// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `hvigorw` packaging.
//!
//! ```text
//! HvigorTool
//! Operations: AssembleHar { module } | AssembleApp { build_type }
//!
//! assembleHar --mode module  -p module=<m>@default -p product=default
//!             -p buildMode=debug --no-daemon
//! assembleApp --mode project -p product=default -p buildMode=<type>
//!             -p skipGn=true --no-daemon
//! ```
//!
//! hvigorw can exit zero without producing anything, so a HAR build is only
//! considered done once the expected `.har` exists on disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext, dry_run_skip};
use crate::config::types::BuildType;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ArtifactError, Result};

/// hvigorw operation to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HvigorOperation {
    /// Package one module as a HAR.
    AssembleHar { module: String },
    /// Package the whole project as an app.
    AssembleApp { build_type: BuildType },
}

#[derive(Debug, Clone)]
pub struct HvigorTool {
    operation: HvigorOperation,
    cwd: Option<PathBuf>,
    expected: Option<PathBuf>,
}

impl HvigorTool {
    #[must_use]
    pub fn assemble_har(module: impl Into<String>) -> Self {
        Self {
            operation: HvigorOperation::AssembleHar {
                module: module.into(),
            },
            cwd: None,
            expected: None,
        }
    }

    #[must_use]
    pub const fn assemble_app(build_type: BuildType) -> Self {
        Self {
            operation: HvigorOperation::AssembleApp { build_type },
            cwd: None,
            expected: None,
        }
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Requires `path` to exist after a successful run.
    #[must_use]
    pub fn expect_artifact(mut self, path: impl AsRef<Path>) -> Self {
        self.expected = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn operation(&self) -> &HvigorOperation {
        &self.operation
    }

    #[must_use]
    pub fn command(&self, ctx: &ToolContext) -> ProcessBuilder {
        let builder = ctx.process(&ctx.config().tools.hvigorw);
        let mut builder = match &self.operation {
            // HAR packages are always assembled in debug mode.
            HvigorOperation::AssembleHar { module } => builder
                .arg("assembleHar")
                .args(["--mode", "module"])
                .arg("-p")
                .arg(format!("module={module}@default"))
                .args(["-p", "product=default", "-p", "buildMode=debug"])
                .arg("--no-daemon"),
            HvigorOperation::AssembleApp { build_type } => builder
                .arg("assembleApp")
                .args(["--mode", "project", "-p", "product=default", "-p"])
                .arg(format!("buildMode={build_type}"))
                .args(["-p", "skipGn=true", "--no-daemon"]),
        };
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }
        builder
    }

    /// Fails with [`ArtifactError::Missing`] if the expected artifact is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if an artifact is expected and not a file.
    pub fn verify(&self) -> Result<()> {
        let Some(expected) = &self.expected else {
            return Ok(());
        };
        if expected.is_file() {
            return Ok(());
        }
        let kind = match self.operation {
            HvigorOperation::AssembleHar { .. } => "har",
            HvigorOperation::AssembleApp { .. } => "app",
        };
        Err(ArtifactError::Missing {
            kind: kind.to_string(),
            path: expected.display().to_string(),
        }
        .into())
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.command(ctx);
        if dry_run_skip(ctx, &builder) {
            return Ok(());
        }

        let what = match &self.operation {
            HvigorOperation::AssembleHar { module } => format!("assembleHar for {module}"),
            HvigorOperation::AssembleApp { build_type } => format!("assembleApp ({build_type})"),
        };

        builder
            .run()
            .await
            .with_context(|| format!("Failed to run hvigorw {what}"))?;
        self.verify()?;

        info!("hvigorw {what} completed successfully");
        Ok(())
    }
}

impl Tool for HvigorTool {
    fn name(&self) -> &'static str {
        "hvigorw"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

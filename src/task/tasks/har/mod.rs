// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-module HAR packaging.
//!
//! ```text
//! prepare_env: NODE_HOME from COMMANDLINE_TOOL_DIR
//! run:
//!   commit = HEAD of <root>
//!   delete build.ignore_files        (hvigorw honors .gitignore)
//!   for module (resolved before any command ran):
//!     parameter.json       lynx_version = version
//!     build-profile.json5  placeholders --> version, commit
//!     hvigorw assembleHar  (cwd harmony)
//!     require <module>/build/default/outputs/default/<name>.har
//! ```

use futures_util::future::BoxFuture;
use tracing::info;

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::node::ensure_node_home;
use crate::error::Result;
use crate::git::query::head_commit;
use crate::patch::{patch_build_profile, patch_parameter_file};
use crate::task::helpers::remove_file;
use crate::task::registry::ResolvedModule;
use crate::task::tools::Tool;
use crate::task::tools::hvigor::HvigorTool;
use crate::task::{TaskContext, Taskable};

#[derive(Debug, Clone)]
pub struct HarTask {
    modules: Vec<ResolvedModule>,
    version: String,
}

impl HarTask {
    /// Packages `modules` stamped with `version`.
    ///
    /// Modules must already be resolved against the registry, so a
    /// misspelled name fails before anything runs.
    #[must_use]
    pub fn new(modules: Vec<ResolvedModule>, version: impl Into<String>) -> Self {
        Self {
            modules,
            version: version.into(),
        }
    }

    #[must_use]
    pub fn modules(&self) -> &[ResolvedModule] {
        &self.modules
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    async fn scrub_ignore_files(&self, ctx: &TaskContext) -> Result<()> {
        let root = ctx.root()?;
        for file in &ctx.config().build.ignore_files {
            remove_file(ctx, &root.join(file), "ignore file").await?;
        }
        Ok(())
    }

    async fn stamp_version(&self, ctx: &TaskContext, module: &ResolvedModule, commit: &str) -> Result<()> {
        let harmony = ctx.harmony_dir()?;
        if ctx.is_dry_run() {
            info!(
                "[dry-run] Would stamp {} ({commit}) into {} and {}",
                self.version,
                harmony.join("parameter.json").display(),
                module.dir.join("build-profile.json5").display()
            );
            return Ok(());
        }

        patch_parameter_file(harmony, &self.version).await?;
        patch_build_profile(&module.dir, &self.version, commit).await?;
        Ok(())
    }

    async fn package(&self, ctx: &TaskContext, module: &ResolvedModule) -> Result<()> {
        HvigorTool::assemble_har(&module.name)
            .cwd(ctx.harmony_dir()?)
            .expect_artifact(module.har_path())
            .run(&ctx.tool_context())
            .await
    }

    async fn do_run(&self, ctx: &TaskContext) -> Result<()> {
        let commit = head_commit(ctx.root()?)?;
        info!("commit hash is {commit}");

        self.scrub_ignore_files(ctx).await?;
        info!("publish version is {}", self.version);

        for module in &self.modules {
            info!(module = %module.name, dir = %module.dir.display(), "Packaging HAR");
            self.stamp_version(ctx, module, &commit).await?;
            self.package(ctx, module).await?;
        }
        Ok(())
    }
}

impl Taskable for HarTask {
    fn name(&self) -> &'static str {
        "har"
    }

    fn enabled(&self, _ctx: &TaskContext) -> bool {
        !self.modules.is_empty()
    }

    fn prepare_env(&self, _config: &Config, env: &mut Env) {
        ensure_node_home(env);
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

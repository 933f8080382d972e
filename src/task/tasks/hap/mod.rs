// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-project app packaging with `hvigorw assembleApp`.

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::config::types::BuildType;
use crate::core::env::container::Env;
use crate::core::env::node::ensure_node_home;
use crate::error::Result;
use crate::task::tools::Tool;
use crate::task::tools::hvigor::HvigorTool;
use crate::task::{TaskContext, Taskable};

#[derive(Debug, Clone)]
pub struct HapTask {
    build_type: BuildType,
}

impl HapTask {
    #[must_use]
    pub const fn new(build_type: BuildType) -> Self {
        Self { build_type }
    }

    async fn do_run(&self, ctx: &TaskContext) -> Result<()> {
        HvigorTool::assemble_app(self.build_type)
            .cwd(ctx.harmony_dir()?)
            .run(&ctx.tool_context())
            .await
    }
}

impl Taskable for HapTask {
    fn name(&self) -> &'static str {
        "hap"
    }

    fn prepare_env(&self, _config: &Config, env: &mut Env) {
        ensure_node_home(env);
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-ABI native build.
//!
//! ```text
//! for abi in build.abis:
//!   out = <paths.out>/harmony_<type>_<cpu>[_dev]
//!   gn gen out --args=...        (cwd harmony)
//!   ninja -C out <ninja_target>  (cwd harmony)
//!   copy artifacts: out/<file> --> <root>/<dest>/<abi>
//! ```

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::info;

use crate::config::types::BuildType;
use crate::error::Result;
use crate::task::helpers::copy_into_dir;
use crate::task::tools::Tool;
use crate::task::tools::gn::GnTool;
use crate::task::tools::ninja::NinjaTool;
use crate::task::{TaskContext, Taskable};

/// gn `target_cpu` for an ABI.
#[must_use]
pub fn gn_cpu(abi: &str) -> &'static str {
    if abi == "arm64-v8a" { "arm64" } else { "x64" }
}

/// Out directory name, e.g. `harmony_release_arm64_dev`.
#[must_use]
pub fn out_dir_name(build_type: BuildType, cpu: &str, dev: bool) -> String {
    let suffix = if dev { "_dev" } else { "" };
    format!("harmony_{build_type}_{cpu}{suffix}")
}

/// gn args for one ABI, followed by `extra`.
#[must_use]
pub fn gn_args(build_type: BuildType, cpu: &str, dev: bool, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        r#"target_os="harmony""#.to_string(),
        r#"jsengine_type="quickjs""#.to_string(),
        format!("is_debug={}", build_type.is_debug()),
        format!(r#"target_cpu="{cpu}""#),
        r#"harmony_sdk_version="default""#.to_string(),
        "use_primjs_napi=true".to_string(),
        "build_lepus_compile=false".to_string(),
        "enable_primjs_prebuilt_lib=true".to_string(),
        "enable_inspector=true".to_string(),
        "enable_harmony_shared=true".to_string(),
    ];
    if dev {
        args.extend([
            "enable_testbench_replay=true".to_string(),
            "enable_testbench_recorder=true".to_string(),
            r#"enable_trace="perfetto""#.to_string(),
        ]);
    }
    args.extend(extra.iter().cloned());
    args
}

/// Native build for every configured ABI.
#[derive(Debug, Clone)]
pub struct NativeTask {
    build_type: BuildType,
    dev: bool,
}

impl NativeTask {
    #[must_use]
    pub const fn new(build_type: BuildType, dev: bool) -> Self {
        Self { build_type, dev }
    }

    /// Out directory for one ABI under `out_root`.
    #[must_use]
    pub fn out_dir(&self, out_root: &Path, abi: &str) -> PathBuf {
        out_root.join(out_dir_name(self.build_type, gn_cpu(abi), self.dev))
    }

    async fn build_abi(&self, ctx: &TaskContext, abi: &str) -> Result<()> {
        let config = ctx.config();
        let harmony = ctx.harmony_dir()?;
        let cpu = gn_cpu(abi);
        let out_dir = self.out_dir(config.paths.out()?, abi);
        let tool_ctx = ctx.tool_context();

        info!(abi, cpu, out = %out_dir.display(), "Building native libraries");

        GnTool::new(&out_dir)
            .args(gn_args(self.build_type, cpu, self.dev, &config.build.extra_gn_args))
            .cwd(harmony)
            .run(&tool_ctx)
            .await?;

        NinjaTool::new(&out_dir, &config.build.ninja_target)
            .cwd(harmony)
            .run(&tool_ctx)
            .await?;

        self.copy_artifacts(ctx, &out_dir, abi).await
    }

    async fn copy_artifacts(&self, ctx: &TaskContext, out_dir: &Path, abi: &str) -> Result<()> {
        let root = ctx.root()?;
        for route in &ctx.config().artifacts {
            let src = out_dir.join(&route.file);
            let dst = route.dest_dir(root, abi);
            if !copy_into_dir(ctx, &src, &dst, "shared object").await? {
                info!(
                    "skip cp {} to {} as the {} file is not built",
                    route.file,
                    dst.display(),
                    route.file
                );
            }
        }
        Ok(())
    }

    async fn do_run(&self, ctx: &TaskContext) -> Result<()> {
        for abi in &ctx.config().build.abis {
            self.build_abi(ctx, abi).await?;
        }
        Ok(())
    }
}

impl Taskable for NativeTask {
    fn name(&self) -> &'static str {
        "native"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

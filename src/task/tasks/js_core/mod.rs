// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JS core build and devtool resources.
//!
//! ```text
//! PATH = <paths.node_bin>:$PATH          (kept for all later stages)
//! python3 ./build.py --platform android
//!     --release_output <lynx_harmony rawfile>/lynx_core.js
//!     --dev_output     <lynx_devtool rawfile>/lynx_core_dev.js
//!     --version <version>                (cwd <root>/tools/js_tools)
//! python3 devtool/{base_devtool,lynx_devtool}/resources/copy_resources.py
//!                                        (cwd <root>, skipped if absent)
//! ```

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::Result;
use crate::task::tools::Tool;
use crate::task::tools::python::PythonTool;
use crate::task::{TaskContext, Taskable};

const RELEASE_RAWFILE: &str = "platform/harmony/lynx_harmony/src/main/resources/rawfile";
const DEV_RAWFILE: &str = "platform/harmony/lynx_devtool/src/main/resources/rawfile";

/// Resource copy scripts run after the JS core build, in order.
#[must_use]
pub fn devtool_scripts(root: &Path) -> [PathBuf; 2] {
    ["base_devtool", "lynx_devtool"].map(|name| {
        root.join("devtool")
            .join(name)
            .join("resources")
            .join("copy_resources.py")
    })
}

#[derive(Debug, Clone)]
pub struct LynxCoreTask {
    version: String,
}

impl LynxCoreTask {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `tools/js_tools/build.py` invocation.
    #[must_use]
    pub fn build_script(&self, root: &Path) -> PythonTool {
        let release = root.join(RELEASE_RAWFILE).join("lynx_core.js");
        let dev = root.join(DEV_RAWFILE).join("lynx_core_dev.js");
        PythonTool::new("./build.py")
            .arg("--platform")
            .arg("android")
            .arg("--release_output")
            .arg(release.display().to_string())
            .arg("--dev_output")
            .arg(dev.display().to_string())
            .arg("--version")
            .arg(&self.version)
            .cwd(root.join("tools").join("js_tools"))
    }

    async fn do_run(&self, ctx: &TaskContext) -> Result<()> {
        let root = ctx.root()?;
        let tool_ctx = ctx.tool_context();

        info!(version = %self.version, "Building lynx core");
        self.build_script(root).run(&tool_ctx).await?;

        for script in devtool_scripts(root) {
            if script.exists() {
                PythonTool::new(&script).cwd(root).run(&tool_ctx).await?;
            } else {
                info!("Script {} does not exist.", script.display());
            }
        }
        Ok(())
    }
}

impl Taskable for LynxCoreTask {
    fn name(&self) -> &'static str {
        "lynx-core"
    }

    fn prepare_env(&self, config: &Config, env: &mut Env) {
        match config.paths.node_bin() {
            Ok(node_bin) => {
                debug!(path = %node_bin.display(), "prepending node to PATH");
                env.prepend_path(node_bin);
            }
            Err(e) => debug!(error = %e, "node bin directory not configured"),
        }
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

#[cfg(test)]
mod tests;

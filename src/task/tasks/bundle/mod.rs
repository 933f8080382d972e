// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explorer bundles.
//!
//! ```text
//! explorer/showcase/build_and_copy.py     (cwd root)
//! explorer/homepage/build.py              (cwd explorer/homepage)
//!   explorer/homepage/dist/main.lynx.bundle
//!     --> explorer/harmony/lynx_explorer/src/main/resources/rawfile/
//! ```
//!
//! Every missing script or bundle is a warning.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{info, warn};

use crate::error::Result;
use crate::task::helpers::copy_into_dir;
use crate::task::tools::Tool;
use crate::task::tools::python::PythonTool;
use crate::task::{TaskContext, Taskable};

/// Locations of the explorer bundle inputs and output under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub showcase_script: PathBuf,
    pub homepage_script: PathBuf,
    pub homepage_bundle: PathBuf,
    pub rawfile_dir: PathBuf,
}

impl BundlePaths {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let explorer = root.join("explorer");
        Self {
            showcase_script: explorer.join("showcase").join("build_and_copy.py"),
            homepage_script: explorer.join("homepage").join("build.py"),
            homepage_bundle: explorer.join("homepage").join("dist").join("main.lynx.bundle"),
            rawfile_dir: explorer
                .join("harmony")
                .join("lynx_explorer")
                .join("src")
                .join("main")
                .join("resources")
                .join("rawfile"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BundleTask;

impl BundleTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn do_run(&self, ctx: &TaskContext) -> Result<()> {
        let root = ctx.root()?;
        let paths = BundlePaths::new(root);
        let tool_ctx = ctx.tool_context();

        if paths.showcase_script.exists() {
            PythonTool::new(&paths.showcase_script)
                .cwd(root)
                .run(&tool_ctx)
                .await?;
        } else {
            warn!("{} not found", paths.showcase_script.display());
        }

        if !paths.homepage_script.exists() {
            warn!("{} not found", paths.homepage_script.display());
            return Ok(());
        }

        let homepage_dir = paths.homepage_script.parent().unwrap_or(root);
        PythonTool::new(&paths.homepage_script)
            .cwd(homepage_dir)
            .run(&tool_ctx)
            .await?;

        if copy_into_dir(ctx, &paths.homepage_bundle, &paths.rawfile_dir, "homepage bundle").await? {
            info!(dst = %paths.rawfile_dir.display(), "Copied homepage bundle");
        } else {
            warn!("{} not found", paths.homepage_bundle.display());
        }
        Ok(())
    }
}

impl Taskable for BundleTask {
    fn name(&self) -> &'static str {
        "bundle"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}

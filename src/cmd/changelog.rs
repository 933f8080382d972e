// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Changelog command: git-cliff into `<module>/CHANGELOG.md`.

use std::sync::Arc;

use tracing::info;

use crate::cli::release::ChangelogArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::Result;
use crate::task::tools::cliff::CliffTool;
use crate::task::tools::{Tool, ToolContext};

use super::resolve_requested_modules;

/// Changelog file written into each module directory.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// # Errors
///
/// Returns an error if a module is unknown or git-cliff fails.
pub async fn run_changelog_command(args: &ChangelogArgs, config: &Config, env: Env) -> Result<()> {
    let modules = resolve_requested_modules(args.modules.as_deref(), config)?;
    let cliff_config = config.paths.cliff_config()?;
    let root = config.paths.root()?;

    let ctx = ToolContext::new(Arc::new(config.clone()), env, config.global.dry);
    for module in &modules {
        info!(module = %module.name, "Generating changelog");
        CliffTool::new(
            &cliff_config,
            &args.base_commit,
            &args.version,
            module.dir.join(CHANGELOG_FILE),
        )
        .cwd(root)
        .run(&ctx)
        .await?;
    }
    Ok(())
}

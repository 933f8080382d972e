// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command: `ohpm publish` for each module HAR.

use std::sync::Arc;

use tracing::info;

use crate::cli::release::PublishArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::require_var;
use crate::error::Result;
use crate::task::tools::ohpm::OhpmTool;
use crate::task::tools::{Tool, ToolContext};

use super::resolve_requested_modules;

/// Variable holding the ohpm publish id.
pub const PUBLISH_ID: &str = "PUBLISH_ID";

/// Variable holding the path of the signing key.
pub const KEY_PATH: &str = "KEY_PATH";

/// Publishes `<module>.har` from each module's output directory.
///
/// Both credentials are checked before the registry is read or any command
/// runs.
///
/// # Errors
///
/// Returns an error if a credential is unset, a module is unknown, or ohpm
/// fails.
pub async fn run_publish_command(args: &PublishArgs, config: &Config, env: Env) -> Result<()> {
    let publish_id = require_var(&env, PUBLISH_ID)?;
    let key_path = require_var(&env, KEY_PATH)?;

    let modules = resolve_requested_modules(args.modules.as_deref(), config)?;
    if let Some(version) = &args.version {
        info!("publish version is {version}");
    }

    let ctx = ToolContext::new(Arc::new(config.clone()), env, config.global.dry);
    for module in &modules {
        info!(module = %module.name, "Publishing");
        OhpmTool::publish(format!("{}.har", module.name), &publish_id, &key_path)
            .cwd(module.har_output_dir())
            .run(&ctx)
            .await?;
    }
    Ok(())
}

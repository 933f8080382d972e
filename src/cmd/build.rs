// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! BuildArgs --> plan_tasks()          registry resolved here, before
//!   [lynx-core] [bundle] native         any tool is started
//!   [har] [hap]
//!      |
//!      v
//! TaskManager::run_all()  (sequential, env carried forward)
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::node::COMMANDLINE_TOOL_DIR;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use crate::task::{Stages, Task};
use crate::task::manager::TaskManager;
use crate::task::tasks::bundle::BundleTask;
use crate::task::tasks::hap::HapTask;
use crate::task::tasks::har::HarTask;
use crate::task::tasks::js_core::LynxCoreTask;
use crate::task::tasks::native::NativeTask;

use super::resolve_requested_modules;

/// Variables echoed at the start of a build.
const LOGGED_VARS: &[&str] = &[COMMANDLINE_TOOL_DIR, "HARMONY_HOME", "PATH"];

/// Main handler for build command.
///
/// # Errors
///
/// Returns an error if module resolution fails or any task fails.
pub async fn run_build_command(args: &BuildArgs, config: &Config, env: Env) -> Result<()> {
    info!(?args, "Build arguments");
    for name in LOGGED_VARS {
        info!("{name}: {}", env.get(name).unwrap_or_default());
    }

    let config = Arc::new(config.clone());
    let tasks = plan_tasks(args, &config)?;
    log_tool_locations(&config, args.stages());

    let mut manager = TaskManager::new(Arc::clone(&config), env).with_dry_run(config.global.dry);
    for task in tasks {
        manager.add(task);
    }

    manager.run_all().await?;
    info!("Build completed successfully");
    Ok(())
}

/// Tasks selected by `args`, in execution order.
///
/// # Errors
///
/// Returns an error if `--build-har` names a module the registry does not
/// declare, or the registry cannot be read.
pub fn plan_tasks(args: &BuildArgs, config: &Config) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();

    if args.build_lynx_core {
        let version = args
            .override_version
            .clone()
            .unwrap_or_else(|| config.build.core_version.clone());
        tasks.push(Task::LynxCore(LynxCoreTask::new(version)));
    }

    if args.build_bundle {
        tasks.push(Task::Bundle(BundleTask::new()));
    }

    tasks.push(Task::Native(NativeTask::new(args.build_type(), args.dev)));

    if args.build_har {
        let modules = resolve_requested_modules(args.modules.as_deref(), config)?;
        if modules.is_empty() {
            warn!("--build-har given without --modules, no HAR will be packaged");
        } else {
            let version = args
                .override_version
                .clone()
                .unwrap_or_else(|| config.build.har_version.clone());
            tasks.push(Task::Har(HarTask::new(modules, version)));
        }
    }

    if args.build_hap {
        tasks.push(Task::Hap(HapTask::new(args.build_type())));
    }

    Ok(tasks)
}

/// Logs where each tool the selected stages need resolves to.
///
/// A miss is only a warning: `PATH` may still change before the tool runs.
fn log_tool_locations(config: &Config, stages: Stages) {
    let tools = &config.tools;
    let mut needed = vec![&tools.gn, &tools.ninja];
    if stages.intersects(Stages::LYNX_CORE | Stages::BUNDLE) {
        needed.push(&tools.python);
    }
    if stages.intersects(Stages::HAR | Stages::HAP) {
        needed.push(&tools.hvigorw);
    }

    for tool in needed {
        let name = tool.to_string_lossy();
        match ProcessBuilder::find(&name) {
            Some(path) => debug!(tool = %name, path = %path.display(), "Tool found"),
            None => warn!(tool = %name, "Tool not found in PATH"),
        }
    }
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for task execution.
//!
//! ```text
//! Task --> ToolContext --> Tool::command() --> ProcessBuilder::run()
//!   gn, ninja, hvigorw, ohpm, git-cliff, python
//! ToolContext: config + Env handed to every child + dry-run flag
//! ```
//!
//! In dry-run mode a tool logs the command line it would run and returns.

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

pub mod cliff;
pub mod gn;
pub mod hvigor;
pub mod ninja;
pub mod ohpm;
pub mod python;

/// Context provided to tools during execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// When true, tools log what they would do without making changes.
    dry_run: bool,

    config: Arc<Config>,

    /// Environment every child process receives.
    env: Env,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, env: Env, dry_run: bool) -> Self {
        Self {
            dry_run,
            config,
            env,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns the environment handed to child processes.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Starts a process builder for `program` carrying this context's env.
    #[must_use]
    pub fn process(&self, program: &Path) -> ProcessBuilder {
        ProcessBuilder::new(program).env(self.env.clone())
    }
}

/// Trait for tools that execute external processes.
///
/// Tools are the building blocks of tasks. Each tool wraps one external
/// command with templated arguments.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "gn", "hvigorw").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

/// Logs a command instead of running it. Returns true in dry-run mode.
fn dry_run_skip(ctx: &ToolContext, builder: &ProcessBuilder) -> bool {
    if !ctx.is_dry_run() {
        return false;
    }
    if let Some(cwd) = builder.working_dir() {
        debug!(cwd = %cwd.display(), "[dry-run] working directory");
    }
    info!("[dry-run] Would run {}", builder.command_line());
    true
}

#[cfg(test)]
pub(crate) mod test_utils;

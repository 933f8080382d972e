// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! TaskManager
//!      |
//!      v
//!   Task enum ----> TaskContext (config, env, dry-run)
//!      |
//!      v
//!  prepare_env --> run
//!                   |
//!                   v
//!                 Tools
//!        gn, ninja, hvigorw, python..
//!
//! Task variants (in build order):
//!   LynxCore, Bundle, Native, Har, Hap
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TaskManager`](manager::TaskManager) | Runs tasks one after another |
//! | [`Task`] | Enum dispatching to concrete task implementations |
//! | [`Taskable`] | Trait defining the common task interface |
//! | [`Stages`] | Bitflags selecting which build stages run |
//! | [`TaskContext`] | Execution context with config and child environment |
//!
//! # The Taskable Pattern
//!
//! - [`Taskable::name()`] - Returns the task name
//! - [`Taskable::enabled()`] - Whether the task should run (default: `true`)
//! - [`Taskable::prepare_env()`] - Adjusts the environment seen by this and
//!   every later task
//! - [`Taskable::run()`] - Executes the task
//!
//! The [`Task`] enum implements `Taskable` via the `impl_taskable_for_task!` macro,
//! which generates a match arm for each variant.

pub mod helpers;
pub mod manager;
pub mod registry;
pub mod tasks;
pub mod tools;

use bitflags::bitflags;
use futures_util::future::BoxFuture;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::Result;
use crate::task::tools::ToolContext;

use tasks::bundle::BundleTask;
use tasks::hap::HapTask;
use tasks::har::HarTask;
use tasks::js_core::LynxCoreTask;
use tasks::native::NativeTask;

bitflags! {
    /// Build stages requested on the command line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Stages: u8 {
        /// JS core build and devtool resources.
        const LYNX_CORE = 0x01;

        /// Explorer showcase and homepage bundles.
        const BUNDLE = 0x02;

        /// gn + ninja for every ABI, then shared object copies.
        const NATIVE = 0x04;

        /// Per-module HAR packaging.
        const HAR = 0x08;

        /// Whole-project app packaging.
        const HAP = 0x10;
    }
}

/// Trait for task implementations.
///
/// # Example
///
/// ```ignore
/// impl Taskable for MyTask {
///     fn name(&self) -> &str { "my-task" }
///     fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
///         Box::pin(self.do_run(ctx))
///     }
/// }
/// ```
pub trait Taskable {
    /// Returns the task name.
    fn name(&self) -> &str;

    /// Returns whether this task is enabled for the given context.
    fn enabled(&self, _ctx: &TaskContext) -> bool {
        true
    }

    /// Adjusts the child environment before the task runs.
    ///
    /// Changes stay in effect for every later task.
    fn prepare_env(&self, _config: &Config, _env: &mut Env) {}

    /// Executes the task.
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to tasks during execution.
#[derive(Debug, Clone)]
pub struct TaskContext {
    config: Arc<Config>,

    /// Environment handed to every child process.
    env: Env,

    dry_run: bool,
}

impl TaskContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, env: Env) -> Self {
        Self {
            config,
            env,
            dry_run: false,
        }
    }

    /// Gets a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    pub(crate) const fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Repository root.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration was not resolved.
    pub fn root(&self) -> Result<&Path> {
        self.config.paths.root()
    }

    /// HarmonyOS project directory, the working directory of gn, ninja and hvigorw.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration was not resolved.
    pub fn harmony_dir(&self) -> Result<&Path> {
        self.config.paths.harmony()
    }

    /// Creates a `ToolContext` from this `TaskContext`.
    #[must_use]
    pub fn tool_context(&self) -> ToolContext {
        ToolContext::new(Arc::clone(&self.config), self.env.clone(), self.dry_run)
    }
}

/// A build stage.
#[derive(Debug, Clone)]
pub enum Task {
    /// JS core build and devtool resources.
    LynxCore(LynxCoreTask),
    /// Explorer bundles.
    Bundle(BundleTask),
    /// Per-ABI native build.
    Native(NativeTask),
    /// HAR packaging.
    Har(HarTask),
    /// App packaging.
    Hap(HapTask),
}

impl Task {
    /// Runs the task unless it is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails.
    pub async fn run(&self, ctx: &TaskContext) -> Result<()> {
        if !Taskable::enabled(self, ctx) {
            tracing::debug!(task = %Taskable::name(self), "Skipping disabled task");
            return Ok(());
        }

        Taskable::run(self, ctx).await
    }

    /// The stage this task belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stages {
        match self {
            Self::LynxCore(_) => Stages::LYNX_CORE,
            Self::Bundle(_) => Stages::BUNDLE,
            Self::Native(_) => Stages::NATIVE,
            Self::Har(_) => Stages::HAR,
            Self::Hap(_) => Stages::HAP,
        }
    }
}

/// Macro to implement Taskable for Task enum by delegating to inner types.
macro_rules! impl_taskable_for_task {
    ($($variant:ident),+ $(,)?) => {
        impl Taskable for Task {
            fn name(&self) -> &str {
                match self {
                    $(Task::$variant(t) => Taskable::name(t),)+
                }
            }

            fn enabled(&self, ctx: &TaskContext) -> bool {
                match self {
                    $(Task::$variant(t) => Taskable::enabled(t, ctx),)+
                }
            }

            fn prepare_env(&self, config: &Config, env: &mut Env) {
                match self {
                    $(Task::$variant(t) => Taskable::prepare_env(t, config, env),)+
                }
            }

            fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::run(t, ctx),)+
                }
            }
        }
    };
}

impl_taskable_for_task!(LynxCore, Bundle, Native, Har, Hap);

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task manager for orchestrating task execution.
//!
//! ```text
//! TaskManager::new(config, env)
//!   .with_dry_run()  .add(task)
//!   .run_all().await
//!       per task: prepare_env --> run (inside a "stage" span)
//!       strictly sequential; the first failure stops the run
//! ```

use std::sync::Arc;

use crate::error::Result;
use anyhow::Context;
use tracing::Instrument;

use crate::config::Config;
use crate::core::env::container::Env;

use super::{Stages, Task, TaskContext, Taskable};

/// Manager for orchestrating task execution.
///
/// Tasks are executed sequentially in the order they were added.
pub struct TaskManager {
    tasks: Vec<Task>,

    config: Arc<Config>,

    /// Environment captured at startup, handed to the first task.
    env: Env,

    dry_run: bool,
}

impl TaskManager {
    #[must_use]
    pub const fn new(config: Arc<Config>, env: Env) -> Self {
        Self {
            tasks: Vec::new(),
            config,
            env,
            dry_run: false,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Adds a task to be executed.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the names of queued tasks in run order.
    #[must_use]
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|task| task.name()).collect()
    }

    /// Returns the union of the stages of all queued tasks.
    #[must_use]
    pub fn stages(&self) -> Stages {
        self.tasks
            .iter()
            .fold(Stages::empty(), |acc, task| acc | task.stage())
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn create_context(&self) -> TaskContext {
        TaskContext::new(Arc::clone(&self.config), self.env.clone()).with_dry_run(self.dry_run)
    }

    /// Runs all tasks sequentially.
    ///
    /// Returns the environment as left by the last task.
    ///
    /// # Errors
    ///
    /// Returns an error if any task fails.
    pub async fn run_all(&self) -> Result<Env> {
        let mut ctx = self.create_context();

        if self.tasks.is_empty() {
            tracing::debug!("No tasks to run");
            return Ok(ctx.env().clone());
        }

        tracing::info!(task_count = self.tasks.len(), "Starting task execution");

        for (i, task) in self.tasks.iter().enumerate() {
            tracing::info!(
                task = %task.name(),
                index = i + 1,
                total = self.tasks.len(),
                "Running task"
            );

            let config = Arc::clone(ctx.config());
            task.prepare_env(&config, ctx.env_mut());

            let span = tracing::info_span!("stage", name = %task.name());
            task.run(&ctx)
                .instrument(span)
                .await
                .with_context(|| format!("Task '{}' failed", task.name()))?;
        }

        tracing::info!("All tasks completed successfully");
        Ok(ctx.env().clone())
    }
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> Env (copy-on-write, shared by clones)
//!                     set / get / prepend_path
//! require_var(&Env, "KEY_PATH") --> EnvError::MissingVar when unset or empty
//! ensure_node_home(&mut Env)    before hvigorw
//! ```
//!
//! The process environment is captured once and never mutated; every child
//! process receives its variables from an [`container::Env`].

pub mod container;
pub mod node;


use crate::error::EnvError;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars().collect()
}

/// Returns the value of a required variable.
///
/// # Errors
///
/// Returns [`EnvError::MissingVar`] if the variable is unset or empty.
pub fn require_var(env: &container::Env, name: &str) -> Result<String, EnvError> {
    env.get(name)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| EnvError::MissingVar {
            name: name.to_string(),
        })
}

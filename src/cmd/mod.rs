// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build, publish, changelog, modules, config
//! ```

pub mod build;
pub mod changelog;
pub mod config;
pub mod modules;
pub mod publish;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::Result;
use crate::task::registry::{ModuleRegistry, ResolvedModule, resolve_modules};

/// Expands `--modules` and resolves every name against the registry.
///
/// Nothing is read when the list is empty, so commands without modules work
/// without a `build-profile.json5`.
pub(crate) fn resolve_requested_modules(
    requested: Option<&[String]>,
    config: &Config,
) -> Result<Vec<ResolvedModule>> {
    let names = resolve_modules(requested, &config.build.default_modules);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let registry = ModuleRegistry::load(&config.paths.build_profile()?)?;
    let modules = registry.resolve(&names)?;
    tracing::info!(
        modules = ?modules.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
        "Resolved modules"
    );
    Ok(modules)
}

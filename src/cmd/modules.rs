// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `modules` command: prints the registry.

use crate::config::Config;
use crate::error::Result;
use crate::task::registry::ModuleRegistry;

/// One `name  path` line per registry entry, names padded to a column.
#[must_use]
pub fn format_modules(registry: &ModuleRegistry) -> Vec<String> {
    let width = registry
        .entries()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);

    registry
        .entries()
        .iter()
        .map(|e| format!("{:<width$}  {}", e.name, e.src_path.display()))
        .collect()
}

/// # Errors
///
/// Returns an error if `build-profile.json5` cannot be read or parsed.
pub fn run_modules_command(config: &Config) -> Result<()> {
    let registry = ModuleRegistry::load(&config.paths.build_profile()?)?;
    let lines = format_modules(&registry);
    if lines.is_empty() {
        println!("No modules declared");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `hbuild options` and `hbuild configs`.

use crate::config::Config;

/// Prints every effective setting as `section.key = value`.
pub fn run_options_command(config: &Config) {
    config
        .format_options()
        .iter()
        .for_each(|line| println!("{line}"));
}

/// Prints the config layers in the order they were merged.
pub fn run_configs_command(layers: &[String]) {
    if layers.is_empty() {
        println!("No config files found; built-in defaults only");
        return;
    }
    layers.iter().for_each(|line| println!("{line}"));
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command arguments.
//!
//! # Flag Effects
//!
//! ```text
//! always:             native build for every ABI
//! --build-lynx-core:  JS core + devtool resources first
//! --build-bundle:     explorer bundles
//! --build-har:        HAR per module (needs --modules)
//! --build-hap:        app package last
//! --debug / --dev:    out dir, gn args and app build mode
//! ```
//!
//! Underscore spellings (`--build_har`, `--override_version`, ...) are
//! accepted as aliases.

use clap::Args;

use crate::config::types::BuildType;
use crate::task::Stages;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Debug native build and app package.
    #[arg(long)]
    pub debug: bool,

    /// Enables testbench and perfetto tracing in the native build.
    #[arg(long)]
    pub dev: bool,

    /// Modules to package; a single 'default' selects the default list.
    /// Globs like 'lynx_*' are matched against build-profile.json5.
    #[arg(long, value_name = "MODULE", num_args = 0..)]
    pub modules: Option<Vec<String>>,

    /// Version for the JS core build and HAR packages.
    #[arg(long = "override-version", alias = "override_version", value_name = "VERSION")]
    pub override_version: Option<String>,

    /// Builds the JS core and copies devtool resources.
    #[arg(long = "build-lynx-core", alias = "build_lynx_core")]
    pub build_lynx_core: bool,

    /// Builds the explorer bundles.
    #[arg(long = "build-bundle", alias = "build_bundle")]
    pub build_bundle: bool,

    /// Prints every command (console log level DEBUG).
    #[arg(long)]
    pub verbose: bool,

    /// Packages each module as a HAR.
    #[arg(long = "build-har", alias = "build_har")]
    pub build_har: bool,

    /// Packages the app.
    #[arg(long = "build-hap", alias = "build_hap")]
    pub build_hap: bool,
}

impl BuildArgs {
    #[must_use]
    pub const fn build_type(&self) -> BuildType {
        BuildType::from_debug_flag(self.debug)
    }

    /// Stages selected by the flags. The native stage always runs.
    #[must_use]
    pub fn stages(&self) -> Stages {
        let mut stages = Stages::NATIVE;
        if self.build_lynx_core {
            stages |= Stages::LYNX_CORE;
        }
        if self.build_bundle {
            stages |= Stages::BUNDLE;
        }
        if self.build_har {
            stages |= Stages::HAR;
        }
        if self.build_hap {
            stages |= Stages::HAP;
        }
        stages
    }
}

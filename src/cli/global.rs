// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! harmony.toml      <- picked up from the current directory if present
//! --config FILE     <- Additional config files (can repeat)
//! HBUILD_*          <- Environment, e.g. HBUILD_TOOLS__HVIGORW
//! --set KEY=VAL     <- Direct config override, e.g. build.ninja_target=lynx
//! --root, --dry     <- Flags, applied last
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (defaults to --log-level)
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Config file loaded from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "harmony.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "HBUILD";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Logs every command and file change instead of performing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Framework source root (default: current directory).
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Sets an option, such as 'tools.hvigorw=/opt/hvigor/bin/hvigorw'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Flags come after `--set` pairs so they win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        if let Some(ref root) = self.root {
            overrides.push(format!("paths.root={}", root.display()));
        }

        overrides
    }

    /// Loader for all configuration sources, in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` pair is malformed.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        loader
            .with_env_prefix(ENV_PREFIX)
            .set_pairs(self.to_config_overrides())
    }

    /// Loads and validates the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load or the result is invalid.
    pub fn load_config(&self) -> Result<Config> {
        self.config_loader()?.build()
    }
}

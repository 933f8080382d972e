// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command arguments: `publish` and `changelog`.
//!
//! ```text
//! publish   --modules ... [--version V]
//!           needs PUBLISH_ID and KEY_PATH in the environment
//! changelog --modules ... --version V --base-commit C
//! ```

use clap::Args;

/// Arguments for the `publish` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PublishArgs {
    /// Modules to publish; a single 'default' selects the default list.
    #[arg(long, value_name = "MODULE", num_args = 0..)]
    pub modules: Option<Vec<String>>,

    /// SDK release version, for the log only.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Prints every command (console log level DEBUG).
    #[arg(long)]
    pub verbose: bool,
}

/// Arguments for the `changelog` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ChangelogArgs {
    /// Modules to write a CHANGELOG.md for.
    #[arg(long, value_name = "MODULE", num_args = 0..)]
    pub modules: Option<Vec<String>>,

    /// Version substituted for `<!-- version -->`.
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Changelog covers `<base-commit>..HEAD`.
    #[arg(long = "base-commit", alias = "base_commit", value_name = "COMMIT")]
    pub base_commit: String,

    /// Prints every command (console log level DEBUG).
    #[arg(long)]
    pub verbose: bool,
}

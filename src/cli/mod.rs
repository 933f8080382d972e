// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for harmony-build using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hbuild [global options] <command>
//! build [--debug] [--dev] [--modules ...] [--build-har] ...
//! publish --modules ...
//! changelog --modules ... --version V --base-commit C
//! modules
//! options
//! configs
//! ```

pub mod build;
pub mod global;
pub mod release;

#[cfg(test)]
mod tests;

use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::release::{ChangelogArgs, PublishArgs};
use clap::{Parser, Subcommand};

/// Lynx HarmonyOS Build Tool
///
/// Build and release automation for the Lynx HarmonyOS platform.
#[derive(Debug, Parser)]
#[command(
    name = "hbuild",
    author,
    version,
    about = "Lynx HarmonyOS Build Tool",
    long_about = "harmony-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Build and release automation for the Lynx HarmonyOS platform.\n\n\
                  `hbuild build` compiles the native libraries for every ABI.\n\
                  Add --build-har --modules default to package the default\n\
                  modules, or --build-hap for the explorer app. See\n\
                  `hbuild <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  hbuild reads `harmony.toml` from the current directory when it\n\
                  exists. Additional files can be given with --config and are\n\
                  loaded after it. HBUILD_* environment variables and --set\n\
                  pairs override file values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Configs,

    /// Lists the modules declared in build-profile.json5.
    Modules,

    /// Builds the native libraries and, optionally, packages.
    Build(BuildArgs),

    /// Publishes module HARs with ohpm.
    Publish(PublishArgs),

    /// Writes a CHANGELOG.md for each module with git-cliff.
    Changelog(ChangelogArgs),
}

impl Command {
    /// Whether the command asked for `--verbose` output.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.verbose,
            Self::Publish(args) => args.verbose,
            Self::Changelog(args) => args.verbose,
            Self::Version | Self::Options | Self::Configs | Self::Modules => false,
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

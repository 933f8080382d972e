// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Build | Publish | Changelog | Modules | Options | Configs
//! ```

use std::process::ExitCode;

use harmony_build::cli::global::GlobalOptions;
use harmony_build::cli::{self, Command};
use harmony_build::cmd::build::run_build_command;
use harmony_build::cmd::changelog::run_changelog_command;
use harmony_build::cmd::config::{run_configs_command, run_options_command};
use harmony_build::cmd::modules::run_modules_command;
use harmony_build::cmd::publish::run_publish_command;
use harmony_build::config::Config;
use harmony_build::core::env::current_env;
use harmony_build::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let verbose = cli.command.as_ref().is_some_and(Command::is_verbose);
    let log_config = LogConfig::from_cli(
        cli.global.log_level,
        cli.global.file_log_level,
        cli.global.log_file.as_deref(),
        verbose,
    );
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => cli
            .global
            .config_loader()
            .map(|loader| run_configs_command(&loader.format_loaded_files())),
        Some(Command::Modules) => load_config(&cli.global).and_then(|c| run_modules_command(&c)),
        Some(Command::Build(args)) => match load_config(&cli.global) {
            Ok(config) => run_build_command(args, &config, current_env()).await,
            Err(e) => Err(e),
        },
        Some(Command::Publish(args)) => match load_config(&cli.global) {
            Ok(config) => run_publish_command(args, &config, current_env()).await,
            Err(e) => Err(e),
        },
        Some(Command::Changelog(args)) => match load_config(&cli.global) {
            Ok(config) => run_changelog_command(args, &config, current_env()).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_config(global: &GlobalOptions) -> harmony_build::error::Result<Config> {
    global.load_config().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use crate::task::Stages;
use clap::Parser;

fn build_args(args: &[&str]) -> crate::cli::build::BuildArgs {
    let cli = Cli::try_parse_from(["hbuild", "build"].iter().chain(args)).unwrap();
    match cli.command {
        Some(Command::Build(args)) => args,
        other => panic!("expected build, got {other:?}"),
    }
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["hbuild", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "hbuild", "-l", "5", "-r", "/src/lynx", "--dry", "-s", "build.ninja_target=lynx", "build",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.root, Some(PathBuf::from("/src/lynx")));
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "build.ninja_target=lynx",
        "global.dry=true",
        "paths.root=/src/lynx",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["hbuild", "-l", "7", "version"]).is_err());
}

#[test]
fn test_build_defaults_to_native_only() {
    let args = build_args(&[]);
    assert_eq!(args.stages(), Stages::NATIVE);
    assert!(args.modules.is_none());
    assert!(!args.build_type().is_debug());
}

#[test]
fn test_build_flags() {
    let args = build_args(&[
        "--debug",
        "--dev",
        "--build-lynx-core",
        "--build-bundle",
        "--build-har",
        "--build-hap",
        "--override-version",
        "3.2.0",
        "--modules",
        "lynx",
        "lynx_*",
    ]);

    assert!(args.build_type().is_debug());
    assert!(args.dev);
    assert_eq!(args.stages(), Stages::all());
    assert_eq!(args.override_version.as_deref(), Some("3.2.0"));
    assert_eq!(
        args.modules,
        Some(vec!["lynx".to_string(), "lynx_*".to_string()])
    );
}

#[test]
fn test_build_underscore_aliases() {
    let args = build_args(&[
        "--build_har",
        "--build_hap",
        "--build_lynx_core",
        "--build_bundle",
        "--override_version",
        "1.0.0",
    ]);

    assert_eq!(args.stages(), Stages::all());
    assert_eq!(args.override_version.as_deref(), Some("1.0.0"));
}

#[test]
fn test_build_modules_without_values() {
    let args = build_args(&["--modules"]);
    assert_eq!(args.modules, Some(Vec::new()));
}

#[test]
fn test_publish_and_verbose() {
    let cli = Cli::try_parse_from([
        "hbuild", "publish", "--modules", "default", "--version", "3.2.0", "--verbose",
    ])
    .unwrap();

    let command = cli.command.unwrap();
    assert!(command.is_verbose());
    match command {
        Command::Publish(args) => {
            assert_eq!(args.modules, Some(vec!["default".to_string()]));
            assert_eq!(args.version.as_deref(), Some("3.2.0"));
        }
        other => panic!("expected publish, got {other:?}"),
    }
}

#[test]
fn test_changelog_requires_version_and_base() {
    assert!(Cli::try_parse_from(["hbuild", "changelog", "--version", "1.0.0"]).is_err());

    let cli = Cli::try_parse_from([
        "hbuild",
        "changelog",
        "--modules",
        "lynx",
        "--version",
        "1.0.0",
        "--base_commit",
        "abc123",
    ])
    .unwrap();
    match cli.command {
        Some(Command::Changelog(args)) => {
            assert_eq!(args.base_commit, "abc123");
            assert_eq!(args.version, "1.0.0");
            assert!(!args.verbose);
        }
        other => panic!("expected changelog, got {other:?}"),
    }
}

#[test]
fn test_malformed_set_pair_fails() {
    let global = GlobalOptions {
        options: vec!["no-equals".to_string()],
        ..GlobalOptions::default()
    };
    assert!(global.config_loader().is_err());
}

#[test]
fn test_root_flag_wins_over_set() {
    let temp = tempfile::tempdir().unwrap();
    let global = GlobalOptions {
        root: Some(temp.path().to_path_buf()),
        options: vec!["paths.root=/nowhere".to_string()],
        ..GlobalOptions::default()
    };

    let config = global.load_config().unwrap();

    assert_eq!(config.paths.root().unwrap(), temp.path());
}

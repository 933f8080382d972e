// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigSource;
use super::types::{ArtifactRoute, BuildType};
use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.build.abis, ["arm64-v8a", "x86_64"]);
    assert_eq!(config.build.default_modules.len(), 6);
    assert_eq!(config.build.ninja_target, "default");
    assert_eq!(config.build.har_version, "0.0.1-placeholder");
    assert_eq!(config.build.core_version, "0.0.1");
    assert_eq!(config.tools.git_cliff, PathBuf::from("git-cliff"));
    assert_eq!(
        config.artifacts,
        [
            ArtifactRoute::new("liblynx.so", "platform/harmony/lynx_harmony/libs"),
            ArtifactRoute::new("liblynxbase.so", "base/platform/harmony/libs"),
            ArtifactRoute::new("liblynxdevtool.so", "platform/harmony/lynx_devtool/libs"),
        ]
    );
}

#[test]
fn test_build_type() {
    assert_eq!(BuildType::from_debug_flag(true), BuildType::Debug);
    assert_eq!(BuildType::from_debug_flag(false).to_string(), "release");
    assert_eq!("Debug".parse::<BuildType>().unwrap(), BuildType::Debug);
    assert!("relwithdebinfo".parse::<BuildType>().is_err());
}

#[test]
fn test_parse_resolves_paths_from_root() {
    let config = Config::parse(
        r#"
        [paths]
        root = "/src/lynx"
        out = "/tmp/out"
        "#,
    )
    .unwrap();

    let paths = &config.paths;
    assert_eq!(paths.root().unwrap(), Path::new("/src/lynx"));
    assert_eq!(paths.harmony().unwrap(), Path::new("/src/lynx/platform/harmony"));
    assert_eq!(paths.out().unwrap(), Path::new("/tmp/out"));
    assert_eq!(
        paths.node_bin().unwrap(),
        Path::new("/src/lynx/../buildtools/node/bin")
    );
    assert_eq!(
        paths.build_profile().unwrap(),
        Path::new("/src/lynx/platform/harmony/build-profile.json5")
    );
    assert_eq!(
        paths.cliff_config().unwrap(),
        Path::new("/src/lynx/platform/harmony/cliff.toml")
    );
}

#[test]
fn test_root_defaults_to_current_dir() {
    let config = Config::parse("").unwrap();
    assert_eq!(
        config.paths.root().unwrap(),
        std::env::current_dir().unwrap()
    );
}

#[test]
fn test_parse_tools_and_artifacts() {
    let config = Config::parse(
        r#"
        [tools]
        hvigorw = "/opt/harmony/bin/hvigorw"

        [build]
        abis = ["arm64-v8a"]
        extra_gn_args = ["enable_unittests=true"]

        [[artifacts]]
        file = "liblynx.so"
        dest = "custom/libs"
        "#,
    )
    .unwrap();

    assert_eq!(config.tools.hvigorw, PathBuf::from("/opt/harmony/bin/hvigorw"));
    assert_eq!(config.tools.gn, PathBuf::from("gn"));
    assert_eq!(config.build.abis, ["arm64-v8a"]);
    assert_eq!(config.artifacts, [ArtifactRoute::new("liblynx.so", "custom/libs")]);
    assert_eq!(
        config.artifacts[0].dest_dir(Path::new("/r"), "x86_64"),
        Path::new("/r/custom/libs/x86_64")
    );
}

#[test]
fn test_unknown_field_rejected() {
    let err = Config::parse("[tools]\ncmake = \"cmake\"\n").unwrap_err();
    assert!(err.to_string().contains("cmake"), "{err}");
}

#[test]
fn test_invalid_gn_arg_rejected() {
    let err = Config::parse("[build]\nextra_gn_args = [\"oops\"]\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    insta::assert_snapshot!(config_err.to_string(), @"invalid value for 'extra_gn_args' in section '[build]': 'oops' is not a key=value pair");
}

#[test]
fn test_empty_abis_rejected() {
    let err = Config::parse("[build]\nabis = []\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { key, .. }) if key == "abis"
    ));
}

#[test]
fn test_set_pairs_override_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[tools]\nohpm = \"ohpm-from-file\"\n")
        .set_pairs(["tools.ohpm=/usr/local/bin/ohpm", "global.dry=true"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.tools.ohpm, PathBuf::from("/usr/local/bin/ohpm"));
    assert!(config.global.dry);
}

#[test]
fn test_set_pairs_rejects_malformed() {
    let err = ConfigLoader::new().set_pairs(["no-equals"]).err().unwrap();
    assert!(err.to_string().contains("expected KEY=VALUE"));

    assert!(ConfigLoader::new().set_pairs(["=value"]).is_err());
}

#[test]
fn test_required_file_missing() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::from_file(temp.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_from_file_and_loaded_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("harmony.toml");
    std::fs::write(&path, "[global]\ndry = true\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.global.dry);

    let loader = ConfigLoader::new()
        .add_toml_file(&path)
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_str("");
    assert_eq!(
        loader.sources(),
        [ConfigSource::File(path.clone()), ConfigSource::Inline]
    );
    let files = loader.format_loaded_files();
    assert_eq!(files.len(), 2);
    assert!(files[0].starts_with("1. [file] "));
    assert_eq!(files[1], "2. [string] <string>");
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
        [paths]
        root = "/src/lynx"
        "#,
    )
    .unwrap();
    let options = config.format_options();

    let find = |key: &str| {
        options
            .iter()
            .find(|line| line.starts_with(key))
            .map(|line| line.split_once(" = ").unwrap().1.to_string())
    };

    assert_eq!(find("paths.root").as_deref(), Some("/src/lynx"));
    assert_eq!(find("build.abis").as_deref(), Some("arm64-v8a, x86_64"));
    assert_eq!(find("tools.git_cliff").as_deref(), Some("git-cliff"));
    assert_eq!(
        find("artifacts.liblynxbase.so").as_deref(),
        Some("base/platform/harmony/libs")
    );
    assert!(find("build.extra_gn_args").is_none());
}

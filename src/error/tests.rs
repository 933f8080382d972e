// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ArtifactError, ConfigError, EnvError, HarmonyError, HarmonyResult, RegistryError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "root".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'root' in section '[paths]'");
}

#[test]
fn test_env_error_display() {
    let err: HarmonyError = EnvError::MissingVar {
        name: "PUBLISH_ID".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"environment error: PUBLISH_ID not set");
}

#[test]
fn test_registry_error_display() {
    let err = RegistryError::ModuleNotFound {
        module: "lynx_extra".to_string(),
        registry: "build-profile.json5".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"module lynx_extra not found in build-profile.json5");
}

#[test]
fn test_artifact_error_display() {
    let err = ArtifactError::Missing {
        kind: "har".to_string(),
        path: "/out/lynx.har".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"har file not found at /out/lynx.har, please check your build");
}

#[test]
fn test_harmony_error_size() {
    let size = std::mem::size_of::<HarmonyError>();
    assert!(size <= 16, "HarmonyError is {size} bytes, expected <= 16");
}

#[test]
fn test_harmony_result_size() {
    let size = std::mem::size_of::<HarmonyResult<()>>();
    assert!(size <= 24, "HarmonyResult<()> is {size} bytes, expected <= 24");
}

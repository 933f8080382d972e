// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use serde_json::json;

use super::{
    COMMIT_HASH_PLACEHOLDER, VERSION_PLACEHOLDER, patch_build_profile, patch_parameter_file,
    set_lynx_version, substitute_placeholders,
};
use crate::error::PatchError;

fn profile_with_placeholders() -> String {
    format!(
        r#"{{
  // module build profile
  "apiType": "stageMode",
  "buildOption": {{
    "arkOptions": {{
      "buildProfileFields": {{
        "LYNX_VERSION": "{VERSION_PLACEHOLDER}",
        "LYNX_COMMIT": "{COMMIT_HASH_PLACEHOLDER}",
        "NOTE": "{VERSION_PLACEHOLDER}"
      }}
    }}
  }}
}}
"#
    )
}

#[test]
fn test_substitute_replaces_first_occurrence_only() {
    let content = profile_with_placeholders();
    let (patched, found) = substitute_placeholders(&content, "3.2.0", "abc123");

    assert_eq!(found, [true, true]);
    assert_eq!(patched.matches("3.2.0").count(), 1);
    assert_eq!(patched.matches("abc123").count(), 1);
    assert_eq!(patched.matches(VERSION_PLACEHOLDER).count(), 1);
    assert!(!patched.contains(COMMIT_HASH_PLACEHOLDER));

    let expected = content
        .replacen(VERSION_PLACEHOLDER, "3.2.0", 1)
        .replacen(COMMIT_HASH_PLACEHOLDER, "abc123", 1);
    assert_eq!(patched, expected);
}

#[test]
fn test_substitute_without_placeholders_is_identity() {
    let content = "{ \"apiType\": \"stageMode\" }\n";
    let (patched, found) = substitute_placeholders(content, "1.0.0", "deadbeef");
    assert_eq!(patched, content);
    assert_eq!(found, [false, false]);
}

#[tokio::test]
async fn test_patch_build_profile_file() {
    let temp = tempfile::tempdir().unwrap();
    let content = profile_with_placeholders();
    std::fs::write(temp.path().join("build-profile.json5"), &content).unwrap();

    let path = patch_build_profile(temp.path(), "0.0.1-placeholder", "0123abcd")
        .await
        .unwrap();

    let patched = std::fs::read_to_string(path).unwrap();
    assert!(patched.contains(r#""LYNX_VERSION": "0.0.1-placeholder","#));
    assert!(patched.contains(r#""LYNX_COMMIT": "0123abcd","#));
    assert!(patched.contains(&format!(r#""NOTE": "{VERSION_PLACEHOLDER}""#)));
    assert!(patched.starts_with("{\n  // module build profile\n"));
}

#[tokio::test]
async fn test_patch_build_profile_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    assert!(patch_build_profile(temp.path(), "1", "2").await.is_err());
}

#[tokio::test]
async fn test_patch_parameter_file_preserves_order() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("parameter.json"),
        r#"{"name":"lynx","dependencies":{"primjs_version":"1.0.0","lynx_version":"0.0.0","napi":"2"},"tail":true}"#,
    )
    .unwrap();

    let path = patch_parameter_file(temp.path(), "3.4.5").await.unwrap();

    insta::assert_snapshot!(std::fs::read_to_string(path).unwrap(), @r#"
    {
      "name": "lynx",
      "dependencies": {
        "primjs_version": "1.0.0",
        "lynx_version": "3.4.5",
        "napi": "2"
      },
      "tail": true
    }
    "#);
}

#[test]
fn test_set_lynx_version_adds_missing_key() {
    let mut document = json!({ "dependencies": {} });
    set_lynx_version(&mut document, "1.2.3", Path::new("parameter.json")).unwrap();
    assert_eq!(document, json!({ "dependencies": { "lynx_version": "1.2.3" } }));
}

#[test]
fn test_set_lynx_version_errors() {
    let path = Path::new("parameter.json");

    let err = set_lynx_version(&mut json!({}), "1", path).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"key 'dependencies' missing in parameter.json");

    let err = set_lynx_version(&mut json!({ "dependencies": [] }), "1", path).unwrap_err();
    assert!(matches!(err, PatchError::NotAnObject { .. }));
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::cli::build::BuildArgs;
use crate::cli::release::PublishArgs;
use crate::cmd::build::plan_tasks;
use crate::cmd::modules::format_modules;
use crate::cmd::publish::{KEY_PATH, PUBLISH_ID, run_publish_command};
use crate::cmd::resolve_requested_modules;
use crate::core::env::container::Env;
use crate::error::{EnvError, RegistryError};
use crate::task::registry::ModuleRegistry;
use crate::task::tasks::test_support::{config_at, write_file};
use crate::task::{Stages, Task};

const PROFILE: &str = r#"{
  // modules packaged as HARs
  modules: [
    { name: "lynx", srcPath: "./lynx_harmony" },
    { name: "lynx_base", srcPath: "./lynx_base" },
    { name: "lynx_devtool", srcPath: "./lynx_devtool" },
  ],
}"#;

fn seed_registry(root: &Path) {
    write_file(root, "platform/harmony/build-profile.json5", PROFILE);
}

fn stages(tasks: &[Task]) -> Vec<Stages> {
    tasks.iter().map(Task::stage).collect()
}

#[test]
fn test_plan_native_only() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_at(temp.path());

    let tasks = plan_tasks(&BuildArgs::default(), &config).unwrap();

    assert_eq!(stages(&tasks), vec![Stages::NATIVE]);
}

#[test]
fn test_plan_order_and_versions() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let config = config_at(temp.path());
    let args = BuildArgs {
        build_lynx_core: true,
        build_bundle: true,
        build_har: true,
        build_hap: true,
        modules: Some(vec!["lynx_*".to_string()]),
        ..BuildArgs::default()
    };

    let tasks = plan_tasks(&args, &config).unwrap();

    assert_eq!(
        stages(&tasks),
        vec![
            Stages::LYNX_CORE,
            Stages::BUNDLE,
            Stages::NATIVE,
            Stages::HAR,
            Stages::HAP
        ]
    );
    match (&tasks[0], &tasks[3]) {
        (Task::LynxCore(core), Task::Har(har)) => {
            assert_eq!(core.version(), "0.0.1");
            assert_eq!(har.version(), "0.0.1-placeholder");
            let names: Vec<_> = har.modules().iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names, ["lynx_base", "lynx_devtool"]);
        }
        other => panic!("unexpected tasks {other:?}"),
    }
}

#[test]
fn test_plan_override_version_applies_to_core_and_har() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let config = config_at(temp.path());
    let args = BuildArgs {
        build_lynx_core: true,
        build_har: true,
        modules: Some(vec!["lynx".to_string()]),
        override_version: Some("3.2.0".to_string()),
        ..BuildArgs::default()
    };

    let tasks = plan_tasks(&args, &config).unwrap();

    assert!(matches!(&tasks[0], Task::LynxCore(core) if core.version() == "3.2.0"));
    assert!(matches!(&tasks[2], Task::Har(har) if har.version() == "3.2.0"));
}

#[test]
fn test_plan_har_without_modules_is_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_at(temp.path());
    let args = BuildArgs {
        build_har: true,
        ..BuildArgs::default()
    };

    let tasks = plan_tasks(&args, &config).unwrap();

    assert_eq!(stages(&tasks), vec![Stages::NATIVE]);
}

#[test]
fn test_plan_unknown_module_fails() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let config = config_at(temp.path());
    let args = BuildArgs {
        build_har: true,
        modules: Some(vec!["lynx".to_string(), "nope".to_string()]),
        ..BuildArgs::default()
    };

    let err = plan_tasks(&args, &config).unwrap_err();

    let registry = err.downcast_ref::<RegistryError>();
    assert!(matches!(registry, Some(RegistryError::ModuleNotFound { module, .. }) if module == "nope"));
}

#[test]
fn test_default_sentinel_uses_default_modules() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let mut config = config_at(temp.path());
    config.build.default_modules = vec!["lynx_base".to_string(), "lynx".to_string()];

    let requested = vec!["DEFAULT".to_string()];
    let modules = resolve_requested_modules(Some(requested.as_slice()), &config).unwrap();

    let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["lynx_base", "lynx"]);
    assert_eq!(
        modules[1].dir,
        temp.path().join("platform/harmony/lynx_harmony")
    );
}

#[test]
fn test_format_modules() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let registry =
        ModuleRegistry::load(&temp.path().join("platform/harmony/build-profile.json5")).unwrap();

    insta::assert_snapshot!(format_modules(&registry).join("\n"), @r"
    lynx          ./lynx_harmony
    lynx_base     ./lynx_base
    lynx_devtool  ./lynx_devtool
    ");
}

#[tokio::test]
async fn test_publish_requires_credentials_first() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_at(temp.path());
    let args = PublishArgs {
        modules: Some(vec!["missing".to_string()]),
        ..PublishArgs::default()
    };
    let mut env = Env::new();
    env.set(PUBLISH_ID, "id");

    let err = run_publish_command(&args, &config, env).await.unwrap_err();

    let missing = err.downcast_ref::<EnvError>();
    assert!(matches!(missing, Some(EnvError::MissingVar { name }) if name == KEY_PATH));
}

#[tokio::test]
async fn test_publish_dry_run() {
    let temp = tempfile::tempdir().unwrap();
    seed_registry(temp.path());
    let mut config = config_at(temp.path());
    config.global.dry = true;
    let args = PublishArgs {
        modules: Some(vec!["lynx_base".to_string()]),
        ..PublishArgs::default()
    };
    let mut env = Env::new();
    env.set(PUBLISH_ID, "id");
    env.set(KEY_PATH, "/keys/private.pem");

    run_publish_command(&args, &config, env).await.unwrap();
}

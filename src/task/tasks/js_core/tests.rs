// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LynxCoreTask, devtool_scripts};
use crate::core::env::container::Env;
use crate::task::Taskable;
use crate::task::tasks::test_support::{config_at, dry_context, write_file};
use crate::task::tools::test_utils::{dry_run_lines, run_with_logs};

#[test]
fn test_build_script_arguments() {
    let task = LynxCoreTask::new("3.2.0");
    let tool = task.build_script(Path::new("/src/lynx"));
    let ctx = crate::task::tools::ToolContext::new(
        std::sync::Arc::new(crate::config::Config::default()),
        Env::new(),
        true,
    );
    let builder = tool.command(&ctx);

    assert_eq!(
        builder.working_dir().map(|p| p.to_path_buf()),
        Some(Path::new("/src/lynx").join("tools").join("js_tools"))
    );
    #[cfg(unix)]
    insta::assert_snapshot!(builder.command_line(), @"python3 ./build.py --platform android --release_output /src/lynx/platform/harmony/lynx_harmony/src/main/resources/rawfile/lynx_core.js --dev_output /src/lynx/platform/harmony/lynx_devtool/src/main/resources/rawfile/lynx_core_dev.js --version 3.2.0");
}

#[test]
fn test_devtool_script_order() {
    let [base, lynx] = devtool_scripts(Path::new("root"));
    assert!(base.ends_with("devtool/base_devtool/resources/copy_resources.py"));
    assert!(lynx.ends_with("devtool/lynx_devtool/resources/copy_resources.py"));
}

#[cfg(unix)]
#[test]
fn test_prepare_env_prepends_node_bin() {
    let config = config_at(Path::new("/src/lynx"));
    let mut env = Env::new();
    env.set("PATH", "/usr/bin");

    LynxCoreTask::new("0.0.1").prepare_env(&config, &mut env);

    assert_eq!(env.get("PATH"), Some("/src/lynx/../buildtools/node/bin:/usr/bin"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_missing_devtool_scripts_are_skipped() -> anyhow::Result<()> {
    let (temp, ctx) = dry_context();
    write_file(
        temp.path(),
        "devtool/lynx_devtool/resources/copy_resources.py",
        "",
    );
    let task = LynxCoreTask::new("0.0.1");

    let logs = run_with_logs(|| async { task.run(&ctx).await }).await?;
    let root = temp.path().display().to_string();
    let lines = dry_run_lines(&logs).replace(&root, "<root>");

    assert!(logs.contains("base_devtool/resources/copy_resources.py does not exist."));
    assert_eq!(lines.lines().count(), 2);
    assert!(lines.ends_with("python3 <root>/devtool/lynx_devtool/resources/copy_resources.py"));
    Ok(())
}

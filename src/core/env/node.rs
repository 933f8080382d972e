// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `NODE_HOME` discovery for hvigorw.
//!
//! ```text
//! COMMANDLINE_TOOL_DIR unset  -> NotConfigured (info)
//! NODE_HOME present (any value) -> AlreadySet (untouched)
//! <dir>/tool/node missing     -> NodeMissing   (warn)
//! otherwise                   -> Set(path)
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::container::Env;

/// Variable naming the HarmonyOS command line tools directory.
pub const COMMANDLINE_TOOL_DIR: &str = "COMMANDLINE_TOOL_DIR";

/// Variable hvigorw reads to locate node.
pub const NODE_HOME: &str = "NODE_HOME";

/// Result of [`ensure_node_home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeHome {
    NotConfigured,
    AlreadySet,
    NodeMissing(PathBuf),
    Set(PathBuf),
}

/// Sets `NODE_HOME` from `COMMANDLINE_TOOL_DIR` when it is not already set.
///
/// Never fails: every outcome other than [`NodeHome::Set`] leaves `env`
/// unchanged and is only logged.
pub fn ensure_node_home(env: &mut Env) -> NodeHome {
    let Some(tool_dir) = env.get(COMMANDLINE_TOOL_DIR) else {
        info!("{COMMANDLINE_TOOL_DIR} not set, skipping {NODE_HOME} setup");
        return NodeHome::NotConfigured;
    };

    if env.get(NODE_HOME).is_some() {
        info!("{NODE_HOME} already set, skipping setup");
        return NodeHome::AlreadySet;
    }

    let node_dir = Path::new(tool_dir).join("tool").join("node");
    if !node_dir.is_dir() {
        warn!(path = %node_dir.display(), "node not found under {COMMANDLINE_TOOL_DIR}");
        return NodeHome::NodeMissing(node_dir);
    }

    info!(path = %node_dir.display(), "setting {NODE_HOME}");
    env.set(NODE_HOME, node_dir.to_string_lossy());
    NodeHome::Set(node_dir)
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ToolsConfig, BuildConfig, [ArtifactRoute]
//! ```
//!
//! # Build Type
//!
//! ```text
//! BuildType: Debug | Release (default)
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Native build type, selected by `build --debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl BuildType {
    #[must_use]
    pub const fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Release }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuildType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            _ => Err(ConfigError::InvalidValue {
                section: "build".to_string(),
                key: "type".to_string(),
                message: format!("expected 'debug' or 'release', got '{s}'"),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would run without running it.
    pub dry: bool,
}

/// External tool executables.
///
/// Bare names are resolved through `PATH` when spawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub gn: PathBuf,
    pub ninja: PathBuf,
    pub hvigorw: PathBuf,
    pub ohpm: PathBuf,
    pub git_cliff: PathBuf,
    /// Interpreter for the JS core and bundle build scripts.
    pub python: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            gn: PathBuf::from("gn"),
            ninja: PathBuf::from("ninja"),
            hvigorw: PathBuf::from("hvigorw"),
            ohpm: PathBuf::from("ohpm"),
            git_cliff: PathBuf::from("git-cliff"),
            python: PathBuf::from("python3"),
        }
    }
}

/// Build pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Target ABIs, built in order.
    pub abis: Vec<String>,
    /// Modules selected by `--modules default`.
    pub default_modules: Vec<String>,
    /// Ninja target built in every out directory.
    pub ninja_target: String,
    /// Version passed to the JS core build when none is given.
    pub core_version: String,
    /// Version stamped into HAR packages when none is given.
    pub har_version: String,
    /// Extra `key=value` gn args appended after the built-in ones.
    pub extra_gn_args: Vec<String>,
    /// Generated ignore files removed before HAR packaging, relative to root.
    pub ignore_files: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            abis: vec!["arm64-v8a".to_string(), "x86_64".to_string()],
            default_modules: [
                "lynx",
                "lynx_base",
                "lynx_devtool",
                "lynx_devtool_service",
                "lynx_log_service",
                "lynx_http_service",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ninja_target: "default".to_string(),
            core_version: "0.0.1".to_string(),
            har_version: "0.0.1-placeholder".to_string(),
            extra_gn_args: Vec::new(),
            ignore_files: vec![
                PathBuf::from("platform/harmony/lynx_harmony/src/main/ets/tasm/gen/.gitignore"),
                PathBuf::from("platform/harmony/lynx_devtool/src/main/resources/rawfile/.gitignore"),
            ],
        }
    }
}

/// Where a produced shared object is copied after ninja.
///
/// The destination is `<root>/<dest>/<abi>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactRoute {
    /// File name in the out directory.
    pub file: String,
    /// Destination directory relative to root, without the ABI component.
    pub dest: PathBuf,
}

impl ArtifactRoute {
    #[must_use]
    pub fn new(file: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            dest: dest.into(),
        }
    }

    /// Destination directory for one ABI.
    #[must_use]
    pub fn dest_dir(&self, root: &Path, abi: &str) -> PathBuf {
        root.join(&self.dest).join(abi)
    }
}

/// Default shared object routes.
#[must_use]
pub fn default_artifacts() -> Vec<ArtifactRoute> {
    vec![
        ArtifactRoute::new("liblynx.so", "platform/harmony/lynx_harmony/libs"),
        ArtifactRoute::new("liblynxbase.so", "base/platform/harmony/libs"),
        ArtifactRoute::new("liblynxdevtool.so", "platform/harmony/lynx_devtool/libs"),
    ]
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/                      (default: current directory)
//!   platform/harmony/        harmony
//!     build-profile.json5
//!     parameter.json
//!     cliff.toml
//!   out/                     out
//!     harmony_<type>_<cpu>[_dev]
//! root/../buildtools/node/bin  node_bin
//! ```
//!
//! Relative paths are resolved against `root` if set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Source tree paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Framework source root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// HarmonyOS platform directory (default: `root/platform/harmony`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony: Option<PathBuf>,
    /// Parent of the per-ABI out directories (default: `root/out`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
    /// Node binaries prepended to `PATH` for the JS core build
    /// (default: `root/../buildtools/node/bin`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_bin: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve all relative paths against root and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `root` is not set.
    pub fn resolve(&mut self) -> Result<()> {
        let root = self.root.clone().ok_or_else(|| ConfigError::MissingKey {
            section: "paths".to_string(),
            key: "root".to_string(),
        })?;

        let resolve = |path: &mut Option<PathBuf>, default: &Path| match path {
            Some(p) if p.is_relative() => {
                *path = Some(root.join(p.clone()));
            }
            None => {
                *path = Some(root.join(default));
            }
            _ => {}
        };

        resolve(&mut self.harmony, Path::new("platform/harmony"));
        resolve(&mut self.out, Path::new("out"));
        resolve(&mut self.node_bin, Path::new("../buildtools/node/bin"));

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `root` is not set.
    pub fn root(&self) -> Result<&Path> {
        required(self.root.as_deref(), "root")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn harmony(&self) -> Result<&Path> {
        required(self.harmony.as_deref(), "harmony")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn out(&self) -> Result<&Path> {
        required(self.out.as_deref(), "out")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn node_bin(&self) -> Result<&Path> {
        required(self.node_bin.as_deref(), "node_bin")
    }

    /// Module registry file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn build_profile(&self) -> Result<PathBuf> {
        Ok(self.harmony()?.join("build-profile.json5"))
    }

    /// Shared dependency version file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn parameter_file(&self) -> Result<PathBuf> {
        Ok(self.harmony()?.join("parameter.json"))
    }

    /// git-cliff template.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn cliff_config(&self) -> Result<PathBuf> {
        Ok(self.harmony()?.join("cliff.toml"))
    }
}

fn required<'a>(path: Option<&'a Path>, key: &str) -> Result<&'a Path> {
    path.ok_or_else(|| {
        ConfigError::MissingKey {
            section: "paths".to_string(),
            key: key.to_string(),
        }
        .into()
    })
}

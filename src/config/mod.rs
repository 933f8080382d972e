// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. harmony.toml (cwd, optional)
//! 3. --config
//! 4. HBUILD_* env vars
//! 5. --set overrides
//! 6. CLI flags (--root, --dry)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! HBUILD_GLOBAL__DRY=true           → global.dry = true
//! HBUILD_PATHS__ROOT=/src/lynx      → paths.root = "/src/lynx"
//! HBUILD_TOOLS__GIT_CLIFF=/bin/gc   → tools.git_cliff = "/bin/gc"
//! ```
//!
//! # Shared Object Routes
//!
//! ```toml
//! [[artifacts]]
//! file = "liblynx.so"
//! dest = "platform/harmony/lynx_harmony/libs"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{ArtifactRoute, BuildConfig, GlobalConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
    pub build: BuildConfig,
    /// Shared object routes; a configured list replaces the defaults.
    pub artifacts: Vec<ArtifactRoute>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            paths: PathsConfig::default(),
            tools: ToolsConfig::default(),
            build: BuildConfig::default(),
            artifacts: types::default_artifacts(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use harmony_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("harmony.toml")
    ///     .with_env_prefix("HBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Fill in `paths.root` from the current directory when unset, resolve
    /// derived paths and validate build settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or a build
    /// setting is invalid.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.paths.root.is_none() {
            self.paths.root = Some(std::env::current_dir()?);
        }
        self.paths.resolve()?;
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.build.abis.is_empty() {
            return Err(invalid("abis", "at least one ABI is required".to_string()));
        }
        if self.build.ninja_target.is_empty() {
            return Err(invalid("ninja_target", "must not be empty".to_string()));
        }
        if let Some(arg) = self.build.extra_gn_args.iter().find(|a| !a.contains('=')) {
            return Err(invalid(
                "extra_gn_args",
                format!("'{arg}' is not a key=value pair"),
            ));
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_build_options(&mut options);
        self.format_artifact_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.root".into(), fmt(&self.paths.root));
        options.insert("paths.harmony".into(), fmt(&self.paths.harmony));
        options.insert("paths.out".into(), fmt(&self.paths.out));
        options.insert("paths.node_bin".into(), fmt(&self.paths.node_bin));
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        let tools = &self.tools;
        for (name, path) in [
            ("gn", &tools.gn),
            ("ninja", &tools.ninja),
            ("hvigorw", &tools.hvigorw),
            ("ohpm", &tools.ohpm),
            ("git_cliff", &tools.git_cliff),
            ("python", &tools.python),
        ] {
            options.insert(format!("tools.{name}"), path.display().to_string());
        }
    }

    fn format_build_options(&self, options: &mut BTreeMap<String, String>) {
        let build = &self.build;
        options.insert("build.abis".into(), build.abis.join(", "));
        options.insert(
            "build.default_modules".into(),
            build.default_modules.join(", "),
        );
        options.insert("build.ninja_target".into(), build.ninja_target.clone());
        options.insert("build.core_version".into(), build.core_version.clone());
        options.insert("build.har_version".into(), build.har_version.clone());
        if !build.extra_gn_args.is_empty() {
            options.insert("build.extra_gn_args".into(), build.extra_gn_args.join(" "));
        }
        options.insert(
            "build.ignore_files".into(),
            build
                .ignore_files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    fn format_artifact_options(&self, options: &mut BTreeMap<String, String>) {
        for route in &self.artifacts {
            options.insert(
                format!("artifacts.{}", route.file),
                route.dest.display().to_string(),
            );
        }
    }
}

fn invalid(key: &str, message: String) -> anyhow::Error {
    ConfigError::InvalidValue {
        section: "build".to_string(),
        key: key.to_string(),
        message,
    }
    .into()
}

// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of `harmony.toml` and friends.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .set_pairs()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// Where a layer of settings came from, as listed by `hbuild configs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <FILE>`; must exist.
    File(PathBuf),
    /// `harmony.toml` in the working directory, present on disk.
    Optional(PathBuf),
    /// Inline TOML text.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <string>"),
        }
    }
}

/// Layers TOML files, `HBUILD_*` variables and `--set` pairs into a
/// validated [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    overrides: Vec<(String, String)>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            overrides: Vec::new(),
            sources: Vec::new(),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required {
            self.sources.push(ConfigSource::File(path.to_path_buf()));
        } else if path.is_file() {
            self.sources.push(ConfigSource::Optional(path.to_path_buf()));
        }
        self
    }

    /// Adds a TOML file that `build()` fails on if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_SECTION__KEY` variables, e.g. `HBUILD_TOOLS__GIT_CLIFF`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key, e.g. `paths.root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self.builder.set_override(key, value).map_err(|e| {
            anyhow::anyhow!("invalid override '{key}': {e}")
        })?;
        Ok(self)
    }

    /// Queues `KEY=VALUE` overrides from `--set`.
    ///
    /// They apply after environment variables and `set()` calls, so they win
    /// over every other source. Later pairs win over earlier ones.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for a pair without `=` or with an
    /// empty key.
    pub fn set_pairs<I, S>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, value)) = pair
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
            else {
                return Err(ConfigError::InvalidValue {
                    section: "cli".to_string(),
                    key: "set".to_string(),
                    message: format!("expected KEY=VALUE, got '{pair}'"),
                }
                .into());
            };
            self.overrides
                .push((key.trim().to_string(), value.to_string()));
        }
        Ok(self)
    }

    /// Merges every layer, then resolves paths and validates the result.
    ///
    /// # Errors
    ///
    /// Fails on a missing `--config` file, malformed TOML, an unparsable
    /// `HBUILD_*` value, or settings that do not fit [`Config`].
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        for (key, value) in self.overrides {
            builder = builder
                .set_override(key.as_str(), value)
                .map_err(|e| anyhow::anyhow!("invalid --set key '{key}': {e}"))?;
        }

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered lines for `hbuild configs`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

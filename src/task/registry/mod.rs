// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module registry backed by `platform/harmony/build-profile.json5`.
//!
//! ```text
//! --modules default          --> build.default_modules
//! --modules lynx "lynx_*"    --> ["lynx", "lynx_*"]
//!        |
//!        v
//! ModuleRegistry::resolve()
//!   expand:  "lynx_*" --> [lynx_base, lynx_devtool, ...]
//!   dedupe + preserve order
//!   lookup:  name --> <harmony>/<srcPath>   (ModuleNotFound if absent)
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use wax::{Glob, Program};

use crate::error::RegistryError;

/// Module list value that selects the configured default modules.
pub const DEFAULT_SENTINEL: &str = "default";

/// Turns the raw `--modules` list into module names.
///
/// - `None` or empty: no modules.
/// - exactly one entry equal to `default` (any case): `defaults`.
/// - anything else: the entries as given.
#[must_use]
pub fn resolve_modules(requested: Option<&[String]>, defaults: &[String]) -> Vec<String> {
    match requested {
        None | Some([]) => Vec::new(),
        Some([only]) if only.eq_ignore_ascii_case(DEFAULT_SENTINEL) => defaults.to_vec(),
        Some(names) => names.to_vec(),
    }
}

/// One entry of the `modules` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    /// Source directory relative to the registry file's directory.
    #[serde(rename = "srcPath", alias = "srcpath")]
    pub src_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct BuildProfile {
    #[serde(default)]
    modules: Vec<ModuleEntry>,
}

/// A module name together with its absolute source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub name: String,
    pub dir: PathBuf,
}

impl ResolvedModule {
    /// Directory hvigorw writes the module's HAR into.
    #[must_use]
    pub fn har_output_dir(&self) -> PathBuf {
        self.dir
            .join("build")
            .join("default")
            .join("outputs")
            .join("default")
    }

    /// Expected HAR archive path.
    #[must_use]
    pub fn har_path(&self) -> PathBuf {
        self.har_output_dir().join(format!("{}.har", self.name))
    }
}

/// Lookup table from module name to source path.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    source: String,
    base_dir: PathBuf,
    modules: Vec<ModuleEntry>,
}

impl ModuleRegistry {
    /// Reads the registry file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReadFailed`] if the file is missing or is not
    /// valid JSON5 with a `modules` array.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        use config::{File, FileFormat};

        let read_failed = |message: String| RegistryError::ReadFailed {
            path: path.display().to_string(),
            message,
        };

        let profile: BuildProfile = config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Json5).required(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| read_failed(e.to_string()))?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::from_entries(
            display_name(path),
            base_dir,
            profile.modules,
        ))
    }

    /// Creates a registry from already parsed entries.
    #[must_use]
    pub fn from_entries(
        source: impl Into<String>,
        base_dir: impl Into<PathBuf>,
        modules: Vec<ModuleEntry>,
    ) -> Self {
        Self {
            source: source.into(),
            base_dir: base_dir.into(),
            modules,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.modules
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Finds a module by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModuleNotFound`] if no entry has that name.
    pub fn lookup(&self, name: &str) -> Result<&ModuleEntry, RegistryError> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| RegistryError::ModuleNotFound {
                module: name.to_string(),
                registry: self.source.clone(),
            })
    }

    /// Absolute source directory of a module.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModuleNotFound`] if no entry has that name.
    pub fn module_dir(&self, name: &str) -> Result<PathBuf, RegistryError> {
        self.lookup(name).map(|m| self.base_dir.join(&m.src_path))
    }

    /// Expands glob patterns against registered names.
    ///
    /// Plain names pass through untouched so that [`Self::lookup`] reports
    /// them. Duplicates are dropped, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] for a malformed glob.
    pub fn expand(&self, specs: &[String]) -> Result<Vec<String>, RegistryError> {
        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for spec in specs {
            let matches = if is_pattern(spec) {
                let glob = Glob::new(spec).map_err(|e| RegistryError::InvalidPattern {
                    pattern: spec.clone(),
                    message: e.to_string(),
                })?;
                let matched: Vec<String> = self
                    .modules
                    .iter()
                    .filter(|m| glob.is_match(m.name.as_str()))
                    .map(|m| m.name.clone())
                    .collect();
                if matched.is_empty() {
                    tracing::warn!(pattern = %spec, "pattern matched no modules");
                }
                matched
            } else {
                vec![spec.clone()]
            };

            for name in matches {
                if seen.insert(name.clone()) {
                    result.push(name);
                }
            }
        }

        Ok(result)
    }

    /// Expands `specs` and resolves every module to its directory.
    ///
    /// Fails on the first unknown module, before the caller does any work.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModuleNotFound`] or
    /// [`RegistryError::InvalidPattern`].
    pub fn resolve(&self, specs: &[String]) -> Result<Vec<ResolvedModule>, RegistryError> {
        self.expand(specs)?
            .into_iter()
            .map(|name| {
                let dir = self.module_dir(&name)?;
                tracing::debug!(module = %name, path = %dir.display(), "resolved module");
                Ok(ResolvedModule { name, dir })
            })
            .collect()
    }
}

fn is_pattern(spec: &str) -> bool {
    spec.contains(['*', '?', '[', '{'])
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

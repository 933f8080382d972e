// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                HarmonyError (16 bytes)
//!                       |
//!   +------+-----+------+------+-------+-----+
//!   |      |     |      |      |       |     |
//!   v      v     v      v      v       v     v
//! Config  Env   Reg   Proc  Artifact Patch  Git
//!  Box    Box   Box   Box    Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ParseError, MissingKey, InvalidValue
//!   Env       MissingVar
//!   Registry  ModuleNotFound, ReadFailed
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Artifact  Missing (tool reported success, file absent)
//!   Patch     MissingKey, NotAnObject
//!   Git       Discover, Head
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HarmonyError`].
pub type HarmonyResult<T> = std::result::Result<T, HarmonyError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum HarmonyError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Required environment is missing.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Module registry error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Expected build output is missing.
    #[error("artifact error: {0}")]
    Artifact(#[from] Box<ArtifactError>),

    /// Version patching error.
    #[error("patch error: {0}")]
    Patch(#[from] Box<PatchError>),

    /// Git query failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HarmonyError {
                fn from(err: $error) -> Self {
                    HarmonyError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
    RegistryError => Registry,
    ProcessError => Process,
    ArtifactError => Artifact,
    PatchError => Patch,
    GitError => Git,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Environment Errors ---

/// Environment errors, raised before any subprocess runs.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A required variable is unset or empty.
    #[error("{name} not set")]
    MissingVar { name: String },
}

// --- Registry Errors ---

/// Module registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Requested module is not listed in the registry file.
    #[error("module {module} not found in {registry}")]
    ModuleNotFound { module: String, registry: String },

    /// Registry file could not be read or parsed.
    #[error("failed to read module registry '{path}': {message}")]
    ReadFailed { path: String, message: String },

    /// Module pattern is not a valid glob.
    #[error("invalid module pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Artifact Errors ---

/// Build output verification errors.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The tool reported success but its output file does not exist.
    #[error("{kind} file not found at {path}, please check your build")]
    Missing { kind: String, path: String },
}

// --- Patch Errors ---

/// Version patching errors.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A key needed for patching is missing from a JSON document.
    #[error("key '{key}' missing in {path}")]
    MissingKey { path: String, key: String },

    /// A JSON value expected to be an object is something else.
    #[error("'{key}' in {path} is not an object")]
    NotAnObject { path: String, key: String },
}

// --- Git Errors ---

/// Git query errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository at {path}: {source}")]
    Discover {
        path: String,
        #[source]
        source: Box<gix::discover::Error>,
    },

    /// HEAD could not be resolved to a commit.
    #[error("failed to resolve HEAD in {path}: {message}")]
    Head { path: String, message: String },
}

#[cfg(test)]
mod tests;

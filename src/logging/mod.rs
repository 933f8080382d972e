// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging on top of `tracing`.
//!
//! ```text
//! --log-level / --verbose / --file-log-level / --log-file
//!        |
//!        v
//! LogConfig::from_cli()
//!        |
//!        v
//! init_logging()
//!    Console: level, no timestamps, ANSI
//!    File:    timestamps, targets, one "close" line per stage span
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP
//! ```
//!
//! Executed command lines and tool output are logged at DEBUG, so
//! `build --verbose` prints every command that runs.

use anyhow::Context;
use bon::Builder;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Result;

/// Verbosity on the 0-6 scale of `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    /// One line per build step.
    pub const INFO: Self = Self(3);
    /// Command lines and tool output.
    pub const DEBUG: Self = Self(4);
    /// Process lifecycle.
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// `None` above 6.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 6 { Some(Self(level)) } else { None }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `EnvFilter` directive. DUMP and TRACE share `trace`.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::DEBUG)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Combines the global log flags with a command's `--verbose`.
    ///
    /// `verbose` only moves the console default from INFO to DEBUG; an
    /// explicit `--log-level` wins. The file follows the console unless
    /// `--file-log-level` is given. Out-of-range levels fall back to the
    /// defaults.
    #[must_use]
    pub fn from_cli(
        log_level: Option<u8>,
        file_log_level: Option<u8>,
        log_file: Option<&Path>,
        verbose: bool,
    ) -> Self {
        let default_level = if verbose {
            LogLevel::DEBUG
        } else {
            LogLevel::INFO
        };
        let console_level = log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(default_level);
        let file_level = file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        Self::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(log_file.map(Path::to_path_buf))
            .build()
    }

    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use harmony_build::logging::{init_logging, LogConfig};
///
/// let config = LogConfig::from_cli(None, None, Some("out/hbuild.log".as_ref()), true);
/// let _guard = init_logging(&config)?;
/// tracing::debug!("printed because of verbose");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(true)
        .with_filter(EnvFilter::new(config.console_level().to_filter_string()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }

            let file = std::fs::File::create(log_path)
                .with_context(|| format!("failed to create log file {}", log_path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().to_filter_string()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;

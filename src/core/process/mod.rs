// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("ninja")
//!   .args() .cwd() .env() .capture_stdout()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr (lines at DEBUG)
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Every external tool runs synchronously from the caller's point of view:
//! the pipeline awaits each `run()` before starting the next step.

pub mod builder;
mod io;
mod runner;

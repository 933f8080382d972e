// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  copy_file_into_dir()     tokio::fs, creates the directory
//!        remove_file_if_exists()  missing file is not an error
//! ```

pub mod copy;

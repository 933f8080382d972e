// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(LogLevel::DEBUG.as_u8(), 4);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "debug",
        "trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
}

#[test]
fn test_verbose_raises_console_default() {
    let config = LogConfig::from_cli(None, None, None, true);
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::DEBUG);

    let quiet = LogConfig::from_cli(None, None, None, false);
    assert_eq!(quiet.console_level(), LogLevel::INFO);
}

#[test]
fn test_explicit_level_beats_verbose() {
    let config = LogConfig::from_cli(Some(2), Some(5), Some(Path::new("hbuild.log")), true);
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some(Path::new("hbuild.log")));
}

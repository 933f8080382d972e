// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable map with copy-on-write semantics.
//!
//! ```text
//! Env { vars: Arc<BTreeMap<EnvKey, String>> }
//! clone shares the Arc; the first write goes through Arc::make_mut
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Variable name. On Windows `Path` and `PATH` are the same key.
#[derive(Debug, Clone, Eq)]
struct EnvKey(String);

impl EnvKey {
    fn folded(&self) -> Cow<'_, str> {
        if cfg!(windows) {
            Cow::Owned(self.0.to_ascii_uppercase())
        } else {
            Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}

/// The variables a child process sees, and nothing else.
///
/// Clones share storage until one of them is written to, so every task can
/// hold its own copy of the startup environment.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: Arc<BTreeMap<EnvKey, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.vars).insert(EnvKey(key.into()), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(&EnvKey(key.to_string()))
            .map(String::as_str)
    }

    /// Puts `dir` in front of `PATH`, e.g. the Node.js `bin` for hvigorw.
    pub fn prepend_path(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        let dir = dir.as_ref().to_string_lossy().into_owned();
        let separator = if cfg!(windows) { ';' } else { ':' };
        let path = match self.get("PATH") {
            Some(current) if !current.is_empty() => format!("{dir}{separator}{current}"),
            _ => dir,
        };
        self.set("PATH", path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.0.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (EnvKey(k.into()), v.into()))
                    .collect(),
            ),
        }
    }
}

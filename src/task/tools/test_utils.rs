// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for dry-run tests of tools and tasks.

use std::io;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared sink; every writer handed out appends to the same bytes.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> Result<String> {
        let bytes = self
            .0
            .lock()
            .map_err(|_| anyhow::anyhow!("captured logs poisoned"))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| io::Error::other("captured logs poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Awaits `f` with an INFO subscriber installed for the current thread and
/// returns everything it logged.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .finish();

    {
        let _default = tracing::subscriber::set_default(subscriber);
        f().await?;
    }
    capture.contents()
}

/// Keeps only the `[dry-run] ...` tail of each captured line.
pub(crate) fn dry_run_lines(logs: &str) -> String {
    logs.lines()
        .filter_map(|line| line.find("[dry-run]").map(|idx| &line[idx..]))
        .collect::<Vec<_>>()
        .join("\n")
}

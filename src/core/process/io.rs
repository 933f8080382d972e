// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (one each)
//!     raw lines to EOF, invalid UTF-8 replaced with U+FFFD
//!     FORWARD_TO_LOG --> debug!(line)
//!     KEEP_IN_STRING --> accumulated, returned by the task
//!   wait()
//!   --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::Result;

fn spawn_reader<R>(
    reader: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    reader.map(|reader| tokio::spawn(read_stream(reader, flags, name, stream_name)))
}

async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Streams output while waiting for the child to exit.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name}"))?;

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(status.code().unwrap_or(-1), stdout, stderr))
    }
}

/// Reads `reader` to EOF. Lines that are not UTF-8 are decoded lossily
/// rather than ending the read, so the child never sees a closed pipe.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: String,
    stream_name: &'static str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut raw = Vec::new();
    let mut kept = String::new();

    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                trace!(process = %process_name, stream = stream_name, error = %e, "read failed");
                break;
            }
        }

        let line = String::from_utf8_lossy(&raw);
        let line = line.trim_end_matches(['\n', '\r']);
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            debug!(process = %process_name, stream = stream_name, "{line}");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            kept.push_str(line);
            kept.push('\n');
        }
    }

    kept
}

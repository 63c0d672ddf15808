//! Timeout-bounded subprocess execution.

use std::process::Stdio;
use std::time::{Duration, Instant};
use talk2diagram_error::{RenderError, RenderErrorKind, RenderResult};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::warn;

/// Maximum stdout or stderr kept per stream (4 MiB). Output past this is
/// read and discarded.
pub const MAX_OUTPUT_BYTES: u64 = 4 * 1024 * 1024;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (`-1` if terminated by a signal)
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl ProcessOutput {
    /// True when the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn `cmd`, capture its output and wait at most `timeout`.
///
/// The deadline covers both the exit of the child and the end of its output
/// streams, so a background process that inherits the pipes cannot hold the
/// call open. The child is spawned with `kill_on_drop(true)`, so dropping the
/// returned future also terminates it. On timeout the child is killed and
/// reaped before [`RenderErrorKind::Timeout`] is returned. A binary that
/// cannot be found maps to [`RenderErrorKind::RendererMissing`].
pub async fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> RenderResult<ProcessOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(|e| {
        let program = cmd.as_std().get_program().to_string_lossy().into_owned();
        match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                RenderError::new(RenderErrorKind::RendererMissing(format!("{program}: {e}")))
            }
            _ => RenderError::new(RenderErrorKind::Process(format!("{program}: {e}"))),
        }
    })?;

    // Drain pipes concurrently so a chatty child never blocks on a full pipe.
    let stdout_task = tokio::spawn(read_stream(child.stdout.take()));
    let stderr_task = tokio::spawn(read_stream(child.stderr.take()));
    let stdout_abort = stdout_task.abort_handle();
    let stderr_abort = stderr_task.abort_handle();

    let finished = tokio::time::timeout(timeout, async {
        let status = child.wait().await;
        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();
        (status, stdout, stderr)
    })
    .await;

    match finished {
        Ok((Ok(status), stdout, stderr)) => Ok(ProcessOutput {
            exit_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            duration_ms: start.elapsed().as_millis() as u64,
        }),
        Ok((Err(e), _, _)) => Err(RenderError::new(RenderErrorKind::Process(e.to_string()))),
        Err(_elapsed) => {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            // The child may have exited already with a descendant holding the pipes.
            if let Ok(None) = child.try_wait() {
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "Failed to kill timed-out process");
                }
            }
            stdout_abort.abort();
            stderr_abort.abort();
            Err(RenderError::new(RenderErrorKind::Timeout { elapsed_ms }))
        }
    }
}

/// Read a stream to its end, keeping at most [`MAX_OUTPUT_BYTES`].
///
/// The remainder is drained into a sink; closing the pipe early would make
/// the writer fail with a broken pipe.
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h).take(MAX_OUTPUT_BYTES).read_to_end(&mut buf).await;
        let _ = tokio::io::copy(&mut h, &mut tokio::io::sink()).await;
    }
    buf
}

use crate::ports::outbound::{CommandInvocation, CommandOutput, CommandRunner};
use crate::shared::error::RodepsError;
use crate::shared::Result;
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

const READ_CHUNK_SIZE: usize = 8192;

/// ProcessCommandRunner adapter for running commands as child processes
///
/// Output is read incrementally and decoded lossily as UTF-8. A command
/// that outlives its timeout is killed and whatever it printed until then
/// is returned with `timed_out` set.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends everything `reader` yields to `sink`.
///
/// Each chunk lands in `sink` as soon as it is read, so a cancelled drain
/// leaves the bytes received so far in place.
async fn drain<R: AsyncRead + Unpin>(reader: Option<R>, sink: &mut Vec<u8>) -> io::Result<()> {
    let Some(mut reader) = reader else {
        return Ok(());
    };
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        let read = reader.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        sink.extend_from_slice(&chunk[..read]);
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, invocation: &CommandInvocation, timeout: Duration) -> Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(
            command = %invocation.display(),
            cwd = %invocation.working_dir.display(),
            timeout_ms = timeout.as_millis() as u64,
            "spawning command"
        );

        let mut child = command.spawn().map_err(|e| RodepsError::CommandSpawnError {
            program: invocation.program.clone(),
            details: e.to_string(),
        })?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let finished = tokio::time::timeout(timeout, async {
            let (out, err) = tokio::join!(
                drain(stdout_pipe, &mut stdout),
                drain(stderr_pipe, &mut stderr)
            );
            out?;
            err?;
            child.wait().await
        })
        .await;

        let (exit_code, timed_out) = match finished {
            Ok(status) => {
                let status = status.map_err(|e| {
                    anyhow::anyhow!("Failed to read output of `{}`: {}", invocation.display(), e)
                })?;
                (status.code(), false)
            }
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::debug!(error = %e, "failed to kill timed out command");
                }
                tracing::debug!(
                    command = %invocation.display(),
                    stdout_bytes = stdout.len(),
                    "command timed out"
                );
                (None, true)
            }
        };

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            exit_code,
            timed_out,
        })
    }
}

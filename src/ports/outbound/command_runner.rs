use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the command runs in (the analyzed project)
    pub working_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, args: &[&str], working_dir: PathBuf) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir,
        }
    }

    /// Command line for messages, e.g. `npm ls --long --json`
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Captured result of a command
///
/// When the command outlived its timeout it was killed, `timed_out` is set
/// and `stdout`/`stderr` hold whatever it wrote before that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `None` when terminated by a signal or killed on timeout
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn has_stdout(&self) -> bool {
        !self.stdout.trim().is_empty()
    }

    /// Any byte on stderr counts, including a lone newline
    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// CommandRunner port for invoking the package manager
///
/// Neither a non-zero exit nor a timeout is an error at this level; callers
/// decide what they mean for their query.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion, killing it once `timeout` elapses
    ///
    /// # Errors
    /// Returns an error if the program cannot be started or its output
    /// cannot be read
    async fn run(&self, invocation: &CommandInvocation, timeout: Duration) -> Result<CommandOutput>;
}

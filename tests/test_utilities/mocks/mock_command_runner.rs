use async_trait::async_trait;
use rodeps::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock CommandRunner for testing
///
/// Answers `ls` and `outdated` with canned output and records every
/// invocation. A query without canned output fails as if it timed out.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    pub installed: Option<CommandOutput>,
    pub outdated: Option<CommandOutput>,
    pub invocations: Arc<Mutex<Vec<CommandInvocation>>>,
}

impl MockCommandRunner {
    /// Both queries succeed with the given JSON documents; `outdated` exits
    /// with code 1 when it lists anything, like npm does.
    pub fn with_reports(installed_json: &str, outdated_json: &str) -> Self {
        let outdated_exit = if outdated_json.trim() == "{}" { 0 } else { 1 };
        Self {
            installed: Some(Self::output(installed_json, "", Some(0))),
            outdated: Some(Self::output(outdated_json, "", Some(outdated_exit))),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn output(stdout: &str, stderr: &str, exit_code: Option<i32>) -> CommandOutput {
        CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
            timed_out: false,
        }
    }

    pub fn with_installed(mut self, output: CommandOutput) -> Self {
        self.installed = Some(output);
        self
    }

    pub fn with_outdated(mut self, output: CommandOutput) -> Self {
        self.outdated = Some(output);
        self
    }

    pub fn get_invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, invocation: &CommandInvocation, timeout: Duration) -> Result<CommandOutput> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let canned = match invocation.args.first().map(String::as_str) {
            Some("ls") => self.installed.clone(),
            Some("outdated") => self.outdated.clone(),
            _ => None,
        };

        canned.ok_or_else(|| {
            anyhow::anyhow!(
                "`{}` timed out after {:?}",
                invocation.display(),
                timeout
            )
        })
    }
}

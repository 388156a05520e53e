//! Agent process invocation

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{ExecutorError, Result};

/// Program used to run agents when none is configured
pub const DEFAULT_AGENT_COMMAND: &str = "amplifier";

/// Agent profile that knows how to build single-file HTML tools
pub const DEFAULT_AGENT_PROFILE: &str = "html-tool-builder";

/// Configuration for an agent invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Program to execute
    pub command: String,
    /// Agent profile selected with `run --agent`
    pub profile: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_AGENT_COMMAND.to_string(),
            profile: DEFAULT_AGENT_PROFILE.to_string(),
        }
    }
}

impl AgentConfig {
    pub fn new(command: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            profile: profile.into(),
        }
    }

    /// Arguments passed to the agent program for a description
    pub fn args<'a>(&'a self, description: &'a str) -> [&'a str; 4] {
        ["run", "--agent", self.profile.as_str(), description]
    }
}

/// Captured output of a finished agent process
#[derive(Debug, Clone)]
pub struct AgentOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the agent program to completion
#[derive(Debug, Clone)]
pub struct AgentProcess {
    config: AgentConfig,
}

impl AgentProcess {
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Run the agent for `description` and wait for it to exit.
    ///
    /// Returns the captured output when the agent exits successfully. A
    /// missing program maps to [`ExecutorError::AgentNotFound`] and a failure
    /// status to [`ExecutorError::ProcessExited`] carrying the agent's stderr.
    pub async fn run(&self, description: &str) -> Result<AgentOutput> {
        let command = self.config.command.as_str();
        let args = self.config.args(description);

        info!(
            "Running {} agent via {} with description: {}",
            self.config.profile,
            command,
            description.chars().take(100).collect::<String>()
        );
        debug!("Agent command line: {} {:?}", command, args);

        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExecutorError::from_spawn(command, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            "Agent exited with {:?} ({} bytes stdout, {} bytes stderr)",
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            return Err(ExecutorError::ProcessExited {
                code: exit_code,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(AgentOutput { stdout, stderr })
    }
}

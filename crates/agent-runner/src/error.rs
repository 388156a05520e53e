//! Error types for agent-runner

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, ExecutorError>;

/// Errors that can occur while invoking the agent
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The agent program could not be located
    #[error("Agent command '{command}' not found")]
    AgentNotFound {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to start the agent process for another reason
    #[error("Failed to spawn agent process: {message}")]
    SpawnFailed {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Agent process exited with a failure status
    #[error("Agent process exited with code {code:?}: {stderr}")]
    ProcessExited { code: Option<i32>, stderr: String },
}

impl ExecutorError {
    /// Create a SpawnFailed error with source
    pub fn spawn_failed_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            message: message.into(),
            source,
        }
    }

    /// Classify an error returned while starting `command`
    pub fn from_spawn(command: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::AgentNotFound {
                command: command.to_string(),
                source,
            }
        } else {
            Self::spawn_failed_with_source(format!("Failed to spawn {}: {}", command, source), source)
        }
    }
}

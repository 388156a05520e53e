//! Terminal errors for a single run

use agent_runner::ExecutorError;
use thiserror::Error;

/// Hint shown when the agent program is missing
pub const INSTALL_HINT: &str = "uv tool install git+https://github.com/microsoft/amplifier";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Agent(#[from] ExecutorError),

    #[error("Failed to extract HTML from agent output.")]
    ExtractionFailed,

    #[error(transparent)]
    Core(#[from] html_tool_core::Error),
}

impl AppError {
    /// Lines printed to stderr before exiting
    pub fn diagnostic(&self) -> Vec<String> {
        match self {
            Self::Agent(ExecutorError::AgentNotFound { command, .. }) => vec![
                format!("❌ {} not found. Please install it first:", command),
                format!("   {}", INSTALL_HINT),
            ],
            Self::Agent(ExecutorError::ProcessExited { code, stderr }) => {
                let status = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                vec![format!("❌ Error calling agent (exit {}): {}", status, stderr)]
            }
            Self::Agent(err @ ExecutorError::SpawnFailed { .. }) => vec![format!("❌ {}", err)],
            Self::ExtractionFailed => vec![
                format!("❌ {}", self),
                "Run with --verbose to see full output.".to_string(),
            ],
            Self::Core(html_tool_core::Error::WriteFailed { source, .. }) => {
                vec![format!("❌ Failed to save file: {}", source)]
            }
            Self::Core(err) => vec![format!("❌ {}", err)],
        }
    }

    /// Print the diagnostic to stderr
    pub fn report(&self) {
        for line in self.diagnostic() {
            eprintln!("{}", line);
        }
    }
}

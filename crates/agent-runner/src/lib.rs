//! Agent Runner - invokes the tool-building agent
//!
//! This crate runs the external agent CLI for a tool description and
//! isolates the HTML document from whatever text the agent prints.

mod error;
mod parser;
mod process;

pub use error::{ExecutorError, Result};
pub use parser::{extract_html, ExtractionRule};
pub use process::{
    AgentConfig, AgentOutput, AgentProcess, DEFAULT_AGENT_COMMAND, DEFAULT_AGENT_PROFILE,
};

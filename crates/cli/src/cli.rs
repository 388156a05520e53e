//! Command-line arguments

use std::path::PathBuf;

use agent_runner::{AgentConfig, DEFAULT_AGENT_COMMAND, DEFAULT_AGENT_PROFILE};
use clap::Parser;
use html_tool_core::tool::ToolRequest;

#[derive(Parser, Debug)]
#[command(
    name = "html-tool",
    version,
    about = "Generate single-file HTML tools using AI",
    after_help = "Example: html-tool \"JSON to YAML converter\" --output converter.html --preview"
)]
pub struct Cli {
    /// Description of the tool to build
    #[arg(value_name = "DESCRIPTION", required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// Output filename (default: auto-generated from description)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Open the generated tool in browser
    #[arg(long, short = 'p', default_value_t = false)]
    pub preview: bool,

    /// Show full agent output
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Program used to run the agent
    #[arg(
        long = "agent-command",
        value_name = "PROGRAM",
        env = "HTML_TOOL_AGENT_COMMAND",
        default_value = DEFAULT_AGENT_COMMAND
    )]
    pub agent_command: String,

    /// Agent profile that builds the tool
    #[arg(
        long = "agent",
        value_name = "NAME",
        env = "HTML_TOOL_AGENT",
        default_value = DEFAULT_AGENT_PROFILE
    )]
    pub agent_profile: String,
}

impl Cli {
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig::new(&self.agent_command, &self.agent_profile)
    }

    pub fn tool_request(&self) -> html_tool_core::Result<ToolRequest> {
        Ok(ToolRequest::from_words(&self.description)?
            .with_output(self.output.clone())
            .with_preview(self.preview)
            .with_verbose(self.verbose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_description_words_are_joined() {
        let cli = Cli::try_parse_from(["html-tool", "JSON", "to", "YAML", "converter"]).unwrap();
        let request = cli.tool_request().unwrap();
        assert_eq!(request.description, "JSON to YAML converter");
        assert!(request.output.is_none());
        assert!(!request.preview);
        assert!(!request.verbose);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "html-tool",
            "color picker",
            "-o",
            "picker.html",
            "-p",
            "-v",
        ])
        .unwrap();
        let request = cli.tool_request().unwrap();
        assert_eq!(request.description, "color picker");
        assert_eq!(request.output, Some(PathBuf::from("picker.html")));
        assert!(request.preview);
        assert!(request.verbose);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "html-tool",
            "--output",
            "out.html",
            "--preview",
            "--verbose",
            "timer",
        ])
        .unwrap();
        assert_eq!(cli.description, vec!["timer".to_string()]);
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.preview);
        assert!(cli.verbose);
    }

    #[test]
    fn test_description_is_required() {
        assert!(Cli::try_parse_from(["html-tool"]).is_err());
        assert!(Cli::try_parse_from(["html-tool", "--preview"]).is_err());
    }

    #[test]
    fn test_agent_overrides() {
        let cli = Cli::try_parse_from([
            "html-tool",
            "--agent-command",
            "/opt/bin/amplifier",
            "--agent",
            "page-builder",
            "timer",
        ])
        .unwrap();
        assert_eq!(
            cli.agent_config(),
            AgentConfig::new("/opt/bin/amplifier", "page-builder")
        );
    }
}

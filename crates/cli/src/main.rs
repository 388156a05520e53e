//! html-tool: generate single-file HTML tools with an AI agent
//!
//! Runs the tool-building agent for a description, pulls the HTML document
//! out of what it prints, writes it to disk and optionally opens it.

mod cli;
mod error;
mod preview;
mod summary;

use std::process::ExitCode;

use agent_runner::{extract_html, AgentProcess};
use clap::Parser;
use html_tool_core::tool::write_document;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::AppError;

const VERBOSE_FILTER: &str = "html_tool=debug,agent_runner=debug,html_tool_core=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for status output
    let default_filter = if cli.verbose { VERBOSE_FILTER } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Run failed: {:?}", err);
            err.report();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let request = cli.tool_request()?;
    let agent = AgentProcess::new(cli.agent_config());

    println!("{}", summary::building(&request.description));
    println!("{}", summary::calling(&agent.config().profile));

    let output = agent.run(&request.description).await?;
    if !output.stderr.trim().is_empty() {
        debug!("Agent stderr: {}", output.stderr.trim());
    }

    if request.verbose {
        println!("{}", summary::raw_output(&output.stdout));
    }

    let html = extract_html(&output.stdout).ok_or(AppError::ExtractionFailed)?;

    let output_path = request.output_path();
    let artifact = write_document(&output_path, &html).await?;
    println!("{}", summary::generated(&artifact));

    if request.preview {
        println!("{}", summary::opening());
        // Preview failures are non-fatal
        if let Err(e) = preview::open_in_browser(artifact.path()) {
            warn!("Preview failed: {}", e);
            eprintln!("⚠️  Could not open browser: {}", e);
        }
    }

    println!("{}", summary::next_steps(&request, &output_path));
    Ok(())
}

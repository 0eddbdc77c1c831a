//! # cite-verify CLI
//!
//! Command-line host for the `verify_citation` tool.
//!
//! ## Usage
//!
//! - `cite-verify verify 10.1038/nature12373` - Verify one or more DOIs
//! - `cite-verify tools` - Show registered tools
//! - `cite-verify call verify_citation --params '{"doi": "..."}'` - Run a raw tool call
//!
//! Reports go to stdout as JSON; logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cite_verify_core::tools::ToolRegistry;
use std::path::PathBuf;

mod commands;
mod config;

use commands::{call_command, tools_command, verify_command};
use config::CliConfigLoader;

/// cite-verify - Check citations for hallucinated DOIs
#[derive(Parser)]
#[command(name = "cite-verify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify DOI citations against the Crossref registry")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Registry base URL override
    #[arg(long, global = true, env = "CITE_VERIFY_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CITE_VERIFY_TIMEOUT")]
    timeout: Option<u64>,

    /// User-Agent header override
    #[arg(long, global = true, env = "CITE_VERIFY_USER_AGENT")]
    user_agent: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify one or more DOIs
    Verify {
        /// DOIs to verify, bare or as https://doi.org/ URLs
        #[arg(required = true)]
        dois: Vec<String>,

        /// Print a hallucination rate summary to stderr
        #[arg(long)]
        summary: bool,

        /// Exit with status 1 if any DOI could not be verified
        #[arg(long)]
        strict: bool,
    },

    /// Show available tools
    Tools {
        /// Print function-calling definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a raw tool call
    Call {
        /// Tool name
        tool: String,

        /// Tool parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout_override(timeout);
    }

    if let Some(user_agent) = &cli.user_agent {
        loader = loader.with_user_agent_override(user_agent.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    cite_verify_core::init_tracing_with_debug(cli.verbose);

    let registry_config = build_config_loader(&cli).load().await?;

    // Tool registration happens once, before any command runs
    let registry = ToolRegistry::with_config(registry_config.clone());

    match cli.command {
        Commands::Verify {
            dois,
            summary,
            strict,
        } => {
            let unverified = verify_command(registry_config, dois, summary).await?;
            if strict && unverified > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Tools { json } => tools_command(&registry, json).await,
        Commands::Call { tool, params } => call_command(&registry, tool, &params).await,
    }
}

mod cli;
mod commands;
mod config;
mod error;
mod mcp;
mod pdf;
mod split_points;
mod splitter;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the MCP transport on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Split {
            path,
            pages,
            offset,
            output_dir,
            config,
            dry_run,
        } => {
            commands::split::run(commands::split::SplitArgs {
                path,
                pages,
                offset,
                output_dir,
                config,
                dry_run,
            })?;
        }
    }

    Ok(())
}

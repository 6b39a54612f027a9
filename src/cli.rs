use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into chunks at given page boundaries, with MCP server support")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Split a PDF into one file per page range
    #[command(alias = "chunk")]
    Split {
        /// PDF file to split (overrides input_pdf from the config file)
        path: Option<PathBuf>,

        /// 1-indexed pages that start a new chunk (e.g., "3,21,77")
        #[arg(short, long, allow_hyphen_values = true)]
        pages: Option<String>,

        /// Number of front-matter pages added to every split page
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Output directory [default: output_chunks]
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// TOML file with input_pdf, split_pages, num_prefix_pages and output_folder
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the chunks that would be written without writing them
        #[arg(long)]
        dry_run: bool,
    },
}

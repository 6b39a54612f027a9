use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::config::{SplitConfig, DEFAULT_OUTPUT_FOLDER};
use crate::splitter::{self, SplitOutcome};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the PDF file to split")]
    pub path: String,
    #[schemars(description = "1-indexed page numbers at which a new chunk begins (e.g., [21, 77])")]
    pub split_pages: Vec<i64>,
    #[schemars(description = "Number of front-matter pages added to every split page (default: 0)")]
    #[serde(default)]
    pub num_prefix_pages: i64,
    #[schemars(description = "Folder the chunk files are written to (default: output_chunks)")]
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
}

fn default_output_folder() -> String {
    DEFAULT_OUTPUT_FOLDER.to_string()
}

impl PdfSplitRequest {
    fn into_config(self) -> SplitConfig {
        let mut config = SplitConfig::new(self.path, self.split_pages);
        config.num_prefix_pages = self.num_prefix_pages;
        config.output_folder = PathBuf::from(self.output_folder);
        config
    }
}

#[derive(Debug, Clone)]
pub struct PdfSplitServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfSplitServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfSplitServer {
    fn default() -> Self {
        Self::new()
    }
}

fn render(outcome: Result<SplitOutcome, crate::error::SplitError>) -> String {
    match outcome {
        Ok(outcome) => {
            serde_json::to_string_pretty(&outcome).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => format!("Error: {:#}", anyhow::Error::from(e)),
    }
}

#[tool_router]
impl PdfSplitServer {
    #[tool(description = "Split a PDF into one file per page range. Each split page starts a new chunk; files are named chunk_<first>_to_<last>.pdf")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        render(splitter::split(&req.into_config()))
    }

    #[tool(description = "Show the chunks pdf_split would write for the given split pages, without writing anything")]
    fn pdf_plan_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        render(splitter::plan(&req.into_config()))
    }
}

impl ServerHandler for PdfSplitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting tools. Use pdf_plan_split to preview the page ranges for a set of \
                 split pages, and pdf_split to write each range to its own PDF file."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfSplitServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}

//! Split a PDF into chunk files at given page boundaries.

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::pdf::PdfDocument;
use crate::split_points::{self, Chunk};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Why a run finished without writing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    EmptyDocument,
    NoValidSplitPoints,
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOpReason::EmptyDocument => write!(f, "input PDF has no pages"),
            NoOpReason::NoValidSplitPoints => write!(f, "no valid split points"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkReport {
    pub path: PathBuf,
    pub first_page: u32,
    pub last_page: u32,
    pub page_count: u32,
}

impl ChunkReport {
    fn new(chunk: &Chunk, output_folder: &Path) -> Self {
        ChunkReport {
            path: output_folder.join(chunk.file_name()),
            first_page: chunk.first_page(),
            last_page: chunk.last_page(),
            page_count: chunk.page_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SplitOutcome {
    /// Every chunk was written.
    Success {
        total_pages: u32,
        chunks: Vec<ChunkReport>,
    },
    /// Dry run: the chunks that would be written.
    Planned {
        total_pages: u32,
        chunks: Vec<ChunkReport>,
    },
    NoOp { reason: NoOpReason },
}

enum Preparation {
    Ready { doc: PdfDocument, chunks: Vec<Chunk> },
    NoOp(NoOpReason),
}

/// Open the input and turn the configured split points into chunks
fn prepare(config: &SplitConfig) -> Result<Preparation, SplitError> {
    let input = &config.input_pdf;
    info!(path = %input.display(), "Attempting to read PDF");

    let doc = PdfDocument::open(input).map_err(|source| {
        error!(path = %input.display(), error = %source, "Error reading PDF file");
        SplitError::Open {
            path: input.clone(),
            source,
        }
    })?;

    let total_pages = doc.page_count();
    info!(total_pages, "Total pages in input PDF");

    if total_pages == 0 {
        info!("Input PDF has no pages, nothing to do");
        return Ok(Preparation::NoOp(NoOpReason::EmptyDocument));
    }

    let valid = split_points::validate(&config.effective_split_points(), total_pages);
    if !valid.dropped.is_empty() {
        warn!(
            dropped = ?valid.dropped,
            "Split points must satisfy 1 <= page < {}, dropping the rest",
            total_pages
        );
    }
    if valid.points.is_empty() {
        info!("No valid split points, nothing to do");
        return Ok(Preparation::NoOp(NoOpReason::NoValidSplitPoints));
    }

    let boundaries = split_points::boundaries(&valid.points, total_pages);
    let chunks = split_points::chunks(&boundaries);
    Ok(Preparation::Ready { doc, chunks })
}

/// Report the chunks `split` would write, without touching the output folder
pub fn plan(config: &SplitConfig) -> Result<SplitOutcome, SplitError> {
    match prepare(config)? {
        Preparation::NoOp(reason) => Ok(SplitOutcome::NoOp { reason }),
        Preparation::Ready { doc, chunks } => Ok(SplitOutcome::Planned {
            total_pages: doc.page_count(),
            chunks: chunks
                .iter()
                .map(|chunk| ChunkReport::new(chunk, &config.output_folder))
                .collect(),
        }),
    }
}

/// Write one PDF per chunk into the output folder.
///
/// The first failed write aborts the run. Chunks written before it are left
/// on disk, and the count is carried in [`SplitError::Write`].
pub fn split(config: &SplitConfig) -> Result<SplitOutcome, SplitError> {
    let (doc, chunks) = match prepare(config)? {
        Preparation::NoOp(reason) => return Ok(SplitOutcome::NoOp { reason }),
        Preparation::Ready { doc, chunks } => (doc, chunks),
    };

    ensure_output_folder(&config.output_folder)?;

    let mut written = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        info!(
            "Processing chunk from page {} to {}",
            chunk.first_page(),
            chunk.last_page()
        );

        let mut new_doc = doc.extract_chunk(chunk).map_err(|source| {
            error!(path = %doc.path.display(), error = %source, "Error copying pages");
            SplitError::CopyPages {
                path: doc.path.clone(),
                written: written.len(),
                source,
            }
        })?;

        let report = ChunkReport::new(chunk, &config.output_folder);
        info!(path = %report.path.display(), "Attempting to write");

        if let Err(source) = PdfDocument::save(&mut new_doc, &report.path) {
            error!(path = %report.path.display(), error = %source, "Error writing PDF file");
            return Err(SplitError::Write {
                path: report.path,
                written: written.len(),
                source,
            });
        }

        info!(path = %report.path.display(), "Successfully wrote");
        written.push(report);
    }

    info!(chunks = written.len(), "All chunks processed successfully");
    Ok(SplitOutcome::Success {
        total_pages: doc.page_count(),
        chunks: written,
    })
}

fn ensure_output_folder(folder: &Path) -> Result<(), SplitError> {
    if folder.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(folder).map_err(|source| {
        error!(path = %folder.display(), error = %source, "Error creating output folder");
        SplitError::CreateOutputDir {
            path: folder.to_path_buf(),
            source,
        }
    })?;
    info!(path = %folder.display(), "Created output folder");
    Ok(())
}

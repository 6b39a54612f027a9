//! Failure kinds of a split run.
//!
//! Benign outcomes (empty document, no usable split points) are not errors;
//! see [`crate::splitter::SplitOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// A chunk asked for pages the document does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Pages {first}-{last} are out of range (1-{total_pages})")]
pub struct PageRangeError {
    pub first: u32,
    pub last: u32,
    pub total_pages: u32,
}

#[derive(Debug, Error)]
pub enum SplitError {
    /// The input could not be opened or parsed as a PDF.
    #[error("Failed to open PDF: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to create output folder: {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pages for a chunk could not be copied out of the input.
    #[error("Failed to copy pages from {} ({} chunk(s) already written)", .path.display(), .written)]
    CopyPages {
        path: PathBuf,
        written: usize,
        #[source]
        source: PageRangeError,
    },

    /// A chunk could not be written. `written` chunks are already on disk.
    #[error("Failed to write PDF file {} ({} chunk(s) already written)", .path.display(), .written)]
    Write {
        path: PathBuf,
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

use crate::error::PageRangeError;
use crate::split_points::Chunk;
use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, lopdf::Error> {
        let path = path.as_ref();
        let doc = Document::load(path)?;
        Ok(PdfDocument {
            doc,
            path: path.to_path_buf(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        // get_pages is a BTreeMap, so this is already ordered by page number
        self.doc.get_pages().into_iter().collect()
    }

    /// Copy the pages of `chunk` into a new document
    pub fn extract_chunk(&self, chunk: &Chunk) -> Result<Document, PageRangeError> {
        let total = self.page_count();
        if chunk.is_degenerate() || chunk.last_page() > total {
            return Err(PageRangeError {
                first: chunk.first_page(),
                last: chunk.last_page(),
                total_pages: total,
            });
        }

        let mut new_doc = self.doc.clone();

        // Get page numbers to delete (pages outside the chunk)
        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|&num| num < chunk.first_page() || num > chunk.last_page())
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            // drop content streams and resources only the deleted pages used
            new_doc.prune_objects();
        }

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> std::io::Result<()> {
        doc.save(path)?;
        Ok(())
    }
}

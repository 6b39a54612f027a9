pub mod document;

pub use document::PdfDocument;

#[cfg(test)]
pub mod fixtures;

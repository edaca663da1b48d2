use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::resume::ResumeError;

/// Turns a source document into its text, one entry per page, in document order.
/// Pages without extractable text yield an empty string.
pub trait PageExtractor: Send + Sync {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ResumeError>;
}

/// PDF extraction backed by `pdf-extract`.
pub struct PdfPageExtractor;

impl PageExtractor for PdfPageExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ResumeError> {
        let bytes = std::fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        // pdf-extract panics on some malformed documents instead of returning Err.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }))
        .map_err(|_| {
            ResumeError::Processing(format!("PDF extractor aborted on '{}'", path.display()))
        })?;

        result.map_err(|e| ResumeError::Processing(e.to_string()))
    }
}

//! PDF loading and text extraction.
//!
//! Reports are read once at startup and held as a single immutable string. Extraction is
//! all-or-nothing: a single malformed page invalidates the whole read rather than producing
//! a silently truncated report.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a report from disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The supplied path does not exist on the filesystem.
    #[error("Report not found: {0}")]
    NotFound(PathBuf),
    /// The file exists but could not be parsed as a PDF.
    #[error("Unreadable PDF {path}: {source}")]
    Unreadable {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: lopdf::Error,
    },
    /// The PDF parsed but no page yielded any text.
    #[error("No extractable text in {0}")]
    NoText(PathBuf),
}

/// Text content extracted from a PDF report.
///
/// Created once at load time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// Concatenated text of all pages, in page order.
    pub text: String,
}

/// Load a PDF from disk and concatenate the text of every page.
pub fn load(path: &Path) -> Result<Document, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let pdf = lopdf::Document::load(path).map_err(|source| DocumentError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = pdf.get_pages();
    let page_count = pages.len();
    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text =
            pdf.extract_text(&[*page_number])
                .map_err(|source| DocumentError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })?;
        text.push_str(&page_text);
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }

    if text.trim().is_empty() {
        return Err(DocumentError::NoText(path.to_path_buf()));
    }

    tracing::debug!(
        path = %path.display(),
        pages = page_count,
        chars = text.len(),
        "Extracted report text"
    );
    Ok(Document { text })
}

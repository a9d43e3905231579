//! Document text acquisition.
//!
//! The classifier consumes plain text and does not care where it came from.
//! `TextSource` is that boundary: given a stored document, produce the
//! concatenated text of all pages in page order, or fail with one of three
//! conditions a caller can show to a user. Blank text is not a failure
//! here; the ingest layer treats "parsed fine, extracted nothing" as its
//! own case.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a document's text could not be produced.
#[derive(Debug, Error)]
pub enum TextSourceError {
    /// The file itself could not be read from disk.
    #[error("the document could not be read: {0}")]
    Unreadable(#[from] std::io::Error),

    /// The bytes were readable but are not a document this source can parse.
    #[error("the document is damaged or not a supported format: {0}")]
    Corrupt(String),

    /// The document is password protected.
    #[error("the document is encrypted")]
    Encrypted,
}

/// A source of document text. Carried in `AppState` as `Arc<dyn TextSource>`
/// so tests can swap in a canned source without touching handlers.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Returns the full text of the document at `path`, pages concatenated
    /// in page order. `Ok` with whitespace-only content means the document
    /// parsed fine but carries no extractable text.
    async fn extract_text(&self, path: &Path) -> Result<String, TextSourceError>;
}

/// PDF-backed `TextSource`.
///
/// Primary pass: lopdf, page by page, which also gives us the encryption
/// check. When the primary pass comes back whitespace-only (image-only
/// pages, unusual encodings), a pdf-extract pass over the same bytes gets
/// one more chance before the blank result stands.
pub struct PdfTextSource;

#[async_trait]
impl TextSource for PdfTextSource {
    async fn extract_text(&self, path: &Path) -> Result<String, TextSourceError> {
        let path: PathBuf = path.to_owned();
        tokio::task::spawn_blocking(move || extract_pdf_text(&path))
            .await
            .map_err(|e| TextSourceError::Corrupt(format!("extraction task failed: {e}")))?
    }
}

fn extract_pdf_text(path: &Path) -> Result<String, TextSourceError> {
    let bytes = std::fs::read(path)?;

    let doc = lopdf::Document::load_mem(&bytes)
        .map_err(|e| TextSourceError::Corrupt(e.to_string()))?;
    let text = document_text(&doc)?;

    if text.trim().is_empty() {
        if let Some(recovered) = fallback_text(&bytes) {
            debug!("primary PDF pass was blank, fallback extractor recovered text");
            return Ok(recovered);
        }
    }

    Ok(text)
}

/// Page-order text of a parsed document. Page boundaries always land on a
/// line boundary so the classifier never sees two pages glued into one line.
fn document_text(doc: &lopdf::Document) -> Result<String, TextSourceError> {
    if doc.is_encrypted() {
        return Err(TextSourceError::Encrypted);
    }

    let mut text = String::new();
    for (page_number, _) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_number])
            .map_err(|e| TextSourceError::Corrupt(format!("page {page_number}: {e}")))?;
        text.push_str(&page_text);
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
    }
    Ok(text)
}

/// Whole-document pass with pdf-extract. Only consulted when the page loop
/// produced nothing; its own failures are logged and swallowed because the
/// document already parsed once. pdf-extract panics on some malformed
/// content streams, so the call runs under `catch_unwind`.
fn fallback_text(bytes: &[u8]) -> Option<String> {
    let outcome = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));
    match outcome {
        Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            warn!("pdf-extract fallback failed: {e}");
            None
        }
        Err(_) => {
            warn!("pdf-extract fallback panicked");
            None
        }
    }
}

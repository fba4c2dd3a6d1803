//! Text extraction: turns an uploaded document into plain UTF-8 text.
//!
//! The scoring engine never sees bytes; it only receives what an extractor
//! returns. `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap it.

mod docx;

#[cfg(test)]
pub(crate) use docx::docx_from_lines;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Document is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Extraction task failed: {0}")]
    Join(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" | "md" => Ok(Self::PlainText),
            "" => Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
            other => Err(ExtractionError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file_name: &str, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor: PDF via `pdf-extract`, DOCX via `zip` + `quick-xml`,
/// plain text via UTF-8 decoding.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, file_name: &str, bytes: Bytes) -> Result<String, ExtractionError> {
        let format = DocumentFormat::from_file_name(file_name)?;
        debug!(file_name, ?format, size = bytes.len(), "Extracting document text");

        match format {
            DocumentFormat::PlainText => {
                String::from_utf8(bytes.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)
            }
            // PDF parsing is CPU-bound; keep it off the async executor.
            DocumentFormat::Pdf => tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
                    .map_err(|e| ExtractionError::Pdf(e.to_string()))
            })
            .await
            .map_err(|e| ExtractionError::Join(e.to_string()))?,
            DocumentFormat::Docx => {
                tokio::task::spawn_blocking(move || docx::extract_docx_text(&bytes))
                    .await
                    .map_err(|e| ExtractionError::Join(e.to_string()))?
            }
        }
    }
}

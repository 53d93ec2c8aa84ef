//! Per-document pipeline: sniff → decode → extract fields.
//!
//! Everything that can go wrong with one document becomes a
//! `ParseResult::Failure` for that document. Batches fan out one blocking
//! task per document and collect results in upload order.

use bytes::Bytes;
use deunicode::deunicode;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_MAX_INFLATED_BYTES, DEFAULT_MAX_TEXT_CHARS};
use crate::extraction::decode::extract_text;
use crate::extraction::fields::extract_fields;
use crate::extraction::format::{self, DocumentFormat};
use crate::models::resume::{ParseResult, ResumeFields};

/// Per-document failures. The `Display` text is what the client sees.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File type not allowed. Please use TXT, PDF, DOC, or DOCX files.")]
    UnsupportedType,

    #[error("File appears empty or unreadable")]
    EmptyContent,

    #[error("Unexpected error while processing file: {0}")]
    Crashed(String),
}

/// Bounds applied to every document.
#[derive(Debug, Clone, Copy)]
pub struct PipelineLimits {
    /// Decoded text is cut to this many characters before field matching.
    pub max_text_chars: usize,
    /// Ceiling on the inflated size of a compressed document body.
    pub max_inflated_bytes: usize,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        PipelineLimits {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}

/// One uploaded file, as received.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub filename: String,
    pub bytes: Bytes,
    /// Lowercased suffix after the last `.`, if any.
    pub extension: Option<String>,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let filename = filename.into();
        let extension = format::extension_of(&filename);
        RawDocument {
            filename,
            bytes: bytes.into(),
            extension,
        }
    }
}

/// Decoded plain text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub content: String,
}

impl ExtractedText {
    pub fn decode(format: DocumentFormat, bytes: &[u8], limits: &PipelineLimits) -> Self {
        ExtractedText {
            content: extract_text(format, bytes, limits.max_inflated_bytes),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// The content cut at `max_chars` characters (on a char boundary).
    pub fn bounded(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Runs the pipeline for a single document. Never panics on bad input;
/// every problem is reported as a `Failure` record.
pub fn process_document(doc: &RawDocument, limits: &PipelineLimits) -> ParseResult {
    match parse_document(doc, limits) {
        Ok(fields) => {
            info!(
                filename = %doc.filename,
                skills = fields.skills.len(),
                "Parsed resume"
            );
            ParseResult::Success {
                filename: fields.filename.clone(),
                fields,
            }
        }
        Err(e) => {
            warn!(filename = %doc.filename, "Resume rejected: {e}");
            ParseResult::Failure {
                filename: doc.filename.clone(),
                error: e.to_string(),
            }
        }
    }
}

fn parse_document(doc: &RawDocument, limits: &PipelineLimits) -> Result<ResumeFields, DocumentError> {
    if !format::is_allowed(&doc.filename) {
        return Err(DocumentError::UnsupportedType);
    }

    let format = format::sniff(&doc.filename);
    let text = ExtractedText::decode(format, &doc.bytes, limits);
    debug!(
        filename = %doc.filename,
        extension = ?doc.extension,
        ?format,
        bytes = doc.bytes.len(),
        chars = text.content.len(),
        "Decoded document"
    );

    if text.is_blank() {
        return Err(DocumentError::EmptyContent);
    }

    Ok(extract_fields(
        text.bounded(limits.max_text_chars),
        &secure_filename(&doc.filename),
    ))
}

/// Processes every document on the blocking pool, one task each, and returns
/// results in input order. A task that dies only fails its own document.
pub async fn process_batch(docs: Vec<RawDocument>, limits: PipelineLimits) -> Vec<ParseResult> {
    let handles: Vec<_> = docs
        .into_iter()
        .map(|doc| {
            let filename = doc.filename.clone();
            let handle = tokio::task::spawn_blocking(move || process_document(&doc, &limits));
            (filename, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (filename, handle) in handles {
        let result = handle.await.unwrap_or_else(|e| {
            warn!(filename = %filename, "Resume task failed: {e}");
            ParseResult::Failure {
                filename,
                error: DocumentError::Crashed(e.to_string()).to_string(),
            }
        });
        results.push(result);
    }
    results
}

/// Reduces an uploaded filename to a safe basename: path components dropped,
/// non-ASCII transliterated, whitespace turned into `_`, only ASCII
/// alphanumerics and `._-` kept.
pub fn secure_filename(filename: &str) -> String {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    let cleaned: String = deunicode(base)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '.' | '_' | '-'))
        .collect();
    let trimmed = cleaned.trim_start_matches(|c: char| c == '.' || c == '_');

    if trimmed.is_empty() {
        "resume".to_string()
    } else {
        trimmed.to_string()
    }
}

//! Text extraction. Turns raw upload bytes into a plain Unicode string.
//!
//! Every path ends in the byte-decoding chain (UTF-8 → Latin-1 → lossy UTF-8),
//! whose last step cannot fail, so `extract_text` is total: corrupt PDFs and
//! broken DOCX archives degrade to "binary as text" instead of erroring.
//! A DOCX body is never inflated past the caller's byte ceiling, whatever
//! size the archive header claims.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::extraction::format::DocumentFormat;

/// Archive entry holding the body of a Word document.
const DOCX_BODY_ENTRY: &str = "word/document.xml";

/// Internal decoder failures. These never leave this module; they only
/// select the byte-decoding fallback.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("PDF parse failed: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    PdfPanic,

    #[error("DOCX archive unreadable: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX entry unreadable: {0}")]
    Io(#[from] std::io::Error),
}

type ByteDecoder = fn(&[u8]) -> Option<String>;

/// Ordered decode attempts; first `Some` wins.
const DECODE_CHAIN: &[(&str, ByteDecoder)] = &[("utf-8", decode_utf8), ("latin-1", decode_latin1)];

/// Matches one `<w:t ...>run</w:t>` pair without parsing the XML.
static TEXT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*[^/>])?\s*>(.*?)</w:t>").expect("static regex is valid")
});

/// Extracts best-effort plain text from `bytes` using the decoder for `format`.
/// `max_inflated_bytes` caps how much of a compressed body is decompressed.
pub fn extract_text(format: DocumentFormat, bytes: &[u8], max_inflated_bytes: usize) -> String {
    match format {
        DocumentFormat::PlainText => decode_bytes(bytes),
        DocumentFormat::Pdf => extract_pdf(bytes).unwrap_or_else(|e| {
            warn!("Falling back to byte decoding for PDF: {e}");
            decode_bytes(bytes)
        }),
        DocumentFormat::Docx => extract_docx(bytes, max_inflated_bytes).unwrap_or_else(|e| {
            warn!("Falling back to byte decoding for DOCX: {e}");
            decode_bytes(bytes)
        }),
    }
}

/// Runs the decode chain. Latin-1 accepts every byte, so in practice the
/// chain stops there; the lossy pass keeps the function total regardless.
pub fn decode_bytes(bytes: &[u8]) -> String {
    for (label, decoder) in DECODE_CHAIN {
        if let Some(text) = decoder(bytes) {
            debug!(encoding = label, bytes = bytes.len(), "Decoded text");
            return text;
        }
    }
    decode_utf8_lossy(bytes)
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Invalid sequences are dropped, not replaced.
fn decode_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "")
}

/// pdf-extract walks pages in document order and separates them with form
/// feeds; pages with no text layer contribute nothing.
fn extract_pdf(bytes: &[u8]) -> Result<String, DecodeError> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text.replace('\u{c}', "\n")),
        Ok(Err(e)) => Err(DecodeError::Pdf(e.to_string())),
        Err(_) => Err(DecodeError::PdfPanic),
    }
}

fn extract_docx(bytes: &[u8], max_inflated_bytes: usize) -> Result<String, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let entry = archive.by_name(DOCX_BODY_ENTRY)?;
    let declared = entry.size();

    // One byte past the ceiling tells a body that fits from one that doesn't.
    let mut xml = Vec::new();
    entry
        .take((max_inflated_bytes as u64).saturating_add(1))
        .read_to_end(&mut xml)?;
    if xml.len() > max_inflated_bytes {
        warn!(
            limit = max_inflated_bytes,
            declared, "DOCX body exceeds inflate limit, truncating"
        );
        xml.truncate(max_inflated_bytes);
        trim_partial_utf8(&mut xml);
    }
    Ok(join_text_runs(&decode_bytes(&xml)))
}

/// Drops a multi-byte sequence cut off at the end of `buf`, so a truncated
/// UTF-8 body still decodes as UTF-8.
fn trim_partial_utf8(buf: &mut Vec<u8>) {
    if let Err(e) = std::str::from_utf8(buf) {
        if e.error_len().is_none() {
            buf.truncate(e.valid_up_to());
        }
    }
}

/// Joins every `<w:t>` run with single spaces. Runs are trimmed and empty
/// runs skipped so split words don't pick up doubled spaces.
fn join_text_runs(xml: &str) -> String {
    TEXT_RUN
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| unescape_xml(m.as_str().trim()))
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn unescape_xml(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

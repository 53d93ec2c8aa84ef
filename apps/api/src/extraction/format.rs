//! Format sniffing: picks a decoding strategy from the filename alone.
//!
//! No magic-byte inspection: a mislabeled file goes to the decoder its
//! extension names and relies on that decoder's byte-level fallback.

/// Upload extensions the service accepts. `doc` has no dedicated decoder.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf", "doc", "docx"];

/// Decoding strategy for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

/// Lowercased suffix after the last `.`, or `None` when there is no dot.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Selects the decoder for `filename`. Unknown or missing extensions
/// (including legacy `doc`) decode as plain text.
pub fn sniff(filename: &str) -> DocumentFormat {
    match extension_of(filename).as_deref() {
        Some("pdf") => DocumentFormat::Pdf,
        Some("docx") => DocumentFormat::Docx,
        _ => DocumentFormat::PlainText,
    }
}

/// True when the upload's extension is on the accepted list.
pub fn is_allowed(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

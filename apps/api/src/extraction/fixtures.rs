//! Hand-built DOCX and PDF bytes for decoder and pipeline tests.

use std::io::{Cursor, Write};

/// Zip archive holding a single deflated entry.
pub fn zip_with_entry(entry_name: &str, body: &[u8]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(entry_name, zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(body).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Minimal DOCX: only `word/document.xml`.
pub fn docx(xml: &str) -> Vec<u8> {
    docx_raw(xml.as_bytes())
}

/// Minimal DOCX whose body is arbitrary bytes.
pub fn docx_raw(body: &[u8]) -> Vec<u8> {
    zip_with_entry("word/document.xml", body)
}

/// Content stream drawing `text` in 12pt Helvetica at height `y`.
pub fn text_stream(text: &str, y: u32) -> String {
    format!("BT /F1 12 Tf 72 {y} Td ({text}) Tj ET")
}

/// Content stream with a stroked line and no text operators, like a scan.
pub fn graphics_stream() -> String {
    "0 0 m 200 200 l S".to_string()
}

/// Letter-size PDF with one page per content stream, in order, and a valid
/// cross-reference table.
pub fn pdf(page_streams: &[String]) -> Vec<u8> {
    // 1 catalog, 2 page tree, 3 font, then a (page, contents) pair per page.
    let kids: Vec<String> = (0..page_streams.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_streams.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, stream) in page_streams.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}

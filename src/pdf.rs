//! Minimal text-only PDF 1.4 writer.
//!
//! Enough for report pages: one base-14 monospace font, absolute text
//! placement, uncompressed content streams.

use std::{fs, path::Path};

/// US Letter in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
/// Courier advance width per point of font size.
pub const COURIER_ADVANCE: f32 = 0.6;

#[derive(Clone, Debug, Default)]
pub struct Page { content: String }

impl Page {
    pub fn new() -> Self { Self::default() }

    /// Place `text` with its baseline-left corner at (`x`, `y`), PDF units
    /// measured from the bottom-left of the page.
    pub fn text(&mut self, x: f32, y: f32, size: f32, text: &str) {
        self.content.push_str(&format!("BT /F1 {size:.1} Tf {x:.2} {y:.2} Td ({}) Tj ET\n", escape(text)));
    }

    /// Horizontally centred line.
    pub fn text_centered(&mut self, y: f32, size: f32, text: &str) {
        let width = text.chars().count() as f32 * size * COURIER_ADVANCE;
        self.text(((PAGE_WIDTH - width) / 2.0).max(0.0), y, size, text);
    }

    pub fn content(&self) -> &str { &self.content }
}

#[derive(Clone, Debug, Default)]
pub struct PdfDocument { pages: Vec<Page> }

impl PdfDocument {
    pub fn new() -> Self { Self::default() }
    pub fn push(&mut self, page: Page) { self.pages.push(page); }
    pub fn len(&self) -> usize { self.pages.len() }
    pub fn is_empty(&self) -> bool { self.pages.is_empty() }

    /// Serialize: catalog (1), page tree (2), font (3), then a page object
    /// and its content stream for every page, xref and trailer last.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let kids: Vec<String> = (0..self.pages.len()).map(|i| format!("{} 0 R", page_obj(i))).collect();
        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), self.pages.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Courier /Encoding /WinAnsiEncoding >>".to_string(),
        ];
        for (i, page) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                page_obj(i) + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                page.content.len(),
                page.content
            ));
        }

        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_at = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for off in &offsets { out.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes()); }
        out.extend_from_slice(
            format!("trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n", objects.len() + 1, xref_at).as_bytes(),
        );
        out
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.to_bytes())
    }
}

#[inline]
fn page_obj(i: usize) -> usize { 4 + 2 * i }

/// Escape string-literal delimiters; anything outside printable ASCII
/// becomes `?` since content streams are written as raw bytes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '(' | ')' | '\\' => { out.push('\\'); out.push(ch); }
            ' '..='~' => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}

use std::path::Path;

use crate::error::Result;
use crate::params::LcgParams;
use crate::pdf::{Page, PdfDocument, PAGE_HEIGHT, PAGE_WIDTH};
use crate::period::PeriodVerdict;

/// Values per number page: 4 columns x 60 rows, filled column by column.
pub const COLUMNS: usize = 4;
pub const ROWS: usize = 60;
pub const PER_PAGE: usize = COLUMNS * ROWS;

const COVER_SIZE: f32 = 12.0;
const COVER_LEADING: f32 = 18.0;
const HEADER_SIZE: f32 = 12.0;
const ENTRY_SIZE: f32 = 9.0;

// page margins as fractions of the page
const LEFT: f32 = 0.08;
const RIGHT: f32 = 0.92;
const TOP: f32 = 0.92;
const BOTTOM: f32 = 0.06;
const HEADER_TOP: f32 = 0.97;

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/// `2^k` for powers of two, the plain number otherwise.
pub fn modulus_label(m: u64) -> String {
    if m.is_power_of_two() && m > 2 { format!("2^{}", m.trailing_zeros()) } else { m.to_string() }
}

pub fn formula(params: &LcgParams) -> String {
    format!("x_(n+1) = ({} * x_n + {}) mod {}", params.a, params.c, modulus_label(params.m))
}

fn yes_no(b: bool) -> &'static str { if b { "Yes" } else { "No" } }

fn period_text(params: &LcgParams, verdict: &PeriodVerdict) -> String {
    match verdict.theoretical_period {
        Some(p) => group_thousands(p),
        None => format!("less than {}", group_thousands(params.m)),
    }
}

pub fn cover_lines(params: &LcgParams, seed: i64, verdict: &PeriodVerdict, count: usize) -> Vec<String> {
    let m_line = if params.m.is_power_of_two() && params.m > 2 {
        format!("m = {} = {}", modulus_label(params.m), group_thousands(params.m))
    } else {
        format!("m = {}", group_thousands(params.m))
    };
    vec![
        "Linear Congruential Generator (Unix parameters)".to_string(),
        String::new(),
        formula(params),
        String::new(),
        format!("Seed (x0): {seed}"),
        format!("a = {}", params.a),
        format!("c = {}", params.c),
        m_line,
        String::new(),
        format!("Full period by Hull-Dobell?: {}", yes_no(verdict.full_period)),
        format!("Theoretical period: {}", period_text(params, verdict)),
        String::new(),
        format!("This document contains the first {} generated integers.", group_thousands(count as u64)),
    ]
}

pub fn cover_page(lines: &[String]) -> Page {
    let mut page = Page::new();
    let block = lines.len() as f32 * COVER_LEADING;
    let mut y = (PAGE_HEIGHT + block) / 2.0;
    for line in lines {
        if !line.is_empty() { page.text_centered(y, COVER_SIZE, line); }
        y -= COVER_LEADING;
    }
    page
}

pub fn page_count(n: usize) -> usize { n.div_ceil(PER_PAGE) }

/// Grid pages for `values`; labels are 1-based positions in the full
/// sequence.
pub fn number_pages(values: &[u32]) -> Vec<Page> {
    let pages = page_count(values.len());
    let col_width = (RIGHT - LEFT) / COLUMNS as f32 * PAGE_WIDTH;
    let row_step = (TOP - BOTTOM) / ROWS as f32 * PAGE_HEIGHT;

    values.chunks(PER_PAGE).enumerate().map(|(p, chunk)| {
        let mut page = Page::new();
        page.text_centered(HEADER_TOP * PAGE_HEIGHT - HEADER_SIZE, HEADER_SIZE,
                           &format!("Random numbers (page {} of {})", p + 1, pages));
        let start = p * PER_PAGE;
        for (i, v) in chunk.iter().enumerate() {
            let (col, row) = (i / ROWS, i % ROWS);
            let x = LEFT * PAGE_WIDTH + col as f32 * col_width;
            // entries hang from their row line
            let y = TOP * PAGE_HEIGHT - row as f32 * row_step - ENTRY_SIZE;
            page.text(x, y, ENTRY_SIZE, &format!("{:>4}: {}", start + i + 1, v));
        }
        page
    }).collect()
}

pub fn build_report(params: &LcgParams, seed: i64, verdict: &PeriodVerdict, values: &[u32]) -> PdfDocument {
    let mut doc = PdfDocument::new();
    doc.push(cover_page(&cover_lines(params, seed, verdict, values.len())));
    for page in number_pages(values) { doc.push(page); }
    doc
}

pub fn save_pdf(path: &Path, params: &LcgParams, seed: i64, verdict: &PeriodVerdict, values: &[u32]) -> Result<()> {
    let doc = build_report(params, seed, verdict, values);
    doc.save(path)?;
    tracing::info!(path = %path.display(), pages = doc.len(), "wrote pdf");
    Ok(())
}

/// Console summary printed before the files are written.
pub fn summary_lines(params: &LcgParams, seed: i64, verdict: &PeriodVerdict, values: &[u32]) -> Vec<String> {
    let head: Vec<String> = values.iter().take(10).map(|v| v.to_string()).collect();
    vec![
        "=== Summary ===".to_string(),
        format!("Formula: {}", formula(params)),
        format!("Seed: {seed}"),
        format!("Theoretical period (if Hull-Dobell holds): {}", group_thousands(params.m)),
        format!("Full period?: {}", yes_no(verdict.full_period)),
        String::new(),
        format!("First 10 values: [{}]", head.join(", ")),
    ]
}

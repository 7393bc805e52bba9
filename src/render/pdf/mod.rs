// ABOUTME: Minimal PDF 1.3 writer for line-oriented text documents
// ABOUTME: A4 pages, core Type1 fonts, word-wrapped multi-line cells and automatic page breaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # PDF Writer
//!
//! Lays text out top to bottom on A4 portrait pages in the standard
//! Helvetica font, which every reader provides, so nothing is embedded.
//! Text must be representable in Latin-1.
//!
//! Coordinates are kept in millimetres from the top-left corner and converted
//! to PDF points (origin bottom-left) when content is written.

mod encoding;
mod fonts;

pub use encoding::{encode_latin1, escape_literal, UnencodableChar};

/// Points per millimetre
const SCALE: f64 = 72.0 / 25.4;
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
/// Left, top and right page margin
const PAGE_MARGIN_MM: f64 = 10.0;
/// Horizontal padding inside a cell
const CELL_PADDING_MM: f64 = 1.0;
const PRODUCER: &str = "maternal_diet_planner";

// Fixed object numbers; page objects follow in (page, contents) pairs
const CATALOG_OBJ: usize = 1;
const PAGES_OBJ: usize = 2;
const FONT_OBJ: usize = 3;
const RESOURCES_OBJ: usize = 4;
const INFO_OBJ: usize = 5;
const FIRST_PAGE_OBJ: usize = 6;

/// In-memory PDF document
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pages: Vec<Vec<u8>>,
    font_size_pt: f64,
    x: f64,
    y: f64,
    auto_page_break: bool,
    break_margin: f64,
    cell_count: usize,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Empty document with no pages, Helvetica 12 pt and page breaking off
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pages: Vec::new(),
            font_size_pt: 12.0,
            x: PAGE_MARGIN_MM,
            y: PAGE_MARGIN_MM,
            auto_page_break: false,
            break_margin: 0.0,
            cell_count: 0,
        }
    }

    /// Start a new page with the cursor at the top-left margin
    pub fn add_page(&mut self) {
        let mut content = b"2 J\n0.57 w\n".to_vec();
        content.extend_from_slice(self.font_operator().as_bytes());
        self.pages.push(content);
        self.x = PAGE_MARGIN_MM;
        self.y = PAGE_MARGIN_MM;
    }

    /// Break to a new page whenever a row would cross `margin_mm` above the bottom edge
    pub fn set_auto_page_break(&mut self, enabled: bool, margin_mm: f64) {
        self.auto_page_break = enabled;
        self.break_margin = margin_mm;
    }

    /// Font size in points for subsequent cells
    pub fn set_font_size(&mut self, size_pt: f64) {
        self.font_size_pt = size_pt;
        let operator = self.font_operator();
        if let Some(page) = self.pages.last_mut() {
            page.extend_from_slice(operator.as_bytes());
        }
    }

    /// Write `text` as one cell of rows `line_height_mm` tall, word-wrapped to
    /// `width_mm` (zero or less means up to the right margin), then move the
    /// cursor below it. Carriage returns are dropped.
    ///
    /// # Errors
    ///
    /// Returns the first character outside Latin-1; nothing is written then.
    pub fn multi_cell(
        &mut self,
        width_mm: f64,
        line_height_mm: f64,
        text: &str,
    ) -> Result<(), UnencodableChar> {
        let mut bytes = encode_latin1(text)?;
        bytes.retain(|&b| b != b'\r');
        if self.pages.is_empty() {
            self.add_page();
        }

        let width = if width_mm <= 0.0 {
            PAGE_WIDTH_MM - PAGE_MARGIN_MM - self.x
        } else {
            width_mm
        };
        let max_units = (width - 2.0 * CELL_PADDING_MM) * 1000.0 / self.font_size_mm();

        for row in wrap_rows(&bytes, max_units) {
            self.write_row(line_height_mm, row);
        }
        self.cell_count += 1;
        Ok(())
    }

    /// Number of cells written so far
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of pages
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document
    #[must_use]
    pub fn output(&self) -> Vec<u8> {
        let mut out: Vec<u8> = b"%PDF-1.3\n%\xE2\xE3\xCF\xD3\n".to_vec();
        let mut offsets: Vec<usize> = Vec::new();

        let kids: String = (0..self.pages.len())
            .map(|i| format!("{} 0 R ", FIRST_PAGE_OBJ + 2 * i))
            .collect();

        write_object(
            &mut out,
            &mut offsets,
            CATALOG_OBJ,
            format!("<< /Type /Catalog /Pages {PAGES_OBJ} 0 R >>").as_bytes(),
        );
        write_object(
            &mut out,
            &mut offsets,
            PAGES_OBJ,
            format!(
                "<< /Type /Pages /Kids [{kids}] /Count {} /MediaBox [0 0 {:.2} {:.2}] >>",
                self.pages.len(),
                PAGE_WIDTH_MM * SCALE,
                PAGE_HEIGHT_MM * SCALE
            )
            .as_bytes(),
        );
        write_object(
            &mut out,
            &mut offsets,
            FONT_OBJ,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                fonts::BASE_FONT
            )
            .as_bytes(),
        );
        write_object(
            &mut out,
            &mut offsets,
            RESOURCES_OBJ,
            format!("<< /ProcSet [/PDF /Text] /Font << /F1 {FONT_OBJ} 0 R >> >>").as_bytes(),
        );
        write_object(
            &mut out,
            &mut offsets,
            INFO_OBJ,
            format!("<< /Producer ({PRODUCER}) >>").as_bytes(),
        );

        for (i, content) in self.pages.iter().enumerate() {
            let page_obj = FIRST_PAGE_OBJ + 2 * i;
            write_object(
                &mut out,
                &mut offsets,
                page_obj,
                format!(
                    "<< /Type /Page /Parent {PAGES_OBJ} 0 R /Resources {RESOURCES_OBJ} 0 R /Contents {} 0 R >>",
                    page_obj + 1
                )
                .as_bytes(),
            );

            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            write_object(&mut out, &mut offsets, page_obj + 1, &stream);
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1).as_bytes());
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {CATALOG_OBJ} 0 R /Info {INFO_OBJ} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                offsets.len() + 1
            )
            .as_bytes(),
        );
        out
    }

    fn font_size_mm(&self) -> f64 {
        self.font_size_pt / SCALE
    }

    fn font_operator(&self) -> String {
        format!("BT /F1 {:.2} Tf ET\n", self.font_size_pt)
    }

    fn write_row(&mut self, height: f64, text: &[u8]) {
        if self.auto_page_break && self.y + height > PAGE_HEIGHT_MM - self.break_margin {
            self.add_page();
        }

        if !text.is_empty() {
            let x = (self.x + CELL_PADDING_MM) * SCALE;
            let y = (PAGE_HEIGHT_MM - (self.y + 0.5 * height + 0.3 * self.font_size_mm())) * SCALE;
            let mut op = format!("BT {x:.2} {y:.2} Td (").into_bytes();
            op.extend_from_slice(&escape_literal(text));
            op.extend_from_slice(b") Tj ET\n");
            if let Some(page) = self.pages.last_mut() {
                page.extend_from_slice(&op);
            }
        }

        self.x = PAGE_MARGIN_MM;
        self.y += height;
    }
}

fn write_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, number: usize, body: &[u8]) {
    debug_assert_eq!(offsets.len() + 1, number, "objects must be written in order");
    offsets.push(out.len());
    out.extend_from_slice(format!("{number} 0 obj\n").as_bytes());
    out.extend_from_slice(body);
    out.extend_from_slice(b"\nendobj\n");
}

/// Split encoded text into rows no wider than `max_units` (1/1000 em scaled by
/// font size), breaking after the last space when possible and mid-word otherwise.
/// Embedded newlines always end a row. Always yields at least one row, and
/// never an empty trailing row after a break.
fn wrap_rows(bytes: &[u8], max_units: f64) -> Vec<&[u8]> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let mut last_space: Option<usize> = None;
    let mut units: u32 = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            rows.push(&bytes[start..i]);
            i += 1;
            start = i;
            last_space = None;
            units = 0;
            continue;
        }
        if b == b' ' {
            last_space = Some(i);
        }
        units += u32::from(fonts::glyph_width(b));

        if f64::from(units) > max_units {
            if let Some(space) = last_space {
                rows.push(&bytes[start..space]);
                i = space + 1;
            } else {
                if i == start {
                    i += 1;
                }
                rows.push(&bytes[start..i]);
            }
            start = i;
            last_space = None;
            units = 0;
        } else {
            i += 1;
        }
    }

    if start < bytes.len() || rows.is_empty() {
        rows.push(&bytes[start..]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every digit is 556 units wide in Helvetica, a space 278
    const DIGIT: f64 = 556.0;
    const SPACE: f64 = 278.0;

    fn text_ops(doc: &PdfDocument) -> usize {
        let pdf = String::from_utf8_lossy(&doc.output()).into_owned();
        pdf.matches(") Tj ET").count()
    }

    #[test]
    fn test_short_lines_are_single_rows() {
        let rows = wrap_rows(b"Mon,Idli", 10_000.0);
        assert_eq!(rows, vec![b"Mon,Idli".as_slice()]);
        assert_eq!(wrap_rows(b"", 10.0), vec![b"".as_slice()]);
    }

    #[test]
    fn test_wrap_prefers_spaces() {
        let rows = wrap_rows(b"12 34 5678", 5.0 * DIGIT + SPACE);
        assert_eq!(rows, vec![b"12 34".as_slice(), b"5678".as_slice()]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let rows = wrap_rows(b"1234567", 5.0 * DIGIT);
        assert_eq!(rows, vec![b"12345".as_slice(), b"67".as_slice()]);
    }

    #[test]
    fn test_wrap_always_makes_progress() {
        let rows = wrap_rows(b"12", 10.0);
        assert_eq!(rows, vec![b"1".as_slice(), b"2".as_slice()]);
    }

    #[test]
    fn test_break_on_last_byte_adds_no_empty_row() {
        // The trailing space overflows and becomes the break point
        let rows = wrap_rows(b"123 ", 3.0 * DIGIT + 10.0);
        assert_eq!(rows, vec![b"123".as_slice()]);

        // One glyph too many on the final byte
        let rows = wrap_rows(b"1234", 3.0 * DIGIT);
        assert_eq!(rows, vec![b"123".as_slice(), b"4".as_slice()]);
    }

    #[test]
    fn test_trailing_newline_adds_no_empty_row() {
        assert_eq!(wrap_rows(b"12\n", 10_000.0), vec![b"12".as_slice()]);
        assert_eq!(
            wrap_rows(b"12\n\n34", 10_000.0),
            vec![b"12".as_slice(), b"".as_slice(), b"34".as_slice()]
        );
    }

    #[test]
    fn test_cell_height_matches_wrapped_rows() {
        let mut doc = PdfDocument::new();
        doc.add_page();
        doc.set_auto_page_break(true, 15.0);
        // 79 digits and an 'i' fill the 188 mm text width; the trailing space overflows
        let line = format!("{}i ", "0".repeat(79));
        // (297 - 15 - 10) / 10 = 27.2 rows fit on the first page
        for _ in 0..27 {
            doc.multi_cell(0.0, 10.0, &line).unwrap();
        }
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_carriage_returns_are_dropped() {
        let mut doc = PdfDocument::new();
        doc.multi_cell(0.0, 10.0, "Mon\rIdli\r").unwrap();
        let pdf = String::from_utf8_lossy(&doc.output()).into_owned();
        assert!(pdf.contains("(MonIdli) Tj"));
        assert!(!pdf.contains("\\r"));
    }

    #[test]
    fn test_output_structure() {
        let mut doc = PdfDocument::new();
        doc.add_page();
        doc.set_font_size(12.0);
        doc.multi_cell(0.0, 10.0, "Day (Mon)").unwrap();
        let pdf = String::from_utf8_lossy(&doc.output()).into_owned();
        assert!(pdf.starts_with("%PDF-1.3"));
        assert!(pdf.contains("/BaseFont /Helvetica"));
        assert_eq!(pdf.matches("/Type /Font").count(), 1);
        assert!(pdf.contains(r"(Day \(Mon\)) Tj"));
        assert!(pdf.contains("/Count 1"));
        assert!(pdf.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut doc = PdfDocument::new();
        doc.multi_cell(0.0, 10.0, "hello").unwrap();
        let bytes = doc.output();
        let marker = b"startxref\n";
        let tail_at = bytes
            .windows(marker.len())
            .rposition(|w| w == marker)
            .unwrap()
            + marker.len();
        let xref_at: usize = std::str::from_utf8(&bytes[tail_at..])
            .unwrap()
            .lines()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!(bytes[xref_at..].starts_with(b"xref"));
        let xref = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        let first_entry = xref.lines().nth(3).unwrap();
        let offset: usize = first_entry[..10].parse().unwrap();
        assert!(bytes[offset..].starts_with(b"1 0 obj"));
    }

    #[test]
    fn test_auto_page_break_adds_pages() {
        let mut doc = PdfDocument::new();
        doc.add_page();
        doc.set_auto_page_break(true, 15.0);
        for i in 0..30 {
            doc.multi_cell(0.0, 10.0, &format!("row {i}")).unwrap();
        }
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.cell_count(), 30);
        assert_eq!(text_ops(&doc), 30);
    }

    #[test]
    fn test_without_auto_break_stays_on_one_page() {
        let mut doc = PdfDocument::new();
        doc.add_page();
        for _ in 0..40 {
            doc.multi_cell(0.0, 10.0, "row").unwrap();
        }
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_unencodable_text_writes_nothing() {
        let mut doc = PdfDocument::new();
        doc.add_page();
        let err = doc.multi_cell(0.0, 10.0, "Ragi ✓").unwrap_err();
        assert_eq!(err.ch, '✓');
        assert_eq!(doc.cell_count(), 0);
        assert_eq!(text_ops(&doc), 0);
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        let pdf = String::from_utf8_lossy(&PdfDocument::new().output()).into_owned();
        assert!(pdf.contains("/Count 0"));
        assert!(pdf.contains("/Producer (maternal_diet_planner)"));
    }
}

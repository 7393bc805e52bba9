// ABOUTME: Response renderer producing on-screen markup and the downloadable plan document
// ABOUTME: Both outputs are pure functions of the generated text; nothing is cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Renderer
//!
//! The generated plan is trusted to be roughly tabular markdown and is shown
//! as-is. For download it is split into lines and each line becomes one
//! word-wrapped cell of an A4 PDF.

pub mod pdf;

use tracing::debug;

use crate::constants::export::{FONT_SIZE_PT, LINE_HEIGHT_MM, PAGE_BREAK_MARGIN_MM, PDF_MIME_TYPE};
use crate::errors::{AppError, AppResult};
use crate::intake::Stage;
use pdf::PdfDocument;

/// A rendered plan ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    /// Suggested file name
    pub filename: &'static str,
    /// MIME type
    pub mime_type: &'static str,
    /// Document bytes
    pub bytes: Vec<u8>,
    /// Number of text lines written
    pub line_count: usize,
}

/// Markup handed to the page; the response is shown without transformation
#[must_use]
pub const fn screen_markup(response_text: &str) -> &str {
    response_text
}

/// Split the response on line breaks. Empty text has no lines.
///
/// Carriage returns stay in the lines; the document writer drops them.
#[must_use]
pub fn split_lines(response_text: &str) -> Vec<&str> {
    if response_text.is_empty() {
        return Vec::new();
    }
    response_text.split('\n').collect()
}

/// Lay the response out as a PDF, one cell per line
///
/// # Errors
///
/// Returns `DocumentEncoding` when a line contains a character outside Latin-1.
pub fn build_document(response_text: &str) -> AppResult<PdfDocument> {
    let mut document = PdfDocument::new();
    document.add_page();
    document.set_auto_page_break(true, PAGE_BREAK_MARGIN_MM);
    document.set_font_size(FONT_SIZE_PT);

    for (index, line) in split_lines(response_text).into_iter().enumerate() {
        document
            .multi_cell(0.0, LINE_HEIGHT_MM, line)
            .map_err(|e| AppError::encoding(format!("line {}: {e}", index + 1)).with_source(e))?;
    }

    Ok(document)
}

/// Export the response as the stage's downloadable document
///
/// # Errors
///
/// Returns `DocumentEncoding` when the text cannot be encoded for the document.
pub fn export_document(stage: Stage, response_text: &str) -> AppResult<PlanDocument> {
    let document = build_document(response_text)?;
    let bytes = document.output();

    debug!(
        stage = %stage,
        lines = document.cell_count(),
        pages = document.page_count(),
        bytes = bytes.len(),
        "Exported plan document"
    );

    Ok(PlanDocument {
        filename: stage.document_filename(),
        mime_type: PDF_MIME_TYPE,
        bytes,
        line_count: document.cell_count(),
    })
}

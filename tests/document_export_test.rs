// ABOUTME: Integration tests for the plan document export
// ABOUTME: Checks line-per-cell layout, empty text, page breaks, file names and encoding failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use maternal_diet_planner::errors::ErrorCode;
use maternal_diet_planner::intake::Stage;
use maternal_diet_planner::render::{build_document, export_document, screen_markup, split_lines};

fn position(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    position(haystack, needle).is_some()
}

fn text_ops(pdf: &[u8]) -> usize {
    let marker = b") Tj ET";
    pdf.windows(marker.len()).filter(|window| window == marker).count()
}

#[test]
fn test_two_lines_become_two_cells_in_order() {
    let document = build_document("Day,Meal\nMon,Idli").unwrap();
    assert_eq!(document.cell_count(), 2);

    let bytes = document.output();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(text_ops(&bytes), 2);
    let day = position(&bytes, b"(Day,Meal) Tj").unwrap();
    let mon = position(&bytes, b"(Mon,Idli) Tj").unwrap();
    assert!(day < mon);
}

#[test]
fn test_cell_count_matches_line_segments() {
    let texts = [
        "single",
        "a\nb\nc",
        "trailing\n",
        "\n\n\n",
        "| Day | Breakfast |\r\n|---|---|\r\n| Mon | Poha |",
    ];
    for text in texts {
        let document = build_document(text).unwrap();
        let segments = split_lines(text);
        assert_eq!(segments.len(), text.split('\n').count(), "{text:?}");
        assert_eq!(document.cell_count(), segments.len(), "{text:?}");

        // Blank lines advance the cursor without drawing text
        let drawn = segments.iter().filter(|line| !line.trim_matches('\r').is_empty()).count();
        assert_eq!(text_ops(&document.output()), drawn, "{text:?}");
    }
}

#[test]
fn test_empty_text_is_a_valid_empty_document() {
    let exported = export_document(Stage::Pregnancy, "").unwrap();
    assert_eq!(exported.line_count, 0);
    assert!(exported.bytes.starts_with(b"%PDF-"));
    assert!(exported.bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn test_filenames_and_mime_per_stage() {
    let pregnancy = export_document(Stage::Pregnancy, "Mon").unwrap();
    let postpartum = export_document(Stage::Postpartum, "Mon").unwrap();

    assert_eq!(pregnancy.filename, "pregnancy_diet_plan.pdf");
    assert_eq!(postpartum.filename, "postpartum_diet_plan.pdf");
    assert_eq!(pregnancy.mime_type, "application/pdf");
    assert_eq!(pregnancy.bytes, postpartum.bytes);
}

#[test]
fn test_long_plan_spills_onto_more_pages() {
    let row = "| Mon | Poha with peanuts | Dal, rice and sabzi | Paneer roti | Fruit | Iron, folate | Energy |";
    let text = vec![row; 80].join("\n");
    let document = build_document(&text).unwrap();

    assert_eq!(document.cell_count(), 80);
    assert!(document.page_count() > 1);
}

#[test]
fn test_latin1_accents_are_accepted() {
    let exported = export_document(Stage::Postpartum, "Café au lait, jalapeño, crème").unwrap();
    assert!(contains(&exported.bytes, b"Caf\xE9"));
}

#[test]
fn test_non_latin1_text_fails_export_but_not_markup() {
    let text = "Day,Meal\nMon,Idli 🥣";
    let err = export_document(Stage::Pregnancy, text).unwrap_err();

    assert_eq!(err.code, ErrorCode::DocumentEncoding);
    assert_eq!(err.http_status(), 422);
    assert!(err.message.starts_with("line 2:"), "{}", err.message);
    assert_eq!(screen_markup(text), text);
}

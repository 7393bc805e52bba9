// ABOUTME: Prompt builder turning a collected form record into the diet plan instruction
// ABOUTME: Stage templates are loaded at compile time and filled in a single pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Prompts
//!
//! Each stage has a markdown template with `{field_name}` placeholders. The
//! template asks for a seven-row (Monday to Sunday) table with a fixed column
//! set and lists every form field in a `Context:` block. Values are inserted
//! verbatim without escaping; text inside a value is never re-expanded.

use crate::intake::{FormRecord, Stage};

/// Pregnancy plan instruction template
pub const PREGNANCY_TEMPLATE: &str = include_str!("templates/pregnancy.md");

/// Postpartum plan instruction template
pub const POSTPARTUM_TEMPLATE: &str = include_str!("templates/postpartum.md");

/// Columns every plan table is asked to contain, in order
pub const PLAN_COLUMNS: [&str; 7] = [
    "Day",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Optional Snack",
    "Nutritional Benefit",
    "Mother's Benefit",
];

/// Template for a stage
#[must_use]
pub const fn template_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Pregnancy => PREGNANCY_TEMPLATE,
        Stage::Postpartum => POSTPARTUM_TEMPLATE,
    }
}

/// Render the instruction sent to the generation service
///
/// Deterministic: the same record always yields the same string.
#[must_use]
pub fn build_prompt(record: &FormRecord) -> String {
    fill_placeholders(template_for(record.stage()), &record.entries())
}

/// Replace `{name}` with the matching value; unknown placeholders stay as written
fn fill_placeholders(template: &str, values: &[(&'static str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, close))
        });

        if let Some((value, close)) = replacement {
            out.push_str(value);
            rest = &after[close + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

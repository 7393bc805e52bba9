// ABOUTME: Server-rendered HTML pages: the stage form, the generated plan and the error view
// ABOUTME: Field values are escaped; the generated plan is rendered from markdown with inline HTML kept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pages
//!
//! Every page shares one layout: a sidebar holding the stage selector and the
//! form for the active stage, and a main panel that is empty, shows a plan,
//! or shows an error. The form is refilled from the submitted record so a
//! user can tweak a value and regenerate.
//!
//! The plan comes back as markdown, usually a weekly table, and may carry
//! inline HTML. It is rendered with tables enabled and HTML passed through.

use std::fmt::Write as _;

use base64::{engine::general_purpose, Engine as _};
use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, Options, Parser};

use crate::errors::AppError;
use crate::intake::{FieldControl, FieldSpec, FormRecord, Stage, STAGE_FIELD};
use crate::render::PlanDocument;

const PAGE_TITLE: &str = "🤱 Personalized Diet Planner for Women";

const BASE_STYLE: &str = r"
        body { margin: 0; font-family: 'Segoe UI', Arial, sans-serif; color: #333; }
        .app { display: flex; min-height: 100vh; }
        .sidebar { width: 320px; padding: 24px; background: rgba(250, 240, 235, 0.92); }
        .stages a { margin-right: 12px; color: #7a4b3a; }
        .stages a[aria-current] { font-weight: bold; text-decoration: none; }
        .field { margin-bottom: 14px; }
        .field label { display: block; margin-bottom: 4px; font-weight: 600; }
        .field input, .field select { width: 100%; padding: 6px; box-sizing: border-box; }
        button { background: #b5654a; color: #fff; border: none; padding: 10px 18px; border-radius: 6px; cursor: pointer; }
        .block-container { flex: 1; margin: 2rem; padding: 2rem 3rem; border-radius: 18px; background-color: rgba(255, 248, 243, 0.45); box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
        h1, h2, h3, h4, h5, h6 { color: #4B4B4B; }
        .plan table { border-collapse: collapse; width: 100%; margin: 12px 0; }
        .plan th, .plan td { border: 1px solid #d9c3b8; padding: 6px 8px; text-align: left; vertical-align: top; }
        .plan th { background: rgba(181, 101, 74, 0.12); }
        .export-buttons { margin-top: 20px; }
        .error { color: #8a1f11; background: #fde8e4; padding: 15px; border-radius: 6px; }
";

/// Outcome of the export step shown under the plan
pub type ExportOutcome<'a> = Result<&'a PlanDocument, &'a AppError>;

/// Empty form for `stage`
#[must_use]
pub fn form_page(stage: Stage, background: Option<&str>) -> String {
    let record = FormRecord::initial(stage);
    layout(background, &sidebar(&record), "")
}

/// Form refilled from `record` with the generated plan beside it
#[must_use]
pub fn plan_page(
    record: &FormRecord,
    markup: &str,
    export: ExportOutcome<'_>,
    background: Option<&str>,
) -> String {
    let stage = record.stage();
    let mut main = format!(
        "<h2>📝 Your {} Diet Plan (Weekly)</h2>\n<div class=\"plan\">\n{}</div>\n",
        stage.label(),
        markup_html(markup)
    );

    match export {
        Ok(document) => {
            let _ = write!(
                main,
                "<div class=\"export-buttons\"><a class=\"download\" href=\"data:{};base64,{}\" download=\"{}\">📥 Download as PDF</a></div>\n",
                document.mime_type,
                general_purpose::STANDARD.encode(&document.bytes),
                document.filename
            );
        }
        Err(e) => {
            let _ = write!(
                main,
                "<div class=\"export-buttons error\">PDF export unavailable: {}</div>\n",
                encode_text(&e.message)
            );
        }
    }

    layout(background, &sidebar(record), &main)
}

/// Form refilled from `record` with an error message in place of a plan
#[must_use]
pub fn error_page(record: &FormRecord, message: &str, background: Option<&str>) -> String {
    let main = format!(
        "<div class=\"error\"><strong>Could not generate a plan.</strong> {}</div>\n",
        encode_text(message)
    );
    layout(background, &sidebar(record), &main)
}

/// Render plan markdown to HTML; inline HTML in the plan is kept as written
fn markup_html(markup: &str) -> String {
    let parser = Parser::new_ext(markup, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markup.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn layout(background: Option<&str>, sidebar: &str, main: &str) -> String {
    let background_style = background.map_or_else(String::new, |uri| {
        format!(
            "        .app {{ background: linear-gradient(rgba(255, 255, 255, 0.35), rgba(255, 255, 255, 0.85)), url(\"{uri}\"); background-size: cover; background-position: center; background-repeat: no-repeat; background-attachment: fixed; }}\n"
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Diet Planner</title>
    <style>{BASE_STYLE}{background_style}    </style>
</head>
<body>
<div class="app">
{sidebar}<main class="block-container">
<h1>{PAGE_TITLE}</h1>
{main}</main>
</div>
</body>
</html>
"#
    )
}

const fn sidebar_heading(stage: Stage) -> &'static str {
    match stage {
        Stage::Pregnancy => "🤰 Pregnancy Information",
        Stage::Postpartum => "🤱 Postpartum Information",
    }
}

fn sidebar(record: &FormRecord) -> String {
    let stage = record.stage();
    let mut html = String::from("<aside class=\"sidebar\">\n<p>Select your stage:</p>\n<nav class=\"stages\">");
    for candidate in Stage::ALL {
        let current = if candidate == stage {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            html,
            "<a href=\"/?stage={}\"{current}>{}</a>",
            candidate.as_str(),
            candidate.label()
        );
    }
    let _ = write!(
        html,
        "</nav>\n<h3>{}</h3>\n<form method=\"post\" action=\"/plan\">\n<input type=\"hidden\" name=\"{STAGE_FIELD}\" value=\"{}\">\n",
        sidebar_heading(stage),
        stage.as_str()
    );

    for field in stage.fields() {
        let value = record.value_of(field.name).unwrap_or_default();
        html.push_str(&field_html(field, &value));
    }

    html.push_str("<button type=\"submit\">Generate Diet Plan</button>\n</form>\n</aside>\n");
    html
}

fn field_html(field: &FieldSpec, value: &str) -> String {
    let name = field.name;
    let label = encode_text(field.label);
    let control = match field.control {
        FieldControl::Text => format!(
            "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\">",
            encode_double_quoted_attribute(value)
        ),
        FieldControl::Select(options) => {
            let mut select = format!("<select id=\"{name}\" name=\"{name}\">");
            for option in options {
                let selected = if *option == value { " selected" } else { "" };
                let option = encode_double_quoted_attribute(option);
                let _ = write!(select, "<option value=\"{option}\"{selected}>{option}</option>");
            }
            select.push_str("</select>");
            select
        }
        FieldControl::Slider { min, max, .. } => format!(
            "<input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" value=\"{}\" oninput=\"this.nextElementSibling.value = this.value\"><output>{}</output>",
            encode_double_quoted_attribute(value),
            encode_text(value)
        ),
    };

    format!("<div class=\"field\"><label for=\"{name}\">{label}</label>{control}</div>\n")
}

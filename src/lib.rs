// ABOUTME: Main library entry point for the maternal diet planner service
// ABOUTME: Form intake, prompt building, remote generation and plan rendering behind an axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Maternal Diet Planner
//!
//! A small web service that turns a pregnancy or postpartum questionnaire
//! into a weekly Indian-style meal plan generated by Google Gemini, shown
//! on the page and offered as a PDF download.
//!
//! ## Pipeline
//!
//! - **Intake**: typed form records for the two stages
//! - **Planner**: deterministic prompt building and a single remote completion
//! - **Render**: markup passthrough and a line-per-cell A4 PDF
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use maternal_diet_planner::intake::{FormRecord, Stage};
//! use maternal_diet_planner::planner::build_prompt;
//!
//! let record = FormRecord::initial(Stage::Postpartum);
//! let prompt = build_prompt(&record);
//! assert!(prompt.contains("Water intake: 8 glasses/day"));
//! ```

/// Optional page background image lookup
pub mod assets;

/// Environment-driven configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// Form stages, field descriptors and typed records
pub mod intake;

/// Remote text generation providers
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Request correlation middleware
pub mod middleware;

/// Prompt building and generation cycle
pub mod planner;

/// Markup passthrough and PDF export
pub mod render;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// HTML page rendering
pub mod web;

// ABOUTME: JSON API for plan generation, prompt preview and direct document export
// ABOUTME: Accepts stage-tagged form records; returns markup plus a base64 PDF or the export error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan API routes
//!
//! Request bodies use the same record shape as the HTML form, tagged by
//! `stage`. Malformed bodies are reported with the standard error envelope.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Span};

use crate::errors::{AppError, AppResult};
use crate::intake::{FormRecord, Stage};
use crate::planner::build_prompt;
use crate::render::{self, PlanDocument};
use crate::resources::ServerResources;

/// Downloadable document in a JSON body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentPayload {
    /// Suggested file name
    pub filename: String,
    /// MIME type
    pub mime_type: String,
    /// Base64 of the document bytes
    pub data_base64: String,
}

impl From<&PlanDocument> for DocumentPayload {
    fn from(document: &PlanDocument) -> Self {
        Self {
            filename: document.filename.to_owned(),
            mime_type: document.mime_type.to_owned(),
            data_base64: general_purpose::STANDARD.encode(&document.bytes),
        }
    }
}

/// Response for `POST /api/plans`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanResponse {
    /// Stage the plan was generated for
    pub stage: Stage,
    /// Generated text, unchanged
    pub markup: String,
    /// PDF rendition; `null` when export failed
    pub document: Option<DocumentPayload>,
    /// Why the export failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_error: Option<String>,
}

/// Response for `POST /api/plans/prompt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptResponse {
    /// Stage of the record
    pub stage: Stage,
    /// Instruction that would be sent
    pub prompt: String,
}

/// Request for `POST /api/plans/document`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Stage, selects the file name
    #[serde(default)]
    pub stage: Stage,
    /// Text to lay out
    pub text: String,
}

/// Plan API routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan API routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans", post(Self::handle_generate))
            .route("/api/plans/prompt", post(Self::handle_prompt))
            .route("/api/plans/document", post(Self::handle_document))
            .with_state(resources)
    }

    fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
        payload
            .map(|Json(value)| value)
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<FormRecord>, JsonRejection>,
    ) -> AppResult<Json<PlanResponse>> {
        let record = Self::body(payload)?;
        Span::current().record("stage", record.stage().as_str());

        let plan = resources.planner.generate(&record).await?;

        let (document, export_error) = match plan.document() {
            Ok(document) => (Some(DocumentPayload::from(&document)), None),
            Err(e) => {
                warn!(error = %e, "Plan returned without PDF export");
                (None, Some(e.message))
            }
        };

        Ok(Json(PlanResponse {
            stage: plan.stage,
            markup: plan.markup().to_owned(),
            document,
            export_error,
        }))
    }

    async fn handle_prompt(
        payload: Result<Json<FormRecord>, JsonRejection>,
    ) -> AppResult<Json<PromptResponse>> {
        let record = Self::body(payload)?;
        Ok(Json(PromptResponse {
            stage: record.stage(),
            prompt: build_prompt(&record),
        }))
    }

    async fn handle_document(
        payload: Result<Json<DocumentRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = Self::body(payload)?;
        Span::current().record("stage", request.stage.as_str());

        let document = render::export_document(request.stage, &request.text)?;
        info!(
            stage = %request.stage,
            lines = document.line_count,
            bytes = document.bytes.len(),
            "Exported plan document"
        );

        Ok((
            [
                (header::CONTENT_TYPE, document.mime_type.to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", document.filename),
                ),
            ],
            document.bytes,
        )
            .into_response())
    }
}

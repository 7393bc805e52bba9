// ABOUTME: Browser-facing planner routes: the stage form and form-post plan generation
// ABOUTME: Renders HTML pages; generation failures become an error page, export failures a notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner page routes
//!
//! `GET /` shows the form for the selected stage. `POST /plan` runs one
//! generation cycle for the submitted form and shows the plan next to the
//! refilled form.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{warn, Span};

use crate::errors::AppError;
use crate::intake::{FormRecord, RawSubmission, Stage};
use crate::resources::ServerResources;
use crate::web;

/// Message shown when the remote service could not produce a plan
const GENERATION_FAILED: &str = "The diet plan service is unavailable right now. Please try again.";

/// Query string for the form page
#[derive(Debug, Default, Deserialize)]
pub struct StageQuery {
    /// Stage identifier; defaults to pregnancy
    pub stage: Option<String>,
}

/// Planner page routes handler
pub struct PlannerRoutes;

impl PlannerRoutes {
    /// Create the form and form-post routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_form))
            .route("/plan", post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_form(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<StageQuery>,
    ) -> Result<Html<String>, AppError> {
        let stage = query
            .stage
            .as_deref()
            .map(Stage::from_str)
            .transpose()?
            .unwrap_or_default();
        Span::current().record("stage", stage.as_str());

        let background = resources.background_data_uri();
        Ok(Html(web::form_page(stage, background.as_deref())))
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Form(fields): Form<RawSubmission>,
    ) -> Response {
        let background = resources.background_data_uri();

        let record = match FormRecord::from_fields(&fields) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Rejected planner form submission");
                let stage = fields
                    .get(crate::intake::STAGE_FIELD)
                    .and_then(|s| Stage::from_str(s).ok())
                    .unwrap_or_default();
                let page = web::error_page(
                    &FormRecord::initial(stage),
                    &e.message,
                    background.as_deref(),
                );
                return (StatusCode::BAD_REQUEST, Html(page)).into_response();
            }
        };
        Span::current().record("stage", record.stage().as_str());

        let plan = match resources.planner.generate(&record).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!(code = ?e.code, error = %e, "Diet plan generation failed");
                let status =
                    StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);
                let page = web::error_page(&record, GENERATION_FAILED, background.as_deref());
                return (status, Html(page)).into_response();
            }
        };

        let document = plan.document();
        if let Err(e) = &document {
            warn!(code = ?e.code, error = %e, "Plan shown without PDF export");
        }

        let page = web::plan_page(
            &record,
            plan.markup(),
            document.as_ref(),
            background.as_deref(),
        );
        Html(page).into_response()
    }
}

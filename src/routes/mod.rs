// ABOUTME: Route module organization for the diet planner HTTP endpoints
// ABOUTME: Assembles page, API and health routes behind request-id and tracing middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the diet planner server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the planner and renderer.

/// Health check and readiness routes
pub mod health;
/// HTML form and plan pages
pub mod planner;
/// JSON plan API
pub mod plans;

pub use health::HealthRoutes;
pub use planner::PlannerRoutes;
pub use plans::{DocumentPayload, DocumentRequest, PlanResponse, PlanRoutes, PromptResponse};

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, middleware, response::Response, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

use crate::middleware::{create_request_span, request_id_middleware};
use crate::resources::ServerResources;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(PlannerRoutes::routes(Arc::clone(&resources)))
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    create_request_span(request.method().as_str(), request.uri().path())
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    span.record(
                        "duration_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    info!("request completed");
                }),
        )
}

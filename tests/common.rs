// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted LLM provider and router construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `maternal_diet_planner`

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use axum::Router;
use maternal_diet_planner::{
    errors::AppError,
    intake::{FormRecord, RawSubmission, Stage},
    llm::{ChatRequest, ChatResponse, LlmProvider, TokenUsage},
    planner::DietPlanner,
    resources::ServerResources,
    routes,
};

static INIT_LOGGER: Once = Once::new();

/// Model name the scripted provider reports
pub const TEST_MODEL: &str = "scripted-model";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider double that answers every completion with a fixed outcome and
/// remembers the requests it received
pub struct ScriptedProvider {
    outcome: Result<String, AppError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Always reply with `text`
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always fail with `error`
    pub fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the single user message of every request, in order
    pub fn prompts(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| {
                assert_eq!(request.messages.len(), 1, "one message per generation");
                request.messages[0].content.clone()
            })
            .collect()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        TEST_MODEL
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(text) => Ok(ChatResponse {
                content: text.clone(),
                model: request.model.clone().unwrap_or_else(|| TEST_MODEL.to_owned()),
                usage: Some(TokenUsage {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                    total_tokens: 30,
                }),
                finish_reason: Some("STOP".to_owned()),
            }),
            Err(e) => Err(AppError::new(e.code, e.message.clone())),
        }
    }
}

/// Planner backed by `provider`
pub fn planner_with(provider: Arc<ScriptedProvider>) -> DietPlanner {
    DietPlanner::new(provider, TEST_MODEL)
}

/// Full application router backed by `provider`
pub fn router_with(provider: Arc<ScriptedProvider>) -> Router {
    init_test_logging();
    let resources = ServerResources::new(planner_with(provider));
    routes::router(Arc::new(resources))
}

/// Raw form values, as a browser would submit them
pub fn submission(pairs: &[(&str, &str)]) -> RawSubmission {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// Pregnancy record used across scenario tests
pub fn second_trimester_vegetarian() -> FormRecord {
    FormRecord::from_submission(
        Stage::Pregnancy,
        &submission(&[
            ("allergies", "peanuts"),
            ("diet_type", "Vegetarian"),
            ("intolerances", "lactose"),
            ("trimester", "2"),
            ("weight_before", "55"),
            ("current_weight", "60"),
            ("activity_level", "Light"),
            ("water_intake", "8"),
            ("goal", "healthy baby"),
        ]),
    )
    .unwrap()
}

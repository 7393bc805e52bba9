// ABOUTME: Diet plan generation: prompt building plus a single remote completion per request
// ABOUTME: Holds the provider and model chosen at startup; carries no per-request state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner
//!
//! [`DietPlanner::generate`] is one generation cycle: build the prompt for
//! the submitted record, send it to the provider once, and hand back the raw
//! text. Failures from the provider abort the cycle unchanged; there is no
//! retry and no partial result.

pub mod prompt;

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};

use crate::errors::AppResult;
use crate::intake::{FormRecord, Stage};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::render::{self, PlanDocument};

pub use prompt::build_prompt;

/// Result of one generation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    /// Stage the plan was generated for
    pub stage: Stage,
    /// Instruction that was sent
    pub prompt: String,
    /// Text returned by the service, untouched
    pub response_text: String,
}

impl GeneratedPlan {
    /// Markup for on-screen display
    #[must_use]
    pub fn markup(&self) -> &str {
        render::screen_markup(&self.response_text)
    }

    /// Downloadable document for this plan
    ///
    /// # Errors
    ///
    /// Returns `DocumentEncoding` when the text cannot be encoded.
    pub fn document(&self) -> AppResult<PlanDocument> {
        render::export_document(self.stage, &self.response_text)
    }
}

/// Sends plan prompts to the configured provider
#[derive(Clone)]
pub struct DietPlanner {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl DietPlanner {
    /// Create a planner using `model` on `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Model identifier sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Provider backing this planner
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Run one generation cycle for `record`
    ///
    /// # Errors
    ///
    /// Propagates any provider failure (network, credential, quota, malformed reply).
    #[instrument(skip(self, record), fields(stage = %record.stage(), model = %self.model))]
    pub async fn generate(&self, record: &FormRecord) -> AppResult<GeneratedPlan> {
        let prompt = build_prompt(record);
        let request = ChatRequest::new(vec![ChatMessage::user(prompt.clone())])
            .with_model(self.model.clone());

        let started = Instant::now();
        let response = self.provider.complete(&request).await?;

        info!(
            provider = self.provider.name(),
            prompt_chars = prompt.len(),
            response_chars = response.content.len(),
            total_tokens = response.usage.map(|u| u.total_tokens),
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Diet plan generated"
        );

        Ok(GeneratedPlan {
            stage: record.stage(),
            prompt,
            response_text: response.content,
        })
    }
}

impl std::fmt::Debug for DietPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DietPlanner")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .finish()
    }
}

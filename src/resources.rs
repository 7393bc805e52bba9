// ABOUTME: Shared state handed to every route: the planner and the optional background image
// ABOUTME: Built once at startup; requests only read from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Container for the long-lived pieces the handlers share. Nothing here is
//! mutated after construction, so every request cycle is independent.

use std::sync::Arc;

use crate::assets::BackgroundImage;
use crate::planner::DietPlanner;

/// Resources shared across request handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Plan generator bound to the configured provider and model
    pub planner: Arc<DietPlanner>,
    /// Page background, if one was found at startup
    pub background: Option<Arc<BackgroundImage>>,
}

impl ServerResources {
    /// Create resources around a planner
    #[must_use]
    pub fn new(planner: DietPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
            background: None,
        }
    }

    /// Attach the page background
    #[must_use]
    pub fn with_background(mut self, background: Option<BackgroundImage>) -> Self {
        self.background = background.map(Arc::new);
        self
    }

    /// Background as a CSS-ready `data:` URI
    #[must_use]
    pub fn background_data_uri(&self) -> Option<String> {
        self.background.as_deref().map(BackgroundImage::data_uri)
    }
}

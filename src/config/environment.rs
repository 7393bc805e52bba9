// ABOUTME: Environment configuration for the diet planner server, read once at startup
// ABOUTME: Gemini credential and model, bind address, assets directory and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is built once in the binary and passed to the components
//! that need it; nothing reads the environment after startup.

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{defaults, env_vars};

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Remote generation service settings
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    /// API credential
    pub api_key: String,
    /// Model identifier used for every request
    pub model: String,
    /// API root
    pub base_url: String,
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Generation service settings
    pub gemini: GeminiSettings,
    /// Directory searched for the optional background image
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is missing or blank, or if
    /// `HTTP_PORT` is not a valid port number.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var(env_vars::GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{} environment variable not set", env_vars::GEMINI_API_KEY))?;

        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {port}", env_vars::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let config = Self {
            http_host: env_var_or(env_vars::HTTP_HOST, defaults::HTTP_HOST),
            http_port,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            gemini: GeminiSettings {
                api_key,
                model: env_var_or(env_vars::GEMINI_MODEL, defaults::GEMINI_MODEL),
                base_url: env_var_or(env_vars::GEMINI_BASE_URL, defaults::GEMINI_BASE_URL),
            },
            assets_dir: PathBuf::from(env_var_or(env_vars::ASSETS_DIR, defaults::ASSETS_DIR)),
        };

        Ok(config)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// One-line description safe for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Diet Planner Configuration: bind={} environment={} model={} assets={} api_key=[REDACTED]",
            self.bind_address(),
            self.environment,
            self.gemini.model,
            self.assets_dir.display()
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

// ABOUTME: Configuration module root
// ABOUTME: Re-exports the environment-driven server configuration

//! Configuration management

/// Environment variable parsing into typed configuration
pub mod environment;

pub use environment::{Environment, GeminiSettings, ServerConfig};

// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates defaults, overrides, the required API key and secret redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use maternal_diet_planner::config::environment::{Environment, ServerConfig};
use maternal_diet_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const CONFIG_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_BASE_URL",
    "HTTP_HOST",
    "HTTP_PORT",
    "ASSETS_DIR",
    "ENVIRONMENT",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_defaults_with_only_api_key() {
    clear_config_env();
    env::set_var("GEMINI_API_KEY", "abc123");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.gemini.api_key, "abc123");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(
        config.gemini.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.assets_dir, PathBuf::from("."));
    assert_eq!(config.environment, Environment::Development);

    clear_config_env();
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_config_env();
    env::set_var("GEMINI_API_KEY", "abc123");
    env::set_var("GEMINI_MODEL", "gemini-1.5-pro");
    env::set_var("HTTP_HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ASSETS_DIR", "/srv/planner");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert_eq!(config.assets_dir, PathBuf::from("/srv/planner"));
    assert!(config.environment.is_production());

    clear_config_env();
}

#[test]
#[serial]
fn test_missing_or_blank_api_key_fails() {
    clear_config_env();
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    env::set_var("GEMINI_API_KEY", "   ");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_port_fails() {
    clear_config_env();
    env::set_var("GEMINI_API_KEY", "abc123");
    env::set_var("HTTP_PORT", "eighty");

    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("HTTP_PORT"));

    clear_config_env();
}

#[test]
#[serial]
fn test_blank_optional_values_fall_back_to_defaults() {
    clear_config_env();
    env::set_var("GEMINI_API_KEY", "abc123");
    env::set_var("GEMINI_MODEL", "");
    env::set_var("HTTP_HOST", " ");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.http_host, "0.0.0.0");

    clear_config_env();
}

#[test]
#[serial]
fn test_api_key_never_printed() {
    clear_config_env();
    env::set_var("GEMINI_API_KEY", "super-secret-value");

    let config = ServerConfig::from_env().unwrap();
    assert!(!config.summary().contains("super-secret-value"));
    assert!(!format!("{config:?}").contains("super-secret-value"));
    assert!(config.summary().contains("model=gemini-2.0-flash"));

    clear_config_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "planner-test");
    env::remove_var("ENVIRONMENT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "planner-test");
    assert!(!config.include_location || env::var("LOG_INCLUDE_LOCATION").is_ok());

    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);
    assert_eq!(
        LoggingConfig::default().service_name,
        "diet-planner-server"
    );
}

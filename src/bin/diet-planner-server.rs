// ABOUTME: Server binary for the maternal diet planner web application
// ABOUTME: Loads configuration, wires the Gemini provider into the planner and serves the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner Server Binary
//!
//! Starts the HTTP server exposing the planner form, the JSON plan API and
//! the health endpoints.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use maternal_diet_planner::{
    assets,
    config::ServerConfig,
    llm::GeminiProvider,
    logging,
    planner::DietPlanner,
    resources::ServerResources,
    routes,
};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "diet-planner-server")]
#[command(about = "Personalized pregnancy and postpartum diet planner")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }

    logging::init_from_env()?;

    info!("Starting Diet Planner Server");
    info!("{}", config.summary());

    let provider = GeminiProvider::new(config.gemini.api_key.clone())
        .with_default_model(config.gemini.model.clone())
        .with_base_url(config.gemini.base_url.clone());
    let planner = DietPlanner::new(Arc::new(provider), config.gemini.model.clone());

    let background = assets::load_background(&config.assets_dir);
    let resources = Arc::new(ServerResources::new(planner).with_background(background));
    let app = routes::router(resources);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on http://{address}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shut down");
    Ok(())
}

/// Wait for Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

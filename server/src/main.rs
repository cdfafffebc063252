#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "nightblog failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind { addr: config.addr, source })?;

    tracing::info!(
        addr = %config.addr,
        api_base = %config.client.api_base,
        auth_url = %config.client.auth_url,
        "nightblog listening"
    );
    axum::serve(listener, app).await.map_err(HostError::Serve)
}

mod config;
mod error;
mod gateway;
mod handlers;
mod metrics;
mod models;
mod prompt;
mod provider;
mod resolver;
mod state;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Args;
use crate::gateway::CompletionGateway;
use crate::provider::GroqProvider;
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        tracing::error!("server terminated with error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // a missing .env is fine, real environment variables still apply
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    args.validate().context("invalid configuration")?;

    let client = reqwest::Client::builder()
        .timeout(args.timeout())
        .build()
        .context("failed to build http client")?;
    let provider = GroqProvider::new(client, &args.base_url, args.api_key.clone())
        .with_retries(args.max_retries, args.retry_delay());
    let gateway = CompletionGateway::new(Arc::new(provider), args.model.clone());

    tracing::info!(
        base_url = %args.base_url,
        model = gateway.model(),
        timeout_secs = args.request_timeout,
        max_retries = args.max_retries,
        max_upload_mb = args.max_upload_mb,
        "completion provider configured"
    );

    let app = handlers::router(AppState::new(gateway), args.body_limit());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server running on http://localhost:{}", args.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

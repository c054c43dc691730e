// src/bin/api_server.rs

use anyhow::Context;
use product_lookup_api::infra::config::{self, LogFormat};
use product_lookup_api::transport::http::router::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use product_lookup_api::{build_app, AppState, Catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    // --- Catalog Initialization ---
    let catalog = match config::catalog_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog from file");
            Catalog::from_path(&path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?
        }
        None => Catalog::embedded().context("embedded catalog is invalid")?,
    };
    tracing::info!(
        products = catalog.products().len(),
        postal_codes = catalog.postal_codes().len(),
        "Catalog loaded"
    );
    if catalog.products().is_empty() || catalog.postal_codes().is_empty() {
        tracing::warn!("At least one dataset is empty; its endpoint will answer with a notice");
    }

    // --- API Server Initialization ---
    let app = build_app(AppState::new(catalog));
    let addr = config::bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "API server listening");
    tracing::info!(
        swagger_ui = SWAGGER_UI_PATH,
        openapi = OPENAPI_JSON_PATH,
        "API documentation available"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_new(config::log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config::log_format() {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

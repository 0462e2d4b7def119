use std::env;

use anyhow::Result;
use guide_api::{build_app, ApiConfig};
use guide_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("guide_api");

    let bind = env::var("GUIDE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let config = ApiConfig::from_env();
    let catalog_path = config.catalog_path.display().to_string();

    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, catalog = %catalog_path, "karelia guide api started");

    axum::serve(listener, app).await?;
    Ok(())
}

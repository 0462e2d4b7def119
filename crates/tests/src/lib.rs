//! Shared fixtures for the cross-crate integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use guide_agents::ItineraryAssistant;
use guide_api::{build_app, ApiConfig};
use guide_catalog::Catalog;
use guide_core::AssistantConfig;
use guide_observability::AppMetrics;
use guide_storage::MemoryStore;

pub const TEST_API_KEY: &str = "dev-guide-key";

pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog.geojson")
}

pub fn test_config() -> ApiConfig {
    ApiConfig {
        catalog_path: catalog_path(),
        api_key: TEST_API_KEY.to_string(),
        allowed_origins: Vec::new(),
        reply_seed: Some(7),
        assistant: AssistantConfig::default(),
    }
}

pub fn test_app() -> Result<Router> {
    build_app(test_config())
}

pub fn test_assistant() -> Result<ItineraryAssistant<MemoryStore>> {
    let catalog = Catalog::from_path(catalog_path())?;

    Ok(ItineraryAssistant::new(
        Arc::new(catalog),
        Arc::new(MemoryStore::new()),
        AssistantConfig::default(),
        AppMetrics::shared(),
        Some(7),
    ))
}

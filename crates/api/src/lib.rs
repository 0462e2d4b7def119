use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Json, Path as AxumPath, Query, State};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{body::Body, Router};
use guide_agents::ItineraryAssistant;
use guide_catalog::{Catalog, CatalogProvider, CategoryFilter, ReloadableCatalog};
use guide_core::{AssistantConfig, GuideError};
use guide_observability::AppMetrics;
use guide_storage::MemoryStore;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const MAX_BODY_BYTES: usize = 16 * 1024;
const MAX_MESSAGE_LEN: usize = 2_000;
const MAX_NAMES_PER_REQUEST: usize = 100;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub catalog_path: PathBuf,
    pub api_key: String,
    pub allowed_origins: Vec<String>,
    pub reply_seed: Option<u64>,
    pub assistant: AssistantConfig,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("GUIDE_CATALOG_PATH")
                .unwrap_or_else(|_| "data/catalog.geojson".to_string())
                .into(),
            api_key: env::var("GUIDE_API_KEY").unwrap_or_else(|_| "dev-guide-key".to_string()),
            allowed_origins: env::var("GUIDE_ALLOWED_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            reply_seed: env::var("GUIDE_REPLY_SEED")
                .ok()
                .and_then(|value| value.trim().parse::<u64>().ok()),
            assistant: AssistantConfig::from_env(),
        }
    }

    pub fn with_catalog_path(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            ..Self::from_env()
        }
    }
}

#[derive(Clone)]
pub struct ApiState {
    pub assistant: Arc<ItineraryAssistant<MemoryStore>>,
    pub catalog: Arc<ReloadableCatalog>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub allowed_origins: Arc<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    catalog_points: usize,
    metrics: guide_observability::MetricsSnapshot,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct PointsQuery {
    category: Option<String>,
    page: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct NamesRequest {
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RatingRequest {
    name: String,
    stars: u8,
}

pub fn build_app(config: ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let catalog = Catalog::from_path(&config.catalog_path).with_context(|| {
        format!(
            "failed loading catalog from {}",
            config.catalog_path.display()
        )
    })?;
    let catalog = Arc::new(ReloadableCatalog::new(catalog));

    let assistant = Arc::new(ItineraryAssistant::new(
        catalog.clone() as Arc<dyn CatalogProvider>,
        Arc::new(MemoryStore::new()),
        config.assistant,
        metrics.clone(),
        config.reply_seed,
    ));

    let state = ApiState {
        assistant,
        catalog,
        metrics,
        api_key: config.api_key,
        allowed_origins: Arc::new(config.allowed_origins),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/chat", post(chat))
        .route("/v1/points", get(points_list))
        .route("/v1/points/:name", get(point_details))
        .route("/v1/map", post(show_on_map))
        .route("/v1/favorites", get(favorites_list).post(favorites_add))
        .route("/v1/favorites/:name", delete(favorites_remove))
        .route("/v1/ratings", post(rate_point))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        catalog_points: state.catalog.all_points().len(),
        metrics: state.metrics.snapshot(),
    };

    (StatusCode::OK, Json(payload))
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    if request.text.chars().count() > MAX_MESSAGE_LEN {
        return error_body(
            StatusCode::PAYLOAD_TOO_LARGE,
            "message_too_long",
            format!("message exceeds {MAX_MESSAGE_LEN} characters"),
        );
    }

    match state.assistant.handle_message(&request.text) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error) => guide_error_response(&error),
    }
}

async fn points_list(State(state): State<ApiState>, Query(query): Query<PointsQuery>) -> Response {
    let filter = match CategoryFilter::parse(query.category.as_deref()) {
        Ok(filter) => filter,
        Err(error) => return guide_error_response(&error),
    };

    let page = state.assistant.browse(filter, query.page.unwrap_or(0));
    (StatusCode::OK, Json(page)).into_response()
}

async fn point_details(
    State(state): State<ApiState>,
    AxumPath(name): AxumPath<String>,
) -> Response {
    match state.assistant.point_details(&name) {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(error) => anyhow_response(&error),
    }
}

async fn show_on_map(State(state): State<ApiState>, Json(request): Json<NamesRequest>) -> Response {
    if let Some(response) = reject_oversized_names(&request.names) {
        return response;
    }

    let view = state.assistant.show_on_map(&request.names);
    (StatusCode::OK, Json(view)).into_response()
}

async fn favorites_list(State(state): State<ApiState>) -> Response {
    match state.assistant.favorites() {
        Ok(points) => (StatusCode::OK, Json(points)).into_response(),
        Err(error) => anyhow_response(&error),
    }
}

async fn favorites_add(
    State(state): State<ApiState>,
    Json(request): Json<NamesRequest>,
) -> Response {
    if let Some(response) = reject_oversized_names(&request.names) {
        return response;
    }

    match state.assistant.add_to_favorites(&request.names) {
        Ok(update) => (StatusCode::OK, Json(update)).into_response(),
        Err(error) => anyhow_response(&error),
    }
}

async fn favorites_remove(
    State(state): State<ApiState>,
    AxumPath(name): AxumPath<String>,
) -> Response {
    match state.assistant.remove_favorite(&name) {
        Ok(removed) => (
            StatusCode::OK,
            Json(serde_json::json!({ "name": name, "removed": removed })),
        )
            .into_response(),
        Err(error) => anyhow_response(&error),
    }
}

async fn rate_point(State(state): State<ApiState>, Json(request): Json<RatingRequest>) -> Response {
    match state.assistant.rate(&request.name, request.stars) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => anyhow_response(&error),
    }
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != state.api_key {
        return error_body(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid x-api-key".to_string(),
        );
    }

    next.run(request).await
}

fn is_public_endpoint(path: &str) -> bool {
    path == "/health"
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderName::from_static("x-api-key"),
        ])
}

fn reject_oversized_names(names: &[String]) -> Option<Response> {
    (names.len() > MAX_NAMES_PER_REQUEST).then(|| {
        error_body(
            StatusCode::PAYLOAD_TOO_LARGE,
            "too_many_names",
            format!("at most {MAX_NAMES_PER_REQUEST} names per request"),
        )
    })
}

fn guide_error_response(error: &GuideError) -> Response {
    let status = match error {
        GuideError::PointNotFound(_) => StatusCode::NOT_FOUND,
        GuideError::EmptyUtterance
        | GuideError::UnknownCategory(_)
        | GuideError::InvalidRating(_) => StatusCode::BAD_REQUEST,
    };

    error_body(status, error.code(), error.to_string())
}

fn anyhow_response(error: &anyhow::Error) -> Response {
    if let Some(guide_error) = error.downcast_ref::<GuideError>() {
        return guide_error_response(guide_error);
    }

    tracing::error!(error = %error, "request failed");
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal error".to_string(),
    )
}

fn error_body(status: StatusCode, code: &str, message: String) -> Response {
    if status.is_server_error() {
        warn!(code, "server error response");
    } else {
        info!(code, status = status.as_u16(), "client error response");
    }

    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message
        })),
    )
        .into_response()
}

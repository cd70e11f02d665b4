use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::construct::{AnalyzedString, ContentStore};
use crate::engine::{FilteredStrings, InterpretedStrings, QueryEngine};
use crate::error::StringscopeError;
use crate::filter::FilterSet;

const SERVICE: &str = "String Analyzer API";

/// Everything that can go wrong while handling a request, ready to be
/// turned into a status code and an `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    Core(StringscopeError),
    Request { status: StatusCode, message: String },
}

impl From<StringscopeError> for ApiError {
    fn from(e: StringscopeError) -> Self {
        Self::Core(e)
    }
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self::Request { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

pub fn status_of(e: &StringscopeError) -> StatusCode {
    match e {
        StringscopeError::DuplicateContent { .. } => StatusCode::CONFLICT,
        StringscopeError::NotFound { .. } => StatusCode::NOT_FOUND,
        StringscopeError::InvalidFilterValue { .. }
        | StringscopeError::MissingQuery
        | StringscopeError::UnparseableQuery { .. }
        | StringscopeError::UnsupportedWordCount { .. } => StatusCode::BAD_REQUEST,
        StringscopeError::ConflictingFilters { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        StringscopeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Core(e) => (status_of(&e), e.to_string()),
            Self::Request { status, message } => (status, message),
        };
        if status.is_server_error() {
            warn!(%message, code = %status.as_u16(), "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn router(store: Arc<ContentStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/strings", get(list_strings).post(create_string))
        .route("/strings/filter-by-natural-language", get(filter_by_natural_language))
        .route("/strings/:string_value", get(get_string).delete(delete_string))
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(store)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!(%method, %path, status = response.status().as_u16(), ms = elapsed_ms, "request complete");
    response
}

async fn welcome() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {SERVICE}"),
        "description": "A REST API for analyzing string properties including palindrome detection, character frequency, and more",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /strings": "Create and analyze a new string",
            "GET /strings": "Get all strings with optional filtering",
            "GET /strings/:string_value": "Get a specific string by value or hash",
            "GET /strings/filter-by-natural-language": "Filter strings using natural language queries",
            "DELETE /strings/:string_value": "Delete a string by value or hash",
            "GET /health": "Health check endpoint",
        },
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE,
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn create_string(
    State(store): State<Arc<ContentStore>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Arc<AnalyzedString>>), ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let value = match body.get("value") {
        Some(Value::String(value)) => value.clone(),
        None | Some(Value::Null) => return Err(ApiError::bad_request("Missing required field: 'value'")),
        Some(_) => {
            return Err(ApiError::Request {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Invalid data type for 'value' field, expected string".into(),
            });
        }
    };
    let created = store.create(value)?;
    info!(id = created.id(), "string created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_strings(
    State(store): State<Arc<ContentStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<FilteredStrings>, ApiError> {
    let filters = FilterSet::from_params(&params)?;
    Ok(Json(QueryEngine::new(&store).filter_explicit(filters)))
}

async fn filter_by_natural_language(
    State(store): State<Arc<ContentStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InterpretedStrings>, ApiError> {
    let query = params.get("query").map(String::as_str).unwrap_or_default();
    Ok(Json(QueryEngine::new(&store).filter_by_natural_language(query)?))
}

async fn get_string(
    State(store): State<Arc<ContentStore>>,
    Path(string_value): Path<String>,
) -> Result<Json<Arc<AnalyzedString>>, ApiError> {
    store
        .get_by_value_or_id(&string_value)
        .map(Json)
        .ok_or(ApiError::Core(StringscopeError::NotFound { token: string_value }))
}

async fn delete_string(
    State(store): State<Arc<ContentStore>>,
    Path(string_value): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_by_value_or_id(&string_value) {
        info!(token = %string_value, "string deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StringscopeError::NotFound { token: string_value }.into())
    }
}

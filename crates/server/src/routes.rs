use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod ciudad_supermercados;
pub mod ciudades;
pub mod supermercados;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Unwrap a JSON body, turning a malformed one into the common error shape.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, JsonApiError> {
    body.map(|Json(v)| v).map_err(|e| {
        let status = e.status();
        let title = status.canonical_reason().unwrap_or("Bad Request");
        JsonApiError::new(status, title, Some(e.body_text()))
    })
}

pub(crate) fn created<T>(value: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(value))
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let cities = Router::new()
        .route("/cities", get(ciudades::find_all).post(ciudades::create))
        .route(
            "/cities/:ciudadId",
            get(ciudades::find_one).put(ciudades::update).delete(ciudades::delete),
        );

    let supermarkets = Router::new()
        .route("/supermarkets", get(supermercados::find_all).post(supermercados::create))
        .route(
            "/supermarkets/:supermercadoId",
            get(supermercados::find_one).put(supermercados::update).delete(supermercados::delete),
        );

    let links = Router::new()
        .route(
            "/cities/:ciudadId/supermarkets",
            get(ciudad_supermercados::find_supermarkets_from_city)
                .put(ciudad_supermercados::update_supermarkets_from_city),
        )
        .route(
            "/cities/:ciudadId/supermarkets/:supermercadoId",
            get(ciudad_supermercados::find_supermarket_from_city)
                .post(ciudad_supermercados::add_supermarket_to_city)
                .delete(ciudad_supermercados::delete_supermarket_from_city),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(cities)
        .merge(supermarkets)
        .merge(links)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

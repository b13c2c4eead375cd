use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use service::domain::{Supermercado, SupermercadoPatch};
use service::errors::{parse_id, Resource};

use crate::errors::JsonApiError;
use crate::routes::{created, json_body};
use crate::state::ServerState;
use crate::validation::validate_supermercado_dto;

#[utoipa::path(get, path = "/supermarkets", tag = "supermarkets",
    responses((status = 200, body = [crate::openapi::SupermercadoDoc])))]
pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Supermercado>>, JsonApiError> {
    Ok(Json(state.supermercados.find_all().await?))
}

#[utoipa::path(get, path = "/supermarkets/{supermercadoId}", tag = "supermarkets",
    params(("supermercadoId" = String, Path, description = "Supermarket id")),
    responses(
        (status = 200, body = crate::openapi::SupermercadoDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn find_one(
    State(state): State<ServerState>,
    Path(supermercado_id): Path<String>,
) -> Result<Json<Supermercado>, JsonApiError> {
    let id = parse_id(&supermercado_id, Resource::Supermercado)?;
    Ok(Json(state.supermercados.find_one(id).await?))
}

#[utoipa::path(post, path = "/supermarkets", tag = "supermarkets",
    request_body = crate::openapi::SupermercadoBodyDoc,
    responses(
        (status = 201, body = crate::openapi::SupermercadoDoc),
        (status = 400, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Supermercado>), JsonApiError> {
    let input = validate_supermercado_dto(&json_body(body)?)?;
    Ok(created(state.supermercados.create(input).await?))
}

#[utoipa::path(put, path = "/supermarkets/{supermercadoId}", tag = "supermarkets",
    params(("supermercadoId" = String, Path, description = "Supermarket id")),
    request_body = crate::openapi::SupermercadoBodyDoc,
    responses(
        (status = 200, body = crate::openapi::SupermercadoDoc),
        (status = 400, body = crate::openapi::ErrorBodyDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn update(
    State(state): State<ServerState>,
    Path(supermercado_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Supermercado>, JsonApiError> {
    let input = validate_supermercado_dto(&json_body(body)?)?;
    let id = parse_id(&supermercado_id, Resource::Supermercado)?;
    Ok(Json(state.supermercados.update(id, SupermercadoPatch::from(input)).await?))
}

#[utoipa::path(delete, path = "/supermarkets/{supermercadoId}", tag = "supermarkets",
    params(("supermercadoId" = String, Path, description = "Supermarket id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(supermercado_id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&supermercado_id, Resource::Supermercado)?;
    state.supermercados.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use service::domain::{Ciudad, CiudadPatch};
use service::errors::{parse_id, Resource};

use crate::errors::JsonApiError;
use crate::routes::{created, json_body};
use crate::state::ServerState;
use crate::validation::validate_ciudad_dto;

#[utoipa::path(get, path = "/cities", tag = "cities",
    responses((status = 200, body = [crate::openapi::CiudadDoc])))]
pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Ciudad>>, JsonApiError> {
    Ok(Json(state.ciudades.find_all().await?))
}

#[utoipa::path(get, path = "/cities/{ciudadId}", tag = "cities",
    params(("ciudadId" = String, Path, description = "City id")),
    responses(
        (status = 200, body = crate::openapi::CiudadDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn find_one(
    State(state): State<ServerState>,
    Path(ciudad_id): Path<String>,
) -> Result<Json<Ciudad>, JsonApiError> {
    let id = parse_id(&ciudad_id, Resource::Ciudad)?;
    Ok(Json(state.ciudades.find_one(id).await?))
}

#[utoipa::path(post, path = "/cities", tag = "cities",
    request_body = crate::openapi::CiudadBodyDoc,
    responses(
        (status = 201, body = crate::openapi::CiudadDoc),
        (status = 400, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Ciudad>), JsonApiError> {
    let input = validate_ciudad_dto(&json_body(body)?)?;
    Ok(created(state.ciudades.create(input).await?))
}

#[utoipa::path(put, path = "/cities/{ciudadId}", tag = "cities",
    params(("ciudadId" = String, Path, description = "City id")),
    request_body = crate::openapi::CiudadBodyDoc,
    responses(
        (status = 200, body = crate::openapi::CiudadDoc),
        (status = 400, body = crate::openapi::ErrorBodyDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn update(
    State(state): State<ServerState>,
    Path(ciudad_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Ciudad>, JsonApiError> {
    let input = validate_ciudad_dto(&json_body(body)?)?;
    let id = parse_id(&ciudad_id, Resource::Ciudad)?;
    Ok(Json(state.ciudades.update(id, CiudadPatch::from(input)).await?))
}

#[utoipa::path(delete, path = "/cities/{ciudadId}", tag = "cities",
    params(("ciudadId" = String, Path, description = "City id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(ciudad_id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&ciudad_id, Resource::Ciudad)?;
    state.ciudades.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

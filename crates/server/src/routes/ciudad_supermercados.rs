use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use service::domain::{Ciudad, Supermercado};
use service::errors::{parse_id, Resource, ServiceError};

use crate::errors::JsonApiError;
use crate::routes::{created, json_body};
use crate::state::ServerState;
use crate::validation::validate_supermercado_refs;

fn ids(ciudad_id: &str, supermercado_id: &str) -> Result<(Uuid, Uuid), ServiceError> {
    Ok((parse_id(ciudad_id, Resource::Ciudad)?, parse_id(supermercado_id, Resource::Supermercado)?))
}

#[utoipa::path(post, path = "/cities/{ciudadId}/supermarkets/{supermercadoId}", tag = "links",
    params(
        ("ciudadId" = String, Path, description = "City id"),
        ("supermercadoId" = String, Path, description = "Supermarket id"),
    ),
    responses(
        (status = 201, body = crate::openapi::CiudadDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn add_supermarket_to_city(
    State(state): State<ServerState>,
    Path((ciudad_id, supermercado_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Ciudad>), JsonApiError> {
    // the supermarket is looked up first, so its id is checked first too
    let supermercado = parse_id(&supermercado_id, Resource::Supermercado)?;
    let ciudad = parse_id(&ciudad_id, Resource::Ciudad)?;
    Ok(created(state.asociaciones.add_supermarket_to_city(ciudad, supermercado).await?))
}

#[utoipa::path(get, path = "/cities/{ciudadId}/supermarkets/{supermercadoId}", tag = "links",
    params(
        ("ciudadId" = String, Path, description = "City id"),
        ("supermercadoId" = String, Path, description = "Supermarket id"),
    ),
    responses(
        (status = 200, body = crate::openapi::SupermercadoDoc),
        (status = 400, description = "Supermarket not linked to the city", body = crate::openapi::ErrorBodyDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn find_supermarket_from_city(
    State(state): State<ServerState>,
    Path((ciudad_id, supermercado_id)): Path<(String, String)>,
) -> Result<Json<Supermercado>, JsonApiError> {
    let (ciudad, supermercado) = ids(&ciudad_id, &supermercado_id)?;
    Ok(Json(state.asociaciones.find_supermarket_from_city(ciudad, supermercado).await?))
}

#[utoipa::path(get, path = "/cities/{ciudadId}/supermarkets", tag = "links",
    params(("ciudadId" = String, Path, description = "City id")),
    responses(
        (status = 200, body = [crate::openapi::SupermercadoDoc]),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn find_supermarkets_from_city(
    State(state): State<ServerState>,
    Path(ciudad_id): Path<String>,
) -> Result<Json<Vec<Supermercado>>, JsonApiError> {
    let ciudad = parse_id(&ciudad_id, Resource::Ciudad)?;
    Ok(Json(state.asociaciones.find_supermarkets_from_city(ciudad).await?))
}

#[utoipa::path(put, path = "/cities/{ciudadId}/supermarkets", tag = "links",
    params(("ciudadId" = String, Path, description = "City id")),
    request_body = [crate::openapi::SupermercadoRefDoc],
    responses(
        (status = 200, body = crate::openapi::CiudadDoc),
        (status = 400, body = crate::openapi::ErrorBodyDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn update_supermarkets_from_city(
    State(state): State<ServerState>,
    Path(ciudad_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Ciudad>, JsonApiError> {
    let refs = validate_supermercado_refs(&json_body(body)?)?;
    let ciudad = parse_id(&ciudad_id, Resource::Ciudad)?;
    // body ids are resolved by the manager, after the city lookup
    Ok(Json(state.asociaciones.update_supermarkets_from_city(ciudad, refs.as_slice()).await?))
}

#[utoipa::path(delete, path = "/cities/{ciudadId}/supermarkets/{supermercadoId}", tag = "links",
    params(
        ("ciudadId" = String, Path, description = "City id"),
        ("supermercadoId" = String, Path, description = "Supermarket id"),
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Supermarket not linked to the city", body = crate::openapi::ErrorBodyDoc),
        (status = 404, body = crate::openapi::ErrorBodyDoc),
    ))]
pub async fn delete_supermarket_from_city(
    State(state): State<ServerState>,
    Path((ciudad_id, supermercado_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    let supermercado = parse_id(&supermercado_id, Resource::Supermercado)?;
    let ciudad = parse_id(&ciudad_id, Resource::Ciudad)?;
    state.asociaciones.delete_supermarket_from_city(ciudad, supermercado).await?;
    Ok(StatusCode::NO_CONTENT)
}

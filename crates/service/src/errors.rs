use thiserror::Error;
use uuid::Uuid;

use models::errors::ModelError;

/// Category of a failed operation, stable across message changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    NotAssociated,
    Internal,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotAssociated(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Record types the managers look up by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Ciudad,
    Supermercado,
}

impl Resource {
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::Ciudad => "No se encontró la ciudad con el id suministrado",
            Resource::Supermercado => "No se encontró un supermercado con el id suministrado",
        }
    }
}

pub const NO_ASOCIADO: &str = "El supermercado con el id suministrado no está asociado con la ciudad";

impl ServiceError {
    pub fn not_found(resource: Resource) -> Self { Self::NotFound(resource.not_found_message().into()) }

    pub fn not_associated() -> Self { Self::NotAssociated(NO_ASOCIADO.into()) }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::BadRequest(_) => ErrorKind::BadRequest,
            ServiceError::NotAssociated(_) => ErrorKind::NotAssociated,
            ServiceError::Db(_) => ErrorKind::Internal,
        }
    }

    /// Human-readable message as it should reach the API boundary.
    pub fn message(&self) -> String { self.to_string() }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::BadRequest(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

/// Identifiers are opaque strings at the boundary. One that is not a UUID
/// cannot name a stored record, so it is reported as missing.
pub fn parse_id(raw: &str, resource: Resource) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::not_found(resource))
}

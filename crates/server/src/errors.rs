use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

use crate::validation::FieldError;

/// Error body returned by every failing endpoint:
/// `{"statusCode", "error", "message", "details"?}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub details: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, details: Vec::new() }
    }

    /// 400 listing every rejected body field.
    pub fn validation(details: Vec<FieldError>) -> Self {
        let message = details.iter().map(|d| d.message.as_str()).collect::<Vec<_>>().join("; ");
        Self { status: StatusCode::BAD_REQUEST, error: "Bad Request", message: Some(message), details }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldError]>,
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status_code: self.status.as_u16(),
            error: self.error,
            message: self.message.as_deref(),
            details: (!self.details.is_empty()).then_some(self.details.as_slice()),
        };
        let value = serde_json::to_value(&body).unwrap_or_else(|_| json!({"statusCode": self.status.as_u16()}));
        (self.status, Json(value)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::BadRequest(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            ServiceError::NotAssociated(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Not Associated", Some(msg)),
            ServiceError::Db(msg) => {
                error!(error = %msg, "persistence failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<Vec<FieldError>> for JsonApiError {
    fn from(details: Vec<FieldError>) -> Self { JsonApiError::validation(details) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migrations failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: JsonApiError) -> (StatusCode, Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_associated_is_a_distinct_bad_request() {
        let (status, body) = body_of(ServiceError::not_associated().into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "Not Associated");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn db_errors_do_not_leak_details() {
        let (status, body) = body_of(ServiceError::Db("relation \"ciudad\" does not exist".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn validation_lists_fields() {
        let details = vec![FieldError::new("nombre", "nombre must be a non-empty string")];
        let (status, body) = body_of(details.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "nombre");
        assert_eq!(body["message"], "nombre must be a non-empty string");
    }
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Lookup miss, carries every valid key so callers can offer alternatives
    #[error("{message}")]
    NotFound {
        message: String,
        available: Vec<String>,
    },

    #[error("Invalid request format.")]
    BadRequest,
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::BadRequest => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(%rejection, "Rejected request body");
        ServiceError::BadRequest
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<Vec<String>>,
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        let available = match err {
            ServiceError::NotFound { available, .. } => Some(available.clone()),
            _ => None,
        };
        ErrorBody {
            success: false,
            error: err.to_string(),
            available,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        debug!(error = %self, status = %self.status_code(), "Request failed");
        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}

#[test]
fn test_not_found_body_lists_available_keys() {
    let err = ServiceError::NotFound {
        message: "missing".to_string(),
        available: vec!["A".to_string(), "B".to_string()],
    };
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

    let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"success": false, "error": "missing", "available": ["A", "B"]})
    );
}

#[test]
fn test_validation_body_omits_available() {
    let err = ServiceError::validation("bad length");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
    assert_eq!(body, serde_json::json!({"success": false, "error": "bad length"}));
}

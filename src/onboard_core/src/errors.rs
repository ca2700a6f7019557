use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a controller reports back to the client.
///
/// These are response payloads, not control flow: a controller builds one,
/// wraps it in an [`HttpResponse`](crate::HttpResponse) and returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Missing parameter: {0}")]
    MissingParam(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("Internal server error")]
    ServerError,
}

impl ControllerError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ControllerError> for ErrorResponse {
    fn from(error: &ControllerError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl Serialize for ControllerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

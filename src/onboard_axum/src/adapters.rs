//! Axum adapter for controller responses.
//!
//! `HttpResponse` lives in `onboard_core` and `IntoResponse` in axum, so the
//! orphan rule forces a newtype:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  onboard_core::HttpResponse<T> (struct)    │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumResponse<T>(HttpResponse<T>)          │
//! │  impl IntoResponse for AxumResponse<T> { } │
//! └────────────────────────────────────────────┘
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use onboard_core::HttpResponse;
use serde::Serialize;

/// Newtype wrapper around a controller's `HttpResponse`.
#[repr(transparent)]
#[derive(Debug)]
pub struct AxumResponse<T>(pub HttpResponse<T>);

impl<T> From<HttpResponse<T>> for AxumResponse<T> {
    fn from(response: HttpResponse<T>) -> Self {
        AxumResponse(response)
    }
}

/// The status code becomes the HTTP status, the body becomes the JSON body.
impl<T> IntoResponse for AxumResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let HttpResponse { status_code, body } = self.0;

        let status = StatusCode::from_u16(status_code).unwrap_or_else(|_| {
            tracing::error!(status_code, "Controller produced an invalid status code");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        (status, Json(body)).into_response()
    }
}

//! Framework-agnostic HTTP shapes for controllers.
//!
//! Controllers never see a web framework. They receive an [`HttpRequest`] and
//! return an [`HttpResponse`]; framework crates translate to and from their own
//! types.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  onboard_core: HttpRequest/HttpResponse  │
//! │  and the Controller trait                │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  onboard_adapters: SignUpController      │
//! │  impl Controller for SignUpController    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  onboard_axum: Json<Body> → HttpRequest  │
//! │  HttpResponse → axum::Response           │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let response = controller
//!     .handle(HttpRequest::new(SignUpRequest { .. }))
//!     .await;
//!
//! match response.body {
//!     ResponseBody::Success(account) => { /* 200 */ }
//!     ResponseBody::Error(error) => { /* 400 or 500 */ }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ControllerError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// An inbound request as seen by a controller: just a body.
///
/// Headers, method and path are the transport's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Payload of an [`HttpResponse`].
///
/// Serializes untagged, so a success body is written as-is and an error as
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Success(T),
    Error(ControllerError),
}

/// The single response a controller produces for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The error carried by this response, if it is one.
    pub fn error(&self) -> Option<&ControllerError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Success(_) => None,
        }
    }

    /// Consume the response and return the success body, if it is one.
    pub fn into_success(self) -> Option<T> {
        match self.body {
            ResponseBody::Success(value) => Some(value),
            ResponseBody::Error(_) => None,
        }
    }
}

/// Create a 200 OK response carrying `body`.
pub fn ok<T>(body: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_OK,
        body: ResponseBody::Success(body),
    }
}

/// Create a 400 Bad Request response carrying `error`.
pub fn bad_request<T>(error: ControllerError) -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// Create a 500 Internal Server Error response with the generic error body.
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ControllerError::ServerError),
    }
}

/// A unit mapping one inbound request to exactly one response.
///
/// `handle` is infallible by contract: every failure mode ends up as a
/// structured [`HttpResponse`].
#[async_trait]
pub trait Controller: Send + Sync + Clone + 'static {
    /// The request body this controller accepts
    type Body: for<'de> Deserialize<'de> + Send + 'static;

    /// The body of a successful response
    type Output: Serialize + Send;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse<Self::Output>;
}

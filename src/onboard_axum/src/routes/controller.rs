//! Generic route adapting any `Controller` to Axum.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use onboard_core::{Controller, ErrorResponse, HttpRequest};
use thiserror::Error;

use crate::adapters::AxumResponse;

/// Axum route for a controller.
///
/// Deserializes the JSON body into the controller's `Body`, hands it over as an
/// `HttpRequest` and turns the controller's `HttpResponse` into an Axum response.
/// A body that cannot be read as JSON never reaches the controller and is
/// answered with a 400.
pub async fn controller_route<C>(
    State(controller): State<C>,
    body: Result<Json<C::Body>, JsonRejection>,
) -> Result<AxumResponse<C::Output>, RouteError>
where
    C: Controller,
{
    let Json(body) = body?;

    let response = controller.handle(HttpRequest::new(body)).await;

    Ok(AxumResponse::from(response))
}

/// Errors raised before a controller is reached
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Malformed request body: {}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = %self, "Rejected request");

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

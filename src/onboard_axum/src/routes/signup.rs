//! Axum-specific signup route.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use onboard_adapters::controllers::SignUpController;
use onboard_core::{Account, SignUpRequest};

use super::controller::{RouteError, controller_route};
use crate::adapters::AxumResponse;

/// Axum signup route.
///
/// The actual sign-up logic is in the framework-agnostic controller.
#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(controller): State<SignUpController>,
    request: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<AxumResponse<Account>, RouteError> {
    controller_route(State(controller), request).await
}

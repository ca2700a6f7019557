use std::sync::Arc;

use axum::{Router, routing::post};
use onboard_adapters::{config::SIGNUP_PATH, controllers::SignUpController};
use onboard_axum::routes::signup;
use onboard_core::{AddAccount, EmailValidator};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Sign-up service exposing the sign-up controller over HTTP
pub struct SignUpService {
    router: Router,
}

impl SignUpService {
    /// Create a new SignUpService with the provided collaborators
    ///
    /// # Arguments
    /// * `email_validator` - Decides whether a submitted email is well formed
    /// * `add_account` - Creates the account once the request passed validation
    pub fn new<E, A>(email_validator: E, add_account: A) -> Self
    where
        E: EmailValidator + 'static,
        A: AddAccount + 'static,
    {
        let controller = SignUpController::new(Arc::new(email_validator), Arc::new(add_account));

        let router = Router::new()
            .route(SIGNUP_PATH, post(signup))
            .with_state(controller);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the SignUpService into a router that can be nested into another one
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the sign-up service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Sign-up service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

//! Axum-specific routes.
//!
//! Routes use Axum's extractors to build an `HttpRequest`, call the
//! framework-agnostic controller and convert its `HttpResponse` back.

pub mod controller;
pub mod signup;

pub use controller::{RouteError, controller_route};
pub use signup::signup;

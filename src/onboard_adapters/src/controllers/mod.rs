//! Framework-agnostic controllers.
//!
//! Controllers receive an `HttpRequest`, talk to injected collaborators and
//! return an `HttpResponse`. Framework crates (see `onboard_axum`) only do the
//! translation to and from their own request and response types.

pub mod signup;

pub use signup::SignUpController;

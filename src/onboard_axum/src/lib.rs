//! Axum integration for the onboard controllers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  onboard_core: HttpRequest, HttpResponse │
//! │  and the Controller trait                │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  onboard_axum: Axum implementations      │
//! │  - AxumResponse newtype wrapper          │
//! │  - generic controller route              │
//! │  - signup route                          │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use onboard_axum::routes;
//!
//! let app = Router::new()
//!     .route("/signup", post(routes::signup))
//!     .with_state(signup_controller);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::AxumResponse;

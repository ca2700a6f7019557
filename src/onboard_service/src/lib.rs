mod helpers;
mod signup_service;
mod tracing;

pub use helpers::in_memory_signup_service;
pub use signup_service::SignUpService;

// Re-export commonly used types
pub use onboard_core::{AddAccount, EmailValidator};

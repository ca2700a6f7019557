//! # Onboard - Sign-up Service Library
//!
//! This is a facade crate that re-exports all public APIs from the sign-up components.
//! Use this crate to get access to the whole sign-up flow in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! onboard = { path = "../onboard" }
//! ```
//!
//! ## Structure
//!
//! - **Core types**: `SignUpRequest`, `Account`, `HttpRequest`, `HttpResponse`, etc.
//! - **Ports**: `EmailValidator`, `AddAccount`, `AccountStore`
//! - **Use cases**: `AddAccountUseCase`
//! - **Adapters**: `SignUpController`, `HashMapAccountStore`, `RegexEmailValidator`
//! - **Service**: `SignUpService` - The main entry point for the sign-up service

// ============================================================================
// Core Types
// ============================================================================

/// Core domain types and HTTP shapes
pub mod core {
    pub use onboard_core::*;
}

// Re-export most commonly used core types at the root level
pub use onboard_core::{
    Account, AccountId, AddAccountModel, Controller, ControllerError, HttpRequest, HttpResponse,
    ResponseBody, SignUpRequest,
};

// ============================================================================
// Ports
// ============================================================================

/// Collaborator and repository trait definitions
pub mod ports {
    pub use onboard_core::{
        AccountStore, AccountStoreError, AddAccount, AddAccountError, EmailValidator,
        EmailValidatorError,
    };
}

pub use ports::{AccountStore, AddAccount, EmailValidator};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use onboard_application::*;
}

pub use onboard_application::AddAccountUseCase;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic controllers
    pub mod controllers {
        pub use onboard_adapters::controllers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use onboard_adapters::persistence::*;
    }

    /// Email validator implementations
    pub mod validation {
        pub use onboard_adapters::validation::*;
    }

    /// Configuration
    pub mod config {
        pub use onboard_adapters::config::*;
    }

    /// Axum routes and response adapter
    pub mod axum {
        pub use onboard_axum::*;
    }
}

pub use onboard_adapters::{
    controllers::SignUpController, persistence::HashMapAccountStore,
    validation::RegexEmailValidator,
};

// ============================================================================
// Sign-up Service (Main Entry Point)
// ============================================================================

/// Main sign-up service
pub use onboard_service::{SignUpService, in_memory_signup_service};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

//! Collaborators consumed by the sign-up controller.
//!
//! Both return `Result` so that an unexpected fault is distinguishable from a
//! normal negative answer. The controller turns any `Err` into a 500.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{Account, AddAccountModel};

#[derive(Debug, Error)]
pub enum EmailValidatorError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Decides whether a string is a syntactically valid email address.
pub trait EmailValidator: Send + Sync {
    /// `Ok(false)` means "not an email"; `Err` means the check itself failed.
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

#[derive(Debug, Error)]
pub enum AddAccountError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Creates an account from validated sign-up data.
///
/// No idempotence is assumed by callers. Duplicate-email policy, if any, is up
/// to the implementor.
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> Result<Account, AddAccountError>;
}

impl From<crate::ports::repositories::AccountStoreError> for AddAccountError {
    fn from(error: crate::ports::repositories::AccountStoreError) -> Self {
        AddAccountError::UnexpectedError(error.to_string())
    }
}

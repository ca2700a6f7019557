use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{Account, AccountId};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert_account(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
}

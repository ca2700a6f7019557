use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use onboard_core::{Account, AccountId, AccountStore, AccountStoreError};

/// In-memory account store. Not durable: everything is gone on restart.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn insert_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.id()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.id().clone(), account);
        Ok(())
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }
}

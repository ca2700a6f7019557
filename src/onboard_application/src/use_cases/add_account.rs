use async_trait::async_trait;
use onboard_core::{
    Account, AccountId, AccountStore, AddAccount, AddAccountError, AddAccountModel,
};
use uuid::Uuid;

/// Add-account use case - creates and stores a new account
pub struct AddAccountUseCase<S>
where
    S: AccountStore,
{
    account_store: S,
}

impl<S> AddAccountUseCase<S>
where
    S: AccountStore,
{
    pub fn new(account_store: S) -> Self {
        Self { account_store }
    }

    /// Execute the add-account use case
    ///
    /// # Arguments
    /// * `data` - Name, email and password that already passed request validation
    ///
    /// # Returns
    /// The stored account with its freshly assigned id, or AddAccountError if the
    /// store rejected it
    #[tracing::instrument(name = "AddAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, data: AddAccountModel) -> Result<Account, AddAccountError> {
        let account = Account::new(AccountId::new(Uuid::new_v4().to_string()), data);

        self.account_store
            .insert_account(account.clone())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store account"))?;

        tracing::debug!(account_id = %account.id(), "Account created");

        Ok(account)
    }
}

#[async_trait]
impl<S> AddAccount for AddAccountUseCase<S>
where
    S: AccountStore,
{
    async fn add(&self, account: AddAccountModel) -> Result<Account, AddAccountError> {
        self.execute(account).await
    }
}

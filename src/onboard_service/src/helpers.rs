use onboard_adapters::{persistence::HashMapAccountStore, validation::RegexEmailValidator};
use onboard_application::AddAccountUseCase;

use crate::SignUpService;

/// Build a sign-up service backed by the regex email validator and an
/// in-memory account store.
///
/// # Returns
/// The service, and a handle on the store it writes to
pub fn in_memory_signup_service() -> (SignUpService, HashMapAccountStore) {
    let account_store = HashMapAccountStore::new();
    let add_account = AddAccountUseCase::new(account_store.clone());

    let service = SignUpService::new(RegexEmailValidator::new(), add_account);

    (service, account_store)
}

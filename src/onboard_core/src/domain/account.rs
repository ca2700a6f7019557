use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to an account when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Data handed to the account creator once a sign-up request passed validation.
///
/// Carries no password confirmation; that one never leaves the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A created account, as returned to the caller of the sign-up endpoint.
///
/// The password is kept verbatim. Hashing, if any, is the business of whatever
/// sits behind the account creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn new(id: AccountId, data: AddAccountModel) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            password: data.password,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }
}

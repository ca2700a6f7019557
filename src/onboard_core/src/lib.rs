pub mod domain;
pub mod errors;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, AddAccountModel},
    signup_request::{RequiredFields, SignUpRequest, value_text},
};

pub use errors::{ControllerError, ErrorResponse};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{AddAccount, AddAccountError, EmailValidator, EmailValidatorError},
};

pub use http_abstraction::{
    Controller, HttpRequest, HttpResponse, ResponseBody, bad_request, ok, server_error,
};

pub mod account;
pub mod signup_request;

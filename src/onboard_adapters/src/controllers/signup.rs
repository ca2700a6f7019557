//! Framework-agnostic sign-up controller.

use std::sync::Arc;

use async_trait::async_trait;
use onboard_core::{
    Account, AddAccount, AddAccountError, AddAccountModel, Controller, ControllerError,
    EmailValidator, EmailValidatorError, HttpRequest, HttpResponse, SignUpRequest, bad_request,
    ok, server_error, value_text,
};
use thiserror::Error;

/// Unexpected collaborator failures. All of them end up as a 500.
#[derive(Debug, Error)]
enum SignUpFault {
    #[error(transparent)]
    EmailValidator(#[from] EmailValidatorError),

    #[error(transparent)]
    AddAccount(#[from] AddAccountError),
}

/// Sign-up controller.
///
/// Runs the guard clauses in a fixed order and stops at the first one that
/// fails:
///
/// 1. every required field is present and truthy (400, first missing field)
/// 2. the email is a string the email validator accepts (400, `email`)
/// 3. password and confirmation are the same value (400, `passwordConfirmation`)
/// 4. the account creator succeeds (200 with the created account)
///
/// A fault from either collaborator yields a 500 with the generic body.
#[derive(Clone)]
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn try_handle(&self, body: &SignUpRequest) -> Result<HttpResponse<Account>, SignUpFault> {
        let fields = match body.required_fields() {
            Ok(fields) => fields,
            Err(missing) => return Ok(bad_request(ControllerError::missing_param(missing))),
        };

        let Some(email) = fields.email.as_str() else {
            return Ok(bad_request(ControllerError::invalid_param("email")));
        };

        if !self.email_validator.is_valid(email)? {
            return Ok(bad_request(ControllerError::invalid_param("email")));
        }

        if !fields.passwords_match() {
            return Ok(bad_request(ControllerError::invalid_param(
                "passwordConfirmation",
            )));
        }

        let account = self
            .add_account
            .add(AddAccountModel {
                name: value_text(fields.name),
                email: email.to_owned(),
                password: value_text(fields.password),
            })
            .await?;

        Ok(ok(account))
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignUpRequest;
    type Output = Account;

    #[tracing::instrument(name = "SignUpController::handle", skip_all)]
    async fn handle(&self, request: HttpRequest<SignUpRequest>) -> HttpResponse<Account> {
        self.try_handle(&request.body)
            .await
            .unwrap_or_else(|_| server_error())
    }
}

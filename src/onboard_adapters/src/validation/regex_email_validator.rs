use std::sync::LazyLock;

use onboard_core::{EmailValidator, EmailValidatorError};
use regex::Regex;

// local part without whitespace or '@', then dot-separated domain labels and a
// final alphabetic label of at least two letters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Syntactic email check backed by a regular expression.
///
/// Never returns `Err`: a string either matches or it doesn't.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        let valid = EMAIL_REGEX.is_match(email);
        if !valid {
            tracing::debug!("Rejected malformed email address");
        }
        Ok(valid)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a sign-up request, exactly as submitted.
///
/// Every field is an arbitrary JSON value and optional at the boundary:
/// presence and shape are checked by the controller, not by deserialization.
/// Wire names are camelCase and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub password_confirmation: Option<Value>,
}

impl SignUpRequest {
    /// Required fields, by wire name, in the order they are checked.
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["name", "email", "password", "passwordConfirmation"];

    /// Build a request where every given field is a JSON string.
    pub fn from_strings(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        password_confirmation: Option<&str>,
    ) -> Self {
        Self {
            name: name.map(Value::from),
            email: email.map(Value::from),
            password: password.map(Value::from),
            password_confirmation: password_confirmation.map(Value::from),
        }
    }

    /// Look up a submitted field by its wire name.
    ///
    /// `null`, `""`, `false` and `0` count as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let value = match name {
            "name" => self.name.as_ref(),
            "email" => self.email.as_ref(),
            "password" => self.password.as_ref(),
            "passwordConfirmation" => self.password_confirmation.as_ref(),
            _ => None,
        };

        value.filter(|v| is_present(v))
    }

    /// Borrow every required field, or name the first one that is missing.
    ///
    /// Fields are checked in [`Self::REQUIRED_FIELDS`] order and the check stops
    /// at the first gap.
    pub fn required_fields(&self) -> Result<RequiredFields<'_>, &'static str> {
        let required = |field: &'static str| self.field(field).ok_or(field);

        Ok(RequiredFields {
            name: required("name")?,
            email: required("email")?,
            password: required("password")?,
            password_confirmation: required("passwordConfirmation")?,
        })
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The four sign-up fields, all present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequiredFields<'a> {
    pub name: &'a Value,
    pub email: &'a Value,
    pub password: &'a Value,
    pub password_confirmation: &'a Value,
}

impl RequiredFields<'_> {
    /// Whether password and confirmation are the same JSON value.
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}

/// Text form of a submitted value: strings as-is, anything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

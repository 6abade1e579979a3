use serde::{Deserialize, Serialize};

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when it must be sent.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

/// Data collected from the form for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecureString,
}

/// Public fields of a created customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Backend error scoped to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFeedback {
    /// Id of the input the error belongs to.
    pub field: String,
    pub message: String,
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<CustomerRecord>,
    pub field_error: Option<FieldFeedback>,
}

impl SubmissionResult {
    pub fn succeeded(message: impl Into<String>, user: Option<CustomerRecord>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            user,
            field_error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user: None,
            field_error: None,
        }
    }

    pub fn with_field_error(mut self, field_error: FieldFeedback) -> Self {
        self.field_error = Some(field_error);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_redacted_in_debug() {
        let input = RegistrationInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: SecureString::new("hunter22!"),
        };
        let debug = format!("{:?}", input);
        assert!(!debug.contains("hunter22!"));
        assert!(debug.contains("ada@example.com"));
    }

    #[test]
    fn input_serializes_camel_case_with_plain_password() {
        let input = RegistrationInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: SecureString::new("hunter22!"),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["password"], "hunter22!");
    }
}

//! Field names and the per-field validation rules.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s\-']+$").expect("name pattern is a valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum trimmed name length, counted in Unicode scalar values.
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum trimmed password length, counted in Unicode scalar values. An
/// emoji counts once, not as a surrogate pair.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Inputs the controller knows how to validate, keyed by their `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl FromStr for FieldName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// A failed field rule. `Display` is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Must be at least 2 characters long")]
    NameTooShort,
    #[error("Only letters, spaces, hyphens, and apostrophes are allowed")]
    NameInvalidCharacters,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Checks `raw_value` against the rule for `field`.
///
/// The value is trimmed before checking. `live_password` is the untrimmed
/// value of the password input at the time of the call and is only read
/// for the confirmation field.
pub fn validate(field: FieldName, raw_value: &str, live_password: &str) -> Result<(), FieldError> {
    let value = raw_value.trim();
    match field {
        FieldName::FirstName | FieldName::LastName => {
            if value.chars().count() < MIN_NAME_LENGTH {
                Err(FieldError::NameTooShort)
            } else if !NAME_PATTERN.is_match(value) {
                Err(FieldError::NameInvalidCharacters)
            } else {
                Ok(())
            }
        }
        FieldName::Email => {
            if EMAIL_PATTERN.is_match(value) {
                Ok(())
            } else {
                Err(FieldError::InvalidEmail)
            }
        }
        FieldName::Password => {
            if value.chars().count() < MIN_PASSWORD_LENGTH {
                Err(FieldError::PasswordTooShort)
            } else {
                Ok(())
            }
        }
        FieldName::ConfirmPassword => {
            if value == live_password {
                Ok(())
            } else {
                Err(FieldError::PasswordMismatch)
            }
        }
    }
}

/// Validates by input `name`; names without a rule always pass.
pub fn validate_named(name: &str, raw_value: &str, live_password: &str) -> Result<(), FieldError> {
    match name.parse::<FieldName>() {
        Ok(field) => validate(field, raw_value, live_password),
        Err(()) => Ok(()),
    }
}

/// Maps a backend field name onto the id of the matching input.
pub fn map_backend_field(field: &str) -> &str {
    field.parse::<FieldName>().map(FieldName::as_str).unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_length_counts_characters() {
        assert_eq!(
            validate(FieldName::Password, "🔒🔒🔒🔒", ""),
            Err(FieldError::PasswordTooShort)
        );
        assert_eq!(validate(FieldName::Password, "🔒🔒🔒🔒🔒🔒🔒🔒", ""), Ok(()));
        assert_eq!(validate(FieldName::Password, "pässwörd", ""), Ok(()));
    }

    #[test]
    fn short_names_fail_before_charset_check() {
        assert_eq!(validate(FieldName::FirstName, "A", ""), Err(FieldError::NameTooShort));
        assert_eq!(validate(FieldName::LastName, " 1 ", ""), Err(FieldError::NameTooShort));
        assert_eq!(validate(FieldName::LastName, "", ""), Err(FieldError::NameTooShort));
    }

    #[test]
    fn names_allow_letters_spaces_hyphens_apostrophes() {
        for ok in ["Jo", "Mary Ann", "O'Brien", "Smith-Jones", "  Al  "] {
            assert_eq!(validate(FieldName::FirstName, ok, ""), Ok(()), "{ok}");
        }
        for bad in ["J0hn", "Ann!", "Zoë", "Li_Wei"] {
            assert_eq!(
                validate(FieldName::FirstName, bad, ""),
                Err(FieldError::NameInvalidCharacters),
                "{bad}"
            );
        }
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate(FieldName::Email, "user@example.com", ""), Ok(()));
        assert_eq!(validate(FieldName::Email, " user@example.com ", ""), Ok(()));
        for bad in ["userexample.com", "user@example", "us er@example.com", "@example.com", "user@.com"] {
            assert_eq!(validate(FieldName::Email, bad, ""), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn password_length_uses_trimmed_value() {
        assert_eq!(validate(FieldName::Password, "short", ""), Err(FieldError::PasswordTooShort));
        assert_eq!(validate(FieldName::Password, "   seven   ", ""), Err(FieldError::PasswordTooShort));
        assert_eq!(validate(FieldName::Password, "longenough1", ""), Ok(()));
    }

    #[test]
    fn confirmation_compares_against_live_password() {
        assert_eq!(validate(FieldName::ConfirmPassword, "Secret123!", "Secret123!"), Ok(()));
        assert_eq!(
            validate(FieldName::ConfirmPassword, "Secret123!", "Secret123?"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn unknown_names_pass() {
        assert_eq!(validate_named("newsletter", "", ""), Ok(()));
        assert_eq!(validate_named("email", "nope", ""), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn backend_fields_map_to_inputs() {
        assert_eq!(map_backend_field("email"), "email");
        assert_eq!(map_backend_field("firstName"), "firstName");
        assert_eq!(map_backend_field("phone"), "phone");
        assert_eq!(map_backend_field("confirmPassword"), "confirmPassword");
    }
}

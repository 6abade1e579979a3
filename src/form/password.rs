//! Advisory password-strength requirements.

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl PasswordRequirement {
    pub const ALL: [PasswordRequirement; 5] = [
        PasswordRequirement::Length,
        PasswordRequirement::Uppercase,
        PasswordRequirement::Lowercase,
        PasswordRequirement::Number,
        PasswordRequirement::Special,
    ];

    /// Id of the indicator element for this requirement.
    pub fn indicator_id(self) -> &'static str {
        match self {
            PasswordRequirement::Length => "req-length",
            PasswordRequirement::Uppercase => "req-uppercase",
            PasswordRequirement::Lowercase => "req-lowercase",
            PasswordRequirement::Number => "req-number",
            PasswordRequirement::Special => "req-special",
        }
    }

    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            PasswordRequirement::Length => password.chars().count() >= super::fields::MIN_PASSWORD_LENGTH,
            PasswordRequirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRequirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRequirement::Number => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRequirement::Special => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

/// The five requirements evaluated against one password value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRequirementSet {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRequirementSet {
    /// Evaluates every requirement against the raw (untrimmed) value.
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: PasswordRequirement::Length.is_met_by(password),
            uppercase: PasswordRequirement::Uppercase.is_met_by(password),
            lowercase: PasswordRequirement::Lowercase.is_met_by(password),
            number: PasswordRequirement::Number.is_met_by(password),
            special: PasswordRequirement::Special.is_met_by(password),
        }
    }

    pub fn is_met(&self, requirement: PasswordRequirement) -> bool {
        match requirement {
            PasswordRequirement::Length => self.length,
            PasswordRequirement::Uppercase => self.uppercase,
            PasswordRequirement::Lowercase => self.lowercase,
            PasswordRequirement::Number => self.number,
            PasswordRequirement::Special => self.special,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PasswordRequirement, bool)> + '_ {
        PasswordRequirement::ALL
            .into_iter()
            .map(move |requirement| (requirement, self.is_met(requirement)))
    }

    pub fn all_met(&self) -> bool {
        self.iter().all(|(_, met)| met)
    }
}

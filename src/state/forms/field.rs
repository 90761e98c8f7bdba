//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    ContestType,
    TeamName,
    TeamSize,
    AgreeToTerms,
}

impl FieldName {
    /// All fields in the order they are rendered and tabbed through
    pub const ALL: [FieldName; 7] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::ContestType,
        FieldName::TeamName,
        FieldName::TeamSize,
        FieldName::AgreeToTerms,
    ];

    /// Stable key used in logs and serialized payloads
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ContestType => "contest_type",
            Self::TeamName => "team_name",
            Self::TeamSize => "team_size",
            Self::AgreeToTerms => "agree_to_terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::ContestType => "Contest Type",
            Self::TeamName => "Team Name (if applicable)",
            Self::TeamSize => "Team Size (if applicable)",
            Self::AgreeToTerms => "I agree to the terms and conditions",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Email => "Enter your email",
            Self::Phone => "Enter your phone number",
            Self::ContestType => "Select a contest",
            Self::TeamName => "Enter your team name",
            Self::TeamSize => "Select team size",
            Self::AgreeToTerms => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FullName | Self::Email | Self::Phone | Self::TeamName => FieldKind::Text,
            Self::ContestType => FieldKind::Select(CONTEST_TYPE_OPTIONS),
            Self::TeamSize => FieldKind::Select(TEAM_SIZE_OPTIONS),
            Self::AgreeToTerms => FieldKind::Checkbox,
        }
    }

    /// Whether the field must pass validation before submission
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::TeamName | Self::TeamSize)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One choice of a select control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Contest identifiers accepted by the contest type select
pub const CONTEST_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "coding",
        label: "Coding Challenge",
    },
    SelectOption {
        value: "hackathon",
        label: "24-Hour Hackathon",
    },
    SelectOption {
        value: "datascience",
        label: "Data Science Competition",
    },
];

pub const TEAM_SIZE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "1",
        label: "Individual",
    },
    SelectOption {
        value: "2",
        label: "2 members",
    },
    SelectOption {
        value: "3",
        label: "3 members",
    },
    SelectOption {
        value: "4",
        label: "4 members",
    },
];

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Empty string means "nothing selected"
    Select(&'static [SelectOption]),
    Checkbox,
}

impl FieldKind {
    /// Cycle a select value forward. Wraps through the empty selection.
    pub fn next_option(&self, current: &str) -> Option<&'static str> {
        let FieldKind::Select(options) = self else {
            return None;
        };
        match options.iter().position(|o| o.value == current) {
            None => options.first().map(|o| o.value),
            Some(i) if i + 1 < options.len() => Some(options[i + 1].value),
            Some(_) => Some(""),
        }
    }

    /// Cycle a select value backward. Wraps through the empty selection.
    pub fn prev_option(&self, current: &str) -> Option<&'static str> {
        let FieldKind::Select(options) = self else {
            return None;
        };
        match options.iter().position(|o| o.value == current) {
            None => options.last().map(|o| o.value),
            Some(0) => Some(""),
            Some(i) => Some(options[i - 1].value),
        }
    }

    /// Label for a stored select value
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        match self {
            FieldKind::Select(options) => options.iter().find(|o| o.value == value).map(|o| o.label),
            _ => None,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_in_display_order() {
        assert_eq!(FieldName::ALL.len(), 7);
        assert_eq!(FieldName::ALL[0], FieldName::FullName);
        assert_eq!(FieldName::ALL[6], FieldName::AgreeToTerms);
    }

    #[test]
    fn test_optional_fields() {
        assert!(!FieldName::TeamName.is_required());
        assert!(!FieldName::TeamSize.is_required());
        assert!(FieldName::AgreeToTerms.is_required());
    }

    #[test]
    fn test_next_option_starts_at_first() {
        let kind = FieldName::ContestType.kind();
        assert_eq!(kind.next_option(""), Some("coding"));
        assert_eq!(kind.next_option("coding"), Some("hackathon"));
        assert_eq!(kind.next_option("datascience"), Some(""));
    }

    #[test]
    fn test_prev_option_wraps_to_last() {
        let kind = FieldName::TeamSize.kind();
        assert_eq!(kind.prev_option(""), Some("4"));
        assert_eq!(kind.prev_option("1"), Some(""));
        assert_eq!(kind.prev_option("3"), Some("2"));
    }

    #[test]
    fn test_option_cycling_on_text_field_is_none() {
        assert_eq!(FieldName::Email.kind().next_option("x"), None);
        assert_eq!(FieldKind::Checkbox.prev_option(""), None);
    }

    #[test]
    fn test_option_label() {
        let kind = FieldName::ContestType.kind();
        assert_eq!(kind.option_label("hackathon"), Some("24-Hour Hackathon"));
        assert_eq!(kind.option_label("chess"), None);
    }

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("abc"), FieldValue::Text("abc".to_string()));
        assert_eq!(FieldValue::from(true), FieldValue::Flag(true));
        assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldName::AgreeToTerms.to_string(), "agree_to_terms");
    }
}

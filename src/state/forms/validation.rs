//! Registration form validation

use super::field::{FieldName, CONTEST_TYPE_OPTIONS};
use super::registration_form::RegistrationForm;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Loose `something@something.something` shape, searched anywhere in the value
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

/// Per-field validation messages. A field is present iff it failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for a field, if it failed validation
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failing fields in display order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// First failing field in display order
    pub fn first_field(&self) -> Option<FieldName> {
        self.errors.keys().next().copied()
    }
}

/// Validate a complete form. Every rule runs; no rule depends on another field.
pub fn validate(form: &RegistrationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert(FieldName::FullName, "Full name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(FieldName::Email, "Email is required");
    } else if !EMAIL_REGEX.is_match(&form.email) {
        errors.insert(FieldName::Email, "Email is invalid");
    }

    if form.phone.trim().is_empty() {
        errors.insert(FieldName::Phone, "Phone number is required");
    }

    if !is_known_contest(&form.contest_type) {
        errors.insert(FieldName::ContestType, "Please select a contest type");
    }

    if !form.agree_to_terms {
        errors.insert(
            FieldName::AgreeToTerms,
            "You must agree to the terms and conditions",
        );
    }

    errors
}

fn is_known_contest(id: &str) -> bool {
    CONTEST_TYPE_OPTIONS.iter().any(|o| o.value == id)
}

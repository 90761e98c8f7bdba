//! Registration form values and focus handling

use super::field::{FieldName, FieldValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when writing a value into the form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{field}` does not accept a {given} value")]
    ValueKindMismatch {
        field: FieldName,
        given: &'static str,
    },
}

/// Values entered into the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contest_type: String,
    pub team_name: String,
    pub team_size: String,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a text or select field. `None` for the terms checkbox.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::ContestType => &self.contest_type,
            FieldName::TeamName => &self.team_name,
            FieldName::TeamSize => &self.team_size,
            FieldName::AgreeToTerms => return None,
        };
        Some(value.as_str())
    }

    pub fn value(&self, field: FieldName) -> FieldValue {
        match self.text(field) {
            Some(text) => FieldValue::Text(text.to_string()),
            None => FieldValue::Flag(self.agree_to_terms),
        }
    }

    /// Overwrite a single field. Other fields are left alone.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        let given = value.kind_name();
        match value {
            FieldValue::Flag(flag) if field == FieldName::AgreeToTerms => {
                self.agree_to_terms = flag;
            }
            FieldValue::Text(text) => match self.text_slot(field) {
                Some(slot) => *slot = text,
                None => return Err(FormError::ValueKindMismatch { field, given }),
            },
            FieldValue::Flag(_) => return Err(FormError::ValueKindMismatch { field, given }),
        }
        Ok(())
    }

    fn text_slot(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FullName => Some(&mut self.full_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::ContestType => Some(&mut self.contest_type),
            FieldName::TeamName => Some(&mut self.team_name),
            FieldName::TeamSize => Some(&mut self.team_size),
            FieldName::AgreeToTerms => None,
        }
    }

    /// True when every field holds its initial empty value
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trait for focus cycling over a fixed number of slots
pub trait Cycle {
    fn slot_count(&self) -> usize;
    fn active_slot(&self) -> usize;
    fn set_active_slot(&mut self, index: usize);
    fn next_slot(&mut self) {
        let count = self.slot_count();
        if count == 0 {
            return;
        }
        let current = self.active_slot();
        self.set_active_slot((current + 1) % count);
    }
    fn prev_slot(&mut self) {
        let count = self.slot_count();
        if count == 0 {
            return;
        }
        let current = self.active_slot();
        if current == 0 {
            self.set_active_slot(count - 1);
        } else {
            self.set_active_slot(current - 1);
        }
    }
}

/// Keyboard focus within the registration form: one slot per field plus the submit button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFocus {
    pub active_field_index: usize,
}

impl FormFocus {
    /// Slot index of the submit button
    pub const SUBMIT_SLOT: usize = FieldName::ALL.len();

    /// Field under focus, `None` when the submit button is focused
    pub fn field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT_SLOT
    }

    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    pub fn reset(&mut self) {
        self.active_field_index = 0;
    }
}

impl Cycle for FormFocus {
    fn slot_count(&self) -> usize {
        Self::SUBMIT_SLOT + 1
    }
    fn active_slot(&self) -> usize {
        self.active_field_index
    }
    fn set_active_slot(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_SLOT);
    }
}

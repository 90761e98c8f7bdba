//! Form domain layer
//!
//! Type-safe handling of the contest registration form:
//! - `field`: field names, kinds and select options
//! - `registration_form`: form values and keyboard focus
//! - `validation`: pure validation of a complete form
//! - `controller`: submission state machine

mod controller;
mod field;
mod registration_form;
mod validation;

pub use controller::{
    RegistrationFormController, SubmissionStatus, SubmissionUpdate, SubmitOutcome,
};
pub use field::{FieldKind, FieldName, FieldValue};
pub use registration_form::{Cycle, FormFocus, RegistrationForm};

#[cfg(test)]
pub use field::CONTEST_TYPE_OPTIONS;

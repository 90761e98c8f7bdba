//! Trait abstraction for the registration service to enable mocking in tests

use crate::state::RegistrationForm;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned when a registration is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub id: Uuid,
    pub contest_type: String,
    pub submitted_at: DateTime<Utc>,
}

impl RegistrationReceipt {
    pub fn for_form(form: &RegistrationForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            contest_type: form.contest_type.clone(),
            submitted_at: Utc::now(),
        }
    }
}

/// Reasons a registration can fail once it has left the form
#[allow(dead_code)] // constructed by real backends, the simulated one always accepts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("registration service unavailable: {0}")]
    Unavailable(String),
}

/// Service that accepts validated registrations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Submit a validated form and wait for the outcome
    async fn register(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationReceipt, RegistrationError>;
}

//! In-process stand-in for the contest registration backend
//!
//! Waits a fixed latency and always accepts the registration. The
//! latency comes from configuration so the wait can be tuned without
//! touching the form state machine.

use super::traits::{RegistrationError, RegistrationReceipt, RegistrationService};
use crate::state::RegistrationForm;
use async_trait::async_trait;
use std::time::Duration;

/// Default latency of the simulated backend
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Registration service that answers after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedRegistrationService {
    latency: Duration,
}

impl SimulatedRegistrationService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[cfg(test)]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedRegistrationService {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl RegistrationService for SimulatedRegistrationService {
    async fn register(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        tokio::time::sleep(self.latency).await;
        let receipt = RegistrationReceipt::for_form(&form);
        tracing::debug!(
            id = %receipt.id,
            contest = %receipt.contest_type,
            "simulated registration accepted"
        );
        Ok(receipt)
    }
}

//! Registration service boundary

mod client;
mod traits;

pub use client::{SimulatedRegistrationService, DEFAULT_LATENCY};
pub use traits::{RegistrationError, RegistrationReceipt, RegistrationService};

#[cfg(test)]
pub use traits::MockRegistrationService;

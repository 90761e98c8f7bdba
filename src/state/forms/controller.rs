//! Registration form controller
//!
//! Owns the form values, the result of the last validation pass and the
//! submission status. The registration call and the success display timeout
//! run on spawned tasks; their outcomes come back as [`SubmissionEvent`]s
//! which the UI loop drains with [`RegistrationFormController::poll_events`].

use super::field::{FieldName, FieldValue};
use super::registration_form::{FormError, RegistrationForm};
use super::validation::{validate, ValidationErrors};
use crate::registration::{RegistrationError, RegistrationReceipt, RegistrationService};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant as TokioInstant;

/// How long the success state is shown before reverting to idle
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

/// Lifecycle of the most recent submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Submitting => "Submitting...",
            Self::Idle | Self::Success => "Register Now",
        }
    }
}

/// Result of calling [`RegistrationFormController::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid and has been handed to the registration service
    Started,
    /// Validation failed; errors are available through `errors()`
    Invalid,
    /// A submission is already in flight
    Ignored,
}

/// Scheduled transitions delivered back to the controller
#[derive(Debug)]
pub enum SubmissionEvent {
    Completed {
        generation: u64,
        /// When the service answered; the success window is measured from here
        completed_at: TokioInstant,
        result: Result<RegistrationReceipt, RegistrationError>,
    },
    SuccessExpired {
        generation: u64,
    },
}

/// State change produced by applying a [`SubmissionEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionUpdate {
    Registered(RegistrationReceipt),
    Failed(RegistrationError),
    SuccessCleared,
}

pub struct RegistrationFormController {
    fields: RegistrationForm,
    errors: ValidationErrors,
    status: SubmissionStatus,
    last_failure: Option<RegistrationError>,
    success_since: Option<Instant>,
    service: Arc<dyn RegistrationService>,
    /// Bumped on every accepted submit so stale events can be dropped
    generation: u64,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    submit_task: Option<JoinHandle<()>>,
    revert_task: Option<JoinHandle<()>>,
}

impl RegistrationFormController {
    pub fn new(service: Arc<dyn RegistrationService>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            fields: RegistrationForm::new(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            last_failure: None,
            success_since: None,
            service,
            generation: 0,
            events_tx,
            events_rx,
            submit_task: None,
            revert_task: None,
        }
    }

    pub fn fields(&self) -> &RegistrationForm {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Failure reported by the service for the most recent submission
    pub fn last_failure(&self) -> Option<&RegistrationError> {
        self.last_failure.as_ref()
    }

    /// Time spent in the success state, for the banner animation
    pub fn success_elapsed(&self) -> Option<Duration> {
        self.success_since.map(|since| since.elapsed())
    }

    /// Overwrite one field. Does not validate and leaves `errors` alone.
    pub fn update_field(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        self.fields.set(field, value)?;
        tracing::debug!(field = %field, "form field updated");
        Ok(())
    }

    /// Clear all fields and errors. The submission status is not affected.
    pub fn reset(&mut self) {
        self.fields = RegistrationForm::default();
        self.errors.clear();
    }

    /// Validate the form and, if it passes, hand it to the registration service
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("submit ignored, registration already in flight");
            return SubmitOutcome::Ignored;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            tracing::debug!(failing = self.errors.len(), "registration form invalid");
            return SubmitOutcome::Invalid;
        }

        if let Some(task) = self.revert_task.take() {
            task.abort();
        }
        self.generation += 1;
        self.status = SubmissionStatus::Submitting;
        self.success_since = None;
        self.last_failure = None;

        tracing::info!(contest = %self.fields.contest_type, "submitting registration");

        let generation = self.generation;
        let service = Arc::clone(&self.service);
        let form = self.fields.clone();
        let tx = self.events_tx.clone();
        self.submit_task = Some(tokio::spawn(async move {
            let result = service.register(form).await;
            let _ = tx.send(SubmissionEvent::Completed {
                generation,
                completed_at: TokioInstant::now(),
                result,
            });
        }));

        SubmitOutcome::Started
    }

    /// Apply every event that has arrived since the last call, without blocking
    pub fn poll_events(&mut self) -> Vec<SubmissionUpdate> {
        let mut updates = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(update) = self.handle_event(event) {
                updates.push(update);
            }
        }
        updates
    }

    /// Apply a single scheduled transition. Events from superseded submissions are dropped.
    pub fn handle_event(&mut self, event: SubmissionEvent) -> Option<SubmissionUpdate> {
        match event {
            SubmissionEvent::Completed {
                generation,
                completed_at,
                result,
            } => {
                if generation != self.generation || !self.is_submitting() {
                    return None;
                }
                self.submit_task = None;
                match result {
                    Ok(receipt) => {
                        tracing::info!(id = %receipt.id, "registration accepted");
                        self.status = SubmissionStatus::Success;
                        self.fields = RegistrationForm::default();
                        self.errors.clear();
                        self.success_since = Some(Instant::now());
                        self.schedule_revert(generation, completed_at);
                        Some(SubmissionUpdate::Registered(receipt))
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "registration failed");
                        self.status = SubmissionStatus::Idle;
                        self.last_failure = Some(err.clone());
                        Some(SubmissionUpdate::Failed(err))
                    }
                }
            }
            SubmissionEvent::SuccessExpired { generation } => {
                if generation != self.generation || self.status != SubmissionStatus::Success {
                    return None;
                }
                self.revert_task = None;
                self.status = SubmissionStatus::Idle;
                self.success_since = None;
                Some(SubmissionUpdate::SuccessCleared)
            }
        }
    }

    fn schedule_revert(&mut self, generation: u64, completed_at: TokioInstant) {
        let tx = self.events_tx.clone();
        self.revert_task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(completed_at + SUCCESS_DISPLAY).await;
            let _ = tx.send(SubmissionEvent::SuccessExpired { generation });
        }));
    }

    /// Wait for the next scheduled transition
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.recv().await
    }
}

impl Drop for RegistrationFormController {
    fn drop(&mut self) {
        for task in [self.submit_task.take(), self.revert_task.take()]
            .into_iter()
            .flatten()
        {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{MockRegistrationService, SimulatedRegistrationService};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LATENCY: Duration = Duration::from_millis(1500);
    const SLACK: Duration = Duration::from_millis(5);

    fn simulated(latency: Duration) -> RegistrationFormController {
        RegistrationFormController::new(Arc::new(SimulatedRegistrationService::new(latency)))
    }

    fn fill_valid(controller: &mut RegistrationFormController) {
        controller
            .update_field(FieldName::FullName, "Ada Lovelace".into())
            .unwrap();
        controller
            .update_field(FieldName::Email, "ada@example.com".into())
            .unwrap();
        controller
            .update_field(FieldName::Phone, "555-0100".into())
            .unwrap();
        controller
            .update_field(FieldName::ContestType, "coding".into())
            .unwrap();
        controller
            .update_field(FieldName::AgreeToTerms, true.into())
            .unwrap();
    }

    fn assert_elapsed(started: TokioInstant, expected: Duration) {
        let elapsed = started.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + SLACK,
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    /// Succeeds after a delay and counts completed calls
    struct CountingService {
        latency: Duration,
        completed: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl RegistrationService for CountingService {
        async fn register(
            &self,
            form: RegistrationForm,
        ) -> Result<RegistrationReceipt, RegistrationError> {
            tokio::time::sleep(self.latency).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(RegistrationReceipt::for_form(&form))
        }
    }

    mod field_updates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_new_controller_is_empty_and_idle() {
            let controller = simulated(LATENCY);
            assert!(controller.fields().is_empty());
            assert!(controller.errors().is_empty());
            assert_eq!(controller.status(), SubmissionStatus::Idle);
            assert!(controller.last_failure().is_none());
            assert!(controller.success_elapsed().is_none());
        }

        #[tokio::test]
        async fn test_update_field_does_not_touch_errors() {
            let mut controller = simulated(LATENCY);
            assert_eq!(controller.submit(), SubmitOutcome::Invalid);
            let before = controller.errors().clone();

            controller
                .update_field(FieldName::FullName, "Ada".into())
                .unwrap();

            assert_eq!(controller.errors(), &before);
            assert!(controller.errors().contains(FieldName::FullName));
            assert_eq!(controller.fields().full_name, "Ada");
        }

        #[tokio::test]
        async fn test_update_field_rejects_wrong_value_kind() {
            let mut controller = simulated(LATENCY);
            let result = controller.update_field(FieldName::Email, false.into());
            assert!(result.is_err());
            assert!(controller.fields().is_empty());
        }

        #[tokio::test]
        async fn test_reset_clears_fields_and_errors() {
            let mut controller = simulated(LATENCY);
            controller
                .update_field(FieldName::TeamName, "Rustaceans".into())
                .unwrap();
            controller.submit();
            assert!(!controller.errors().is_empty());

            controller.reset();

            assert!(controller.fields().is_empty());
            assert!(controller.errors().is_empty());
            assert_eq!(controller.status(), SubmissionStatus::Idle);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_submit_keeps_status_and_reports_errors() {
            let mut controller = simulated(LATENCY);
            controller
                .update_field(FieldName::Email, "not-an-email".into())
                .unwrap();

            assert_eq!(controller.submit(), SubmitOutcome::Invalid);

            assert_eq!(controller.status(), SubmissionStatus::Idle);
            assert_eq!(
                controller.errors().get(FieldName::Email),
                Some("Email is invalid")
            );
            assert_eq!(controller.fields().email, "not-an-email");
        }

        #[tokio::test]
        async fn test_errors_are_recomputed_wholesale() {
            let mut controller = simulated(LATENCY);
            controller.submit();
            assert_eq!(controller.errors().len(), 5);

            controller
                .update_field(FieldName::FullName, "Ada".into())
                .unwrap();
            controller
                .update_field(FieldName::Phone, "555".into())
                .unwrap();
            controller.submit();

            assert_eq!(controller.errors().len(), 3);
            assert!(!controller.errors().contains(FieldName::FullName));
            assert!(!controller.errors().contains(FieldName::Phone));
        }

        #[tokio::test(start_paused = true)]
        async fn test_valid_submit_moves_to_submitting_then_success() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            let started = TokioInstant::now();

            assert_eq!(controller.submit(), SubmitOutcome::Started);
            assert_eq!(controller.status(), SubmissionStatus::Submitting);
            assert!(controller.errors().is_empty());
            assert_eq!(controller.status().submit_label(), "Submitting...");

            let event = controller.next_event().await.unwrap();
            assert_elapsed(started, LATENCY);

            let update = controller.handle_event(event);
            assert!(matches!(update, Some(SubmissionUpdate::Registered(_))));
            assert_eq!(controller.status(), SubmissionStatus::Success);
            assert!(controller.fields().is_empty());
            assert!(controller.errors().is_empty());
            assert!(controller.success_elapsed().is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_submit_while_submitting_is_ignored() {
            let mut service = MockRegistrationService::new();
            service
                .expect_register()
                .times(1)
                .returning(|form| Ok(RegistrationReceipt::for_form(&form)));
            let mut controller = RegistrationFormController::new(Arc::new(service));
            fill_valid(&mut controller);

            assert_eq!(controller.submit(), SubmitOutcome::Started);
            assert_eq!(controller.submit(), SubmitOutcome::Ignored);
            assert_eq!(controller.status(), SubmissionStatus::Submitting);

            let event = controller.next_event().await.unwrap();
            assert!(matches!(event, SubmissionEvent::Completed { .. }));
            controller.handle_event(event);

            // Only the success timeout is left; no second completion was scheduled
            let event = controller.next_event().await.unwrap();
            assert!(matches!(event, SubmissionEvent::SuccessExpired { .. }));
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_reverts_to_idle_after_display_window() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            controller.submit();
            let event = controller.next_event().await.unwrap();
            controller.handle_event(event);
            let success_at = TokioInstant::now();

            // Edits made while the banner is up must survive the revert
            controller
                .update_field(FieldName::TeamName, "Rustaceans".into())
                .unwrap();

            let event = controller.next_event().await.unwrap();
            assert_elapsed(success_at, SUCCESS_DISPLAY);
            assert_eq!(
                controller.handle_event(event),
                Some(SubmissionUpdate::SuccessCleared)
            );
            assert_eq!(controller.status(), SubmissionStatus::Idle);
            assert_eq!(controller.fields().team_name, "Rustaceans");
            assert!(controller.errors().is_empty());
            assert!(controller.success_elapsed().is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_invalid_submit_during_success_keeps_success() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            controller.submit();
            let event = controller.next_event().await.unwrap();
            controller.handle_event(event);

            assert_eq!(controller.submit(), SubmitOutcome::Invalid);
            assert_eq!(controller.status(), SubmissionStatus::Success);

            let event = controller.next_event().await.unwrap();
            assert_eq!(
                controller.handle_event(event),
                Some(SubmissionUpdate::SuccessCleared)
            );
            assert!(!controller.errors().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_resubmit_during_success_cancels_pending_revert() {
            let mut controller = simulated(Duration::from_millis(5000));
            fill_valid(&mut controller);
            controller.submit();
            let event = controller.next_event().await.unwrap();
            controller.handle_event(event);
            assert_eq!(controller.status(), SubmissionStatus::Success);

            fill_valid(&mut controller);
            assert_eq!(controller.submit(), SubmitOutcome::Started);

            // The old 3s revert is gone; the next event is the 5s completion
            let event = controller.next_event().await.unwrap();
            assert!(matches!(event, SubmissionEvent::Completed { .. }));
            controller.handle_event(event);
            assert_eq!(controller.status(), SubmissionStatus::Success);
        }

        #[tokio::test]
        async fn test_stale_events_are_dropped() {
            let mut controller = simulated(LATENCY);
            let stale = SubmissionEvent::SuccessExpired { generation: 42 };
            assert_eq!(controller.handle_event(stale), None);

            let stale = SubmissionEvent::Completed {
                generation: 0,
                completed_at: TokioInstant::now(),
                result: Err(RegistrationError::Rejected("late".to_string())),
            };
            assert_eq!(controller.handle_event(stale), None);
            assert_eq!(controller.status(), SubmissionStatus::Idle);
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_service_failure_returns_to_idle_and_keeps_fields() {
            let mut service = MockRegistrationService::new();
            service
                .expect_register()
                .times(1)
                .returning(|_| Err(RegistrationError::Unavailable("offline".to_string())));
            let mut controller = RegistrationFormController::new(Arc::new(service));
            fill_valid(&mut controller);
            let submitted = controller.fields().clone();

            controller.submit();
            let event = controller.next_event().await.unwrap();
            let update = controller.handle_event(event);

            assert_eq!(
                update,
                Some(SubmissionUpdate::Failed(RegistrationError::Unavailable(
                    "offline".to_string()
                )))
            );
            assert_eq!(controller.status(), SubmissionStatus::Idle);
            assert_eq!(controller.fields(), &submitted);
            assert_eq!(
                controller.last_failure().map(|e| e.to_string()),
                Some("registration service unavailable: offline".to_string())
            );
        }

        #[tokio::test]
        async fn test_next_submit_clears_last_failure() {
            let mut service = MockRegistrationService::new();
            let mut calls = 0;
            service.expect_register().times(2).returning(move |form| {
                calls += 1;
                if calls == 1 {
                    Err(RegistrationError::Rejected("full".to_string()))
                } else {
                    Ok(RegistrationReceipt::for_form(&form))
                }
            });
            let mut controller = RegistrationFormController::new(Arc::new(service));
            fill_valid(&mut controller);

            controller.submit();
            let event = controller.next_event().await.unwrap();
            controller.handle_event(event);
            assert!(controller.last_failure().is_some());

            controller.submit();
            assert!(controller.last_failure().is_none());
            let event = controller.next_event().await.unwrap();
            assert!(matches!(
                controller.handle_event(event),
                Some(SubmissionUpdate::Registered(_))
            ));
        }
    }

    mod polling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_poll_events_is_empty_before_latency() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            controller.submit();

            tokio::time::sleep(Duration::from_millis(1000)).await;
            assert!(controller.poll_events().is_empty());
            assert_eq!(controller.status(), SubmissionStatus::Submitting);
        }

        #[tokio::test(start_paused = true)]
        async fn test_poll_events_applies_completion() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            controller.submit();

            tokio::time::sleep(LATENCY + Duration::from_millis(100)).await;
            let updates = controller.poll_events();

            assert_eq!(updates.len(), 1);
            assert!(matches!(updates[0], SubmissionUpdate::Registered(_)));
            assert_eq!(controller.status(), SubmissionStatus::Success);
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_window_starts_when_service_answers() {
            let mut controller = simulated(LATENCY);
            fill_valid(&mut controller);
            let started = TokioInstant::now();
            controller.submit();

            // The loop drains the completion well after the service answered
            let late = Duration::from_millis(100);
            tokio::time::sleep(LATENCY + late).await;
            assert_eq!(controller.poll_events().len(), 1);

            let event = controller.next_event().await.unwrap();
            assert!(matches!(event, SubmissionEvent::SuccessExpired { .. }));
            assert_elapsed(started, LATENCY + SUCCESS_DISPLAY);
            assert_eq!(
                controller.handle_event(event),
                Some(SubmissionUpdate::SuccessCleared)
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_drop_aborts_in_flight_submission() {
            let completed = Arc::new(AtomicUsize::new(0));
            let service = CountingService {
                latency: LATENCY,
                completed: Arc::clone(&completed),
            };
            let mut controller = RegistrationFormController::new(Arc::new(service));
            fill_valid(&mut controller);
            controller.submit();

            tokio::time::sleep(Duration::from_millis(500)).await;
            drop(controller);
            tokio::time::sleep(LATENCY * 2).await;

            assert_eq!(completed.load(Ordering::SeqCst), 0);
        }
    }
}

//! Application state and core logic

use crate::config::TuiConfig;
use crate::registration::{RegistrationService, SimulatedRegistrationService};
use crate::state::{
    AppState, ContestTab, CountdownTimer, Cycle, FieldKind, FieldName, FieldValue,
    RegistrationFormController, SubmissionUpdate, SubmitOutcome, View, PAST_CONTESTS,
    UPCOMING_CONTESTS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

/// How long the success banner animates in
pub const BANNER_ANIMATION: Duration = Duration::from_millis(400);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration form and its submission state machine
    pub form: RegistrationFormController,
    /// Countdown to the next contest
    pub countdown: CountdownTimer,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the simulated registration service
    pub fn new(config: &TuiConfig) -> Self {
        let service = SimulatedRegistrationService::new(config.submission_latency());
        Self::with_service(config, Arc::new(service))
    }

    /// Create an App that submits registrations to the given service
    pub fn with_service(config: &TuiConfig, service: Arc<dyn RegistrationService>) -> Self {
        Self {
            state: AppState::new(Some(config.theme())),
            form: RegistrationFormController::new(service),
            countdown: CountdownTimer::from_naive(config.countdown_target()),
            quit: false,
        }
    }

    /// Advance timers and apply finished submissions. Called once per loop iteration.
    pub fn tick(&mut self) {
        self.countdown.tick();
        self.state.theme_toggle.mount(&self.state.theme);

        for update in self.form.poll_events() {
            match update {
                SubmissionUpdate::Registered(receipt) => {
                    let id = receipt.id.to_string();
                    self.state.form_focus.reset();
                    self.state.status_message = Some(format!(
                        "Registration {} confirmed",
                        truncate_str(&id, 11)
                    ));
                }
                SubmissionUpdate::Failed(err) => {
                    self.push_error(format!("Registration failed: {err}"));
                }
                SubmissionUpdate::SuccessCleared => {}
            }
        }
    }

    /// True while something on screen is changing faster than the countdown
    pub fn is_animating(&self) -> bool {
        self.form.is_submitting()
            || self
                .form
                .success_elapsed()
                .is_some_and(|elapsed| elapsed < BANNER_ANIMATION)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Global shortcuts
        match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let toggle = self.state.theme_toggle;
                if let Some(theme) = toggle.toggle(&mut self.state.theme) {
                    self.state.status_message = Some(format!("{} theme", theme.label()));
                }
                return Ok(());
            }
            KeyCode::F(n) => {
                if let Some(view) = View::from_function_key(n) {
                    self.state.navigate(view);
                }
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Contests => self.handle_contests_key(key),
            View::Register => self.handle_register_key(key)?,
            View::Testimonials => self.handle_testimonials_key(key),
            View::Faq => self.handle_faq_key(key),
        }
        Ok(())
    }

    /// Handle keys in Contests view
    fn handle_contests_key(&mut self, key: KeyEvent) {
        let count = match self.state.contest_tab {
            ContestTab::Upcoming => UPCOMING_CONTESTS.len(),
            ContestTab::Past => PAST_CONTESTS.len(),
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.toggle_contest_tab();
                self.state.selected_contest = 0;
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_contest_selection_next(count);
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                self.state.move_contest_selection_prev();
            }
            KeyCode::Enter if self.state.contest_tab == ContestTab::Upcoming => {
                self.register_for_selected_contest();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Jump to the form with the highlighted contest preselected
    fn register_for_selected_contest(&mut self) {
        let Some(contest) = UPCOMING_CONTESTS.get(self.state.selected_contest) else {
            return;
        };
        if self
            .form
            .update_field(FieldName::ContestType, contest.id.into())
            .is_ok()
        {
            self.state.navigate(View::Register);
            self.state.form_focus.reset();
            self.state.status_message = Some(format!("Registering for {}", contest.name));
        }
    }

    /// Handle keys in Register view
    fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let focused = self.state.form_focus.field();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form_focus.next_slot(),
            KeyCode::BackTab | KeyCode::Up => self.state.form_focus.prev_slot(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_registration();
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::FORM_MODIFIER) => {
                self.form.reset();
                self.state.form_focus.reset();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Esc => self.state.navigate(View::Contests),
            KeyCode::Enter => match focused {
                None => self.submit_registration(),
                Some(field) => match field.kind() {
                    FieldKind::Text => self.state.form_focus.next_slot(),
                    FieldKind::Select(_) => self.cycle_option(field, true)?,
                    FieldKind::Checkbox => self.toggle_checkbox(field)?,
                },
            },
            KeyCode::Left => {
                if let Some(field) = focused {
                    self.cycle_option(field, false)?;
                }
            }
            KeyCode::Right => {
                if let Some(field) = focused {
                    self.cycle_option(field, true)?;
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                if let Some(field) = focused {
                    self.form_input_char(field, c)?;
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focused {
                    self.form_backspace(field)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and submit, moving focus to the first invalid field on failure
    fn submit_registration(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Started => {
                self.state.status_message = Some("Submitting registration...".to_string());
            }
            SubmitOutcome::Invalid => {
                let errors = self.form.errors();
                if let Some(field) = errors.first_field() {
                    self.state.form_focus.focus_field(field);
                }
                self.state.status_message = Some(match errors.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Handle character input on the focused field
    fn form_input_char(&mut self, field: FieldName, c: char) -> Result<()> {
        match field.kind() {
            FieldKind::Text => {
                let mut text = self.form.fields().text(field).unwrap_or_default().to_string();
                text.push(c);
                self.form.update_field(field, text.into())?;
            }
            FieldKind::Select(_) if c == ' ' => self.cycle_option(field, true)?,
            FieldKind::Checkbox if c == ' ' => self.toggle_checkbox(field)?,
            _ => {}
        }
        Ok(())
    }

    /// Handle backspace on the focused field
    fn form_backspace(&mut self, field: FieldName) -> Result<()> {
        match field.kind() {
            FieldKind::Text => {
                let mut text = self.form.fields().text(field).unwrap_or_default().to_string();
                text.pop();
                self.form.update_field(field, text.into())?;
            }
            FieldKind::Select(_) => self.form.update_field(field, "".into())?,
            FieldKind::Checkbox => {}
        }
        Ok(())
    }

    fn cycle_option(&mut self, field: FieldName, forward: bool) -> Result<()> {
        let kind = field.kind();
        let current = self.form.fields().text(field).unwrap_or_default();
        let next = if forward {
            kind.next_option(current)
        } else {
            kind.prev_option(current)
        };
        if let Some(value) = next {
            self.form.update_field(field, value.into())?;
        }
        Ok(())
    }

    fn toggle_checkbox(&mut self, field: FieldName) -> Result<()> {
        if let FieldValue::Flag(checked) = self.form.fields().value(field) {
            self.form.update_field(field, (!checked).into())?;
        }
        Ok(())
    }

    /// Handle keys in Testimonials view
    fn handle_testimonials_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.carousel.next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.carousel.prev(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.state.carousel.select(index);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in FAQ view
    fn handle_faq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.faq.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.faq.cursor_up(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_at_cursor(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.state.faq.slot_count() {
                    self.state.faq.set_active_slot(index);
                    self.state.faq.toggle(index);
                }
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

/// Truncate a string to a maximum length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

//! Application state definitions

use super::accordion::FaqAccordion;
use super::carousel::TestimonialCarousel;
use super::catalog::{FAQS, TESTIMONIALS};
use super::forms::FormFocus;
use super::theme::{SessionTheme, Theme, ThemeToggle};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Countdown plus upcoming/past contest cards
    #[default]
    Contests,
    Register,
    Testimonials,
    Faq,
}

impl View {
    /// All views in sidebar order
    pub const ALL: [View; 4] = [View::Contests, View::Register, View::Testimonials, View::Faq];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contests => "Contests",
            Self::Register => "Register",
            Self::Testimonials => "Stories",
            Self::Faq => "FAQ",
        }
    }

    /// Function key that switches to this view
    pub fn shortcut(&self) -> &'static str {
        match self {
            Self::Contests => "F1",
            Self::Register => "F2",
            Self::Testimonials => "F3",
            Self::Faq => "F4",
        }
    }

    /// View bound to a function key number
    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

/// Which contest list is shown on the contests view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContestTab {
    #[default]
    Upcoming,
    Past,
}

impl ContestTab {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Upcoming => Self::Past,
            Self::Past => Self::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming Contests",
            Self::Past => "Past Contests",
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub contest_tab: ContestTab,
    pub selected_contest: usize,

    // Registration form focus
    pub form_focus: FormFocus,

    // Page widgets
    pub carousel: TestimonialCarousel,
    pub faq: FaqAccordion,

    // Theme
    pub theme: SessionTheme,
    pub theme_toggle: ThemeToggle,

    // Feedback
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Some(Theme::default()))
    }
}

impl AppState {
    pub fn new(initial_theme: Option<Theme>) -> Self {
        Self {
            current_view: View::default(),
            contest_tab: ContestTab::default(),
            selected_contest: 0,
            form_focus: FormFocus::default(),
            carousel: TestimonialCarousel::new(TESTIMONIALS.len()),
            faq: FaqAccordion::new(FAQS.len()),
            theme: SessionTheme::new(initial_theme),
            theme_toggle: ThemeToggle::default(),
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    /// Switch view, clearing any transient status message
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.status_message = None;
        }
    }

    pub fn toggle_contest_tab(&mut self) {
        self.contest_tab = self.contest_tab.toggle();
    }

    pub fn move_contest_selection_next(&mut self, count: usize) {
        if self.selected_contest + 1 < count {
            self.selected_contest += 1;
        }
    }

    pub fn move_contest_selection_prev(&mut self) {
        self.selected_contest = self.selected_contest.saturating_sub(1);
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(|s| s.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

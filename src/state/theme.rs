//! Light/dark theme handling
//!
//! The current theme lives in a [`ThemeProvider`] owned outside the toggle.
//! [`ThemeToggle`] only tracks whether the provider has a value yet, and
//! stays hidden until it does.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Externally owned theme value with get/set access
pub trait ThemeProvider {
    /// Current theme, `None` until it is known
    fn theme(&self) -> Option<Theme>;
    fn set_theme(&mut self, theme: Theme);
}

/// Theme held in memory for the lifetime of the session
#[derive(Debug, Clone, Default)]
pub struct SessionTheme {
    current: Option<Theme>,
}

impl SessionTheme {
    pub fn new(initial: Option<Theme>) -> Self {
        Self { current: initial }
    }
}

impl ThemeProvider for SessionTheme {
    fn theme(&self) -> Option<Theme> {
        self.current
    }

    fn set_theme(&mut self, theme: Theme) {
        self.current = Some(theme);
    }
}

/// Toggle control. Renders nothing until mounted against a known theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeToggle {
    mounted: bool,
}

impl ThemeToggle {
    /// Mark the toggle ready once the provider has a theme
    pub fn mount(&mut self, provider: &dyn ThemeProvider) {
        if !self.mounted && provider.theme().is_some() {
            self.mounted = true;
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Flip the provider's theme. Returns the new theme, or `None` when not mounted.
    pub fn toggle(&self, provider: &mut dyn ThemeProvider) -> Option<Theme> {
        if !self.mounted {
            return None;
        }
        let next = provider.theme()?.toggled();
        provider.set_theme(next);
        tracing::debug!(theme = next.label(), "theme toggled");
        Some(next)
    }

    /// Icon for the action the toggle performs: sun while dark, moon while light
    pub fn icon(&self, provider: &dyn ThemeProvider) -> Option<&'static str> {
        if !self.mounted {
            return None;
        }
        provider.theme().map(|theme| match theme {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn test_unmounted_toggle_does_nothing() {
        let mut provider = SessionTheme::new(Some(Theme::Light));
        let toggle = ThemeToggle::default();
        assert_eq!(toggle.toggle(&mut provider), None);
        assert_eq!(provider.theme(), Some(Theme::Light));
        assert_eq!(toggle.icon(&provider), None);
    }

    #[test]
    fn test_mount_waits_for_known_theme() {
        let mut provider = SessionTheme::new(None);
        let mut toggle = ThemeToggle::default();
        toggle.mount(&provider);
        assert!(!toggle.is_mounted());

        provider.set_theme(Theme::Dark);
        toggle.mount(&provider);
        assert!(toggle.is_mounted());
    }

    #[test]
    fn test_toggle_flips_provider() {
        let mut provider = SessionTheme::new(Some(Theme::Light));
        let mut toggle = ThemeToggle::default();
        toggle.mount(&provider);

        assert_eq!(toggle.toggle(&mut provider), Some(Theme::Dark));
        assert_eq!(provider.theme(), Some(Theme::Dark));
        assert_eq!(toggle.icon(&provider), Some("☀"));

        assert_eq!(toggle.toggle(&mut provider), Some(Theme::Light));
        assert_eq!(toggle.icon(&provider), Some("☾"));
    }
}

//! Layout components (sidebar, footer, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::palette::Palette;
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions produced by [`create_layout`]
pub struct ScreenLayout {
    pub sidebar: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(rows[0]);

    ScreenLayout {
        sidebar: columns[0],
        main: columns[1],
        footer: rows[1],
        status_bar: rows[2],
    }
}

/// Draw the sidebar with one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            view.shortcut(),
            view.label(),
            app.state.current_view == *view,
            palette,
        );
    }
}

/// Draw the copyright footer
pub fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new(footer_text(chrono::Local::now().year()))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn footer_text(year: i32) -> String {
    format!("© {year} Contest Registration Platform. All rights reserved.")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let bar_style = Style::default().bg(palette.status_bar).fg(palette.text);
    let mut spans = vec![];

    // Theme icon only appears once the toggle has mounted
    if let Some(icon) = app.state.theme_toggle.icon(&app.state.theme) {
        spans.push(Span::styled(
            format!(" {icon} "),
            Style::default().fg(palette.highlight),
        ));
    } else {
        spans.push(Span::raw("   "));
    }

    spans.push(Span::raw(get_view_hints(app.state.current_view)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans)).style(bar_style);
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(quit_hint).style(bar_style), quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Contests => format!("Tab:tab  h/l:select  Enter:register  {THEME_SHORTCUT}:theme"),
        View::Register => format!(
            "Tab:next  ←/→:choose  Space:check  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:clear  Esc:back"
        ),
        View::Testimonials => "h/l:prev/next  1-9:jump".to_string(),
        View::Faq => "j/k:nav  Enter:open/close  1-9:toggle".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2025),
            "© 2025 Contest Registration Platform. All rights reserved."
        );
    }

    #[test]
    fn test_layout_reserves_footer_and_status_bar() {
        let layout = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.sidebar.width, 20);
        assert_eq!(layout.main.width, 80);
        assert_eq!(layout.footer.y, 28);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_register_hints_include_shortcuts() {
        let hints = get_view_hints(View::Register);
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(RESET_SHORTCUT));
    }
}

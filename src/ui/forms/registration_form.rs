//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::{App, BANNER_ANIMATION};
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, SubmissionStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

const SUCCESS_MESSAGE: &str = "Registration successful! We'll contact you with further details.";
const BANNER_HEIGHT: u16 = 3;
const SUBMIT_BUTTON_WIDTH: u16 = 24;

/// Field pairs laid out side by side; a single field spans the full row
const FIELD_ROWS: &[&[FieldName]] = &[
    &[FieldName::FullName, FieldName::Email],
    &[FieldName::Phone, FieldName::ContestType],
    &[FieldName::TeamName, FieldName::TeamSize],
    &[FieldName::AgreeToTerms],
];

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Register for a Contest ")
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = match app.form.status() {
        SubmissionStatus::Success => BANNER_HEIGHT,
        _ => 0,
    };

    let mut constraints = vec![Constraint::Length(banner_height)];
    constraints.extend(FIELD_ROWS.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Length(1),             // Help
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    if let Some(elapsed) = app.form.success_elapsed() {
        draw_success_banner(frame, chunks[0], elapsed, palette);
    }

    let focused = app.state.form_focus.field();
    for (row, fields) in FIELD_ROWS.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(fields.iter().map(|_| Constraint::Ratio(1, fields.len() as u32)))
            .split(chunks[row + 1]);

        for (field, cell) in fields.iter().zip(cells.iter()) {
            draw_field(
                frame,
                *cell,
                *field,
                app.form.fields(),
                app.form.errors().get(*field),
                focused == Some(*field),
                palette,
            );
        }
    }

    let button_row = chunks[FIELD_ROWS.len() + 1];
    let button_area = Rect {
        x: button_row.x,
        y: button_row.y,
        width: SUBMIT_BUTTON_WIDTH.min(button_row.width),
        height: button_row.height,
    };
    let status = app.form.status();
    render_button(
        frame,
        button_area,
        status.submit_label(),
        app.state.form_focus.is_submit_focused(),
        status != SubmissionStatus::Submitting,
        palette,
    );

    let help_area = chunks[FIELD_ROWS.len() + 2];
    match app.form.last_failure() {
        Some(failure) => {
            let notice = Paragraph::new(format!("Last attempt failed: {failure}"))
                .style(Style::default().fg(palette.error));
            frame.render_widget(notice, help_area);
        }
        None => draw_help_text(
            frame,
            help_area,
            &format!(
                "Tab/↑↓: move  ←/→: choose  Space: check  Enter/{SUBMIT_SHORTCUT}: submit  {RESET_SHORTCUT}: clear"
            ),
            palette,
        ),
    }
}

/// Draw the success banner, growing from the center as it appears
fn draw_success_banner(frame: &mut Frame, area: Rect, elapsed: Duration, palette: &Palette) {
    let width = banner_width(elapsed, area.width);
    if width == 0 {
        return;
    }
    let banner_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let banner = Paragraph::new(SUCCESS_MESSAGE)
        .style(
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.success)),
        );
    frame.render_widget(banner, banner_area);
}

fn banner_width(elapsed: Duration, full_width: u16) -> u16 {
    let progress = (elapsed.as_secs_f32() / BANNER_ANIMATION.as_secs_f32()).min(1.0);
    let eased = simple_easing::cubic_out(progress);
    ((full_width as f32) * eased).round() as u16
}

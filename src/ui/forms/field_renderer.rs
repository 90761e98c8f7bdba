//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, RegistrationForm};
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a boxed field (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one registration field. A validation error is shown on the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    form: &RegistrationForm,
    error: Option<&str>,
    is_active: bool,
    palette: &Palette,
) {
    let border_style = if error.is_some() && !is_active {
        Style::default().fg(palette.error)
    } else {
        palette.border(is_active)
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(palette.accent),
    );
    let placeholder_style = Style::default()
        .fg(palette.muted)
        .add_modifier(Modifier::ITALIC);
    let value_style = Style::default().fg(palette.text);

    let value = form.text(field).unwrap_or_default();
    let line = match field.kind() {
        FieldKind::Text if value.is_empty() => Line::from(vec![
            cursor,
            Span::styled(field.placeholder(), placeholder_style),
        ]),
        FieldKind::Text => Line::from(vec![Span::styled(value, value_style), cursor]),
        kind @ FieldKind::Select(_) => {
            let (label, style) = match kind.option_label(value) {
                Some(label) => (label, value_style),
                None => (field.placeholder(), placeholder_style),
            };
            let arrow_style = if is_active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.muted)
            };
            Line::from(vec![
                Span::styled("‹ ", arrow_style),
                Span::styled(label, style),
                Span::styled(" ›", arrow_style),
            ])
        }
        FieldKind::Checkbox => {
            let checked = form.agree_to_terms;
            Line::from(vec![
                Span::styled(
                    if checked { "[x] " } else { "[ ] " },
                    Style::default().fg(palette.accent),
                ),
                Span::styled(field.label(), value_style),
            ])
        }
    };

    let title = field_title(field);
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.error),
        )));
    }

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Box title for a field; required fields carry an asterisk
fn field_title(field: FieldName) -> String {
    let label = match field.kind() {
        FieldKind::Checkbox => "Terms",
        _ => field.label(),
    };
    if field.is_required() {
        format!(" {label} * ")
    } else {
        format!(" {label} ")
    }
}

/// Draw help text for keyboard shortcuts
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(text).style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}

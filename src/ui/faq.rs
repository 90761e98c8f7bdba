//! FAQ accordion view

use super::palette::Palette;
use crate::app::App;
use crate::state::FAQS;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw every question, expanding the open one
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Frequently Asked Questions ")
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    let open = app.state.faq.open_index();
    let mut lines = Vec::new();
    for (idx, entry) in FAQS.iter().enumerate() {
        let is_open = open == Some(idx);
        let has_cursor = app.state.faq.cursor() == idx;

        let marker = if is_open { "▾" } else { "▸" };
        let question_style = if has_cursor {
            palette.title()
        } else {
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(palette.accent)),
            Span::styled(format!("{}. {}", idx + 1, entry.question), question_style),
        ]));

        if is_open {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.answer),
                Style::default().fg(palette.muted),
            )));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

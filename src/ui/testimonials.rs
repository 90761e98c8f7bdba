//! Testimonials carousel view

use super::palette::Palette;
use crate::app::App;
use crate::state::{Testimonial, TESTIMONIALS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const MAX_STARS: u8 = 5;

/// Draw the testimonial currently selected in the carousel
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" What Participants Say ")
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let carousel = &app.state.carousel;
    let testimonial = match TESTIMONIALS.get(carousel.current()) {
        Some(testimonial) if !carousel.is_empty() => testimonial,
        _ => {
            let empty = Paragraph::new("No testimonials yet.")
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Quote card
            Constraint::Length(1), // Dots
        ])
        .margin(1)
        .split(inner);

    draw_card(frame, chunks[0], testimonial, palette);

    let dots = Paragraph::new(Line::from(dots(carousel.current(), carousel.len(), palette)))
    .alignment(Alignment::Center);
    frame.render_widget(dots, chunks[1]);
}

fn draw_card(frame: &mut Frame, area: Rect, testimonial: &Testimonial, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            stars(testimonial.rating),
            Style::default().fg(palette.highlight),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(testimonial.name, palette.title())),
        Line::from(Span::styled(
            testimonial.role,
            Style::default().fg(palette.muted),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(card, area);
}

/// Filled stars for the rating, hollow for the rest
fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS);
    let mut out = "★".repeat(filled as usize);
    out.push_str(&"☆".repeat((MAX_STARS - filled) as usize));
    out
}

fn dots(current: usize, len: usize, palette: &Palette) -> Vec<Span<'static>> {
    (0..len)
        .map(|i| {
            if i == current {
                Span::styled("● ", Style::default().fg(palette.accent))
            } else {
                Span::styled("○ ", Style::default().fg(palette.muted))
            }
        })
        .collect()
}

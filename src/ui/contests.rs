//! Contests view: countdown plus upcoming/past contest cards

use super::palette::Palette;
use crate::app::App;
use crate::state::{ContestTab, PastContest, UpcomingContest, PAST_CONTESTS, UPCOMING_CONTESTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COUNTDOWN_HEIGHT: u16 = 7;
const UNIT_BOX_WIDTH: u16 = 11;
const CARD_HEIGHT: u16 = 6;

/// Draw the contests view
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Heading
            Constraint::Length(COUNTDOWN_HEIGHT), // Countdown
            Constraint::Length(1),                // Tabs
            Constraint::Min(0),                   // Cards
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Compete. Learn. Win.", palette.title())),
        Line::from(Span::styled(
            "Join exciting coding contests and showcase your skills",
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    draw_countdown(frame, chunks[1], app, palette);
    draw_tabs(frame, chunks[2], app.state.contest_tab, palette);

    match app.state.contest_tab {
        ContestTab::Upcoming => {
            for (idx, (contest, card)) in UPCOMING_CONTESTS
                .iter()
                .zip(card_areas(chunks[3], UPCOMING_CONTESTS.len()))
                .enumerate()
            {
                let is_selected = idx == app.state.selected_contest;
                draw_upcoming_card(frame, card, contest, is_selected, palette);
            }
        }
        ContestTab::Past => {
            for (idx, (contest, card)) in PAST_CONTESTS
                .iter()
                .zip(card_areas(chunks[3], PAST_CONTESTS.len()))
                .enumerate()
            {
                let is_selected = idx == app.state.selected_contest;
                draw_past_card(frame, card, contest, is_selected, palette);
            }
        }
    }
}

/// Draw the four countdown boxes, or a notice once the contest has begun
fn draw_countdown(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = format!(
        " Next Contest Starts In · {} ",
        app.countdown.target().format("%B %-d, %Y %H:%M")
    );
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.countdown.has_started() {
        let notice = Paragraph::new("The contest has started!")
            .style(
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(notice, centered_row(inner));
        return;
    }

    let units = app.countdown.time_left().units();
    let total_width = UNIT_BOX_WIDTH * units.len() as u16;
    let boxes_area = Rect {
        x: inner.x + inner.width.saturating_sub(total_width) / 2,
        y: inner.y,
        width: total_width.min(inner.width),
        height: inner.height,
    };
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(units.iter().map(|_| Constraint::Length(UNIT_BOX_WIDTH)))
        .split(boxes_area);

    for ((value, label), cell) in units.iter().zip(boxes.iter()) {
        let unit = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{value:02}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(palette.muted))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
        frame.render_widget(unit, *cell);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: ContestTab, palette: &Palette) {
    let spans: Vec<Span> = [ContestTab::Upcoming, ContestTab::Past]
        .into_iter()
        .flat_map(|tab| {
            let style = if tab == active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.muted)
            };
            [Span::styled(tab.label(), style), Span::raw("   ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Stack cards vertically, dropping any that do not fit
fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
    (0..count as u16)
        .map(|i| Rect {
            x: area.x,
            y: area.y + i * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        })
        .take_while(|card| card.y + card.height <= area.y + area.height)
        .collect()
}

fn card_block(name: &str, is_selected: bool, palette: &Palette) -> Block<'static> {
    let title_style = if is_selected {
        palette.title()
    } else {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    };
    Block::default()
        .title(Span::styled(format!(" {name} "), title_style))
        .borders(Borders::ALL)
        .border_style(palette.border(is_selected))
}

fn detail_line<'a>(label: &'a str, value: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), Style::default().fg(palette.muted)),
        Span::raw(value),
    ])
}

fn draw_upcoming_card(
    frame: &mut Frame,
    area: Rect,
    contest: &UpcomingContest,
    is_selected: bool,
    palette: &Palette,
) {
    let block = card_block(contest.name, is_selected, palette).title(
        Line::from(Span::styled(
            format!(" {} days left ", contest.days_left),
            Style::default().fg(palette.highlight),
        ))
        .right_aligned(),
    );

    let mut lines = vec![
        detail_line("Date", contest.date, palette),
        detail_line("Time", contest.time, palette),
        detail_line("Location", contest.location, palette),
    ];
    let action = if is_selected {
        Span::styled("Enter: Register Now", palette.title())
    } else {
        Span::styled(contest.participants, Style::default().fg(palette.muted))
    };
    lines.push(Line::from(action));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_past_card(
    frame: &mut Frame,
    area: Rect,
    contest: &PastContest,
    is_selected: bool,
    palette: &Palette,
) {
    let lines = vec![
        detail_line("Date", contest.date, palette),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Winner"), Style::default().fg(palette.muted)),
            Span::styled(
                format!("🏆 {}", contest.winner),
                Style::default().fg(palette.highlight),
            ),
        ]),
    ];
    let block = card_block(contest.name, is_selected, palette);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_areas_fit_available_height() {
        let cards = card_areas(Rect::new(0, 0, 40, 13), 3);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].y, CARD_HEIGHT);
    }

    #[test]
    fn test_card_areas_all_fit() {
        assert_eq!(card_areas(Rect::new(0, 0, 40, 30), 3).len(), 3);
    }
}

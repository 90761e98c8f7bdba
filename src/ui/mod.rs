//! UI module for rendering the TUI

mod components;
mod contests;
mod faq;
mod forms;
mod layout;
mod palette;
mod testimonials;

use crate::app::App;
use crate::state::{ThemeProvider, View};
use components::render_error_dialog;
use palette::Palette;
use ratatui::{widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme.theme().unwrap_or_default());
    let area = frame.area();

    // Paint the theme background first
    frame.render_widget(Block::default().style(palette.base()), area);

    let screen = layout::create_layout(area);
    layout::draw_sidebar(frame, screen.sidebar, app, &palette);

    match app.state.current_view {
        View::Contests => contests::draw(frame, screen.main, app, &palette),
        View::Register => forms::draw_registration(frame, screen.main, app, &palette),
        View::Testimonials => testimonials::draw(frame, screen.main, app, &palette),
        View::Faq => faq::draw(frame, screen.main, app, &palette),
    }

    layout::draw_footer(frame, screen.footer, &palette);
    layout::draw_status_bar(frame, screen.status_bar, app, &palette);

    // Error dialog sits above everything else
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, &palette);
    }
}

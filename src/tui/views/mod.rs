// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Catalog: search bar, filter line, paginated card grid
// - Favorites: the favorite countries only
// - Detail: one country in full
//
// This module builds the shared shell (title bar, content slot, status bar)
// and dispatches to the view the app state selects. Modals render on top.

mod catalog;
mod detail;
mod favorites;
mod modal;

use super::app::{App, View};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg_block, f.area());

    // The responsive page size depends on the width we only know here
    app.update_page_size(f.area().width);

    // Shell: title bar, content slot, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    match app.view {
        View::Catalog => catalog::render(f, chunks[1], app),
        View::Favorites => favorites::render(f, chunks[1], app),
        View::Detail => detail::render(f, chunks[1], app),
    }

    components::render_status(f, chunks[2], app);

    // Render modal overlay on top of everything.
    // Take the modal temporarily to avoid a borrow conflict with app.
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }
}

// Favorites view
//
// The catalog card grid restricted to favorite countries, with its own
// pagination. Favorites resolve against the full catalog, so a fetch error
// or pending load shows here the same way it does on the catalog.

use crate::tui::app::App;
use crate::tui::components;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Span,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Min(6),    // card grid
            Constraint::Length(1), // pagination bar
        ])
        .split(area);

    let theme = &app.theme;

    let heading = Paragraph::new(Span::styled(
        "★ Your Favorite Countries",
        theme.title_style().add_modifier(Modifier::BOLD),
    ))
    .centered();
    f.render_widget(heading, chunks[0]);

    if app.catalog.loading {
        let loading = Paragraph::new("\n⏳ loading countries…")
            .style(ratatui::style::Style::default().fg(theme.loading))
            .centered();
        f.render_widget(loading, chunks[1]);
        return;
    }

    if let Some(error) = &app.catalog.error {
        let message = Paragraph::new(format!("\nError loading countries: {}", error))
            .style(theme.error_style())
            .centered();
        f.render_widget(message, chunks[1]);
        return;
    }

    let list = app.favorites_list();
    components::render_card_grid(
        f,
        chunks[1],
        &list,
        &app.fav_pager,
        app.fav_selected,
        &app.favorite_codes,
        "You have no favorite countries yet.",
        theme,
    );
    components::render_pagination(f, chunks[2], &app.fav_pager, list.len(), theme);
}

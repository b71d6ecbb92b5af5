// Catalog view
//
// Search bar and filter line on top, then the paginated card grid.
// Loading and error states replace the grid, mirroring the precedence the
// status flags define: loading wins, then error, then data.

use crate::tui::app::App;
use crate::tui::components;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Length(1), // filter line
            Constraint::Min(6),    // card grid
            Constraint::Length(1), // pagination bar
        ])
        .split(area);

    components::render_search_bar(f, chunks[0], app);
    render_filter_line(f, chunks[1], app);

    let theme = &app.theme;

    if app.catalog.loading {
        let loading = Paragraph::new("\n\n⏳ loading countries…")
            .style(ratatui::style::Style::default().fg(theme.loading))
            .centered();
        f.render_widget(loading, chunks[2]);
        return;
    }

    if let Some(error) = &app.catalog.error {
        let message = Paragraph::new(format!("\n\nError loading countries: {}", error))
            .style(theme.error_style())
            .centered();
        f.render_widget(message, chunks[2]);
        return;
    }

    let list = app.display_list();
    components::render_card_grid(
        f,
        chunks[2],
        &list,
        &app.pager,
        app.selected,
        &app.favorite_codes,
        "No countries found matching your criteria.",
        theme,
    );
    components::render_pagination(f, chunks[3], &app.pager, list.len(), theme);
}

/// One line summarizing the dropdown filters and their keys
fn render_filter_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let region = app.selected_region.as_deref().unwrap_or("All Regions");
    let language = app
        .selected_language
        .as_deref()
        .and_then(|code| {
            crate::tui::app::LANGUAGES
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| *label)
        })
        .unwrap_or("All Languages");

    let line = Line::from(vec![
        Span::styled(" [r] ", theme.muted_style()),
        Span::styled(region, theme.base_style().fg(theme.accent)),
        Span::styled("  [g] ", theme.muted_style()),
        Span::styled(language, theme.base_style().fg(theme.accent)),
        Span::styled("  [f] more filters  [s] sort", theme.muted_style()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

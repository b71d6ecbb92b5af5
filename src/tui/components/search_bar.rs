// Search bar component
//
// One-line input filtering the catalog by name as the user types. The
// border switches to the focused color while typing.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let border_style = if app.search_active {
        theme.border_focused_style()
    } else {
        theme.border_style()
    };

    let content = if app.search.is_empty() && !app.search_active {
        Line::from(Span::styled(
            "press / to search by name…",
            theme.muted_style(),
        ))
    } else {
        let cursor = if app.search_active { "█" } else { "" };
        Line::from(vec![
            Span::styled(app.search.clone(), theme.base_style()),
            Span::styled(cursor, theme.base_style()),
        ])
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" 🔍 Search ", theme.title_style())),
    );
    f.render_widget(search, area);
}

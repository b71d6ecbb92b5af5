// Title bar component
//
// Shows the app name, the active view and the login state.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let login = if app.is_logged_in {
        Span::styled("● logged in", theme.status_style())
    } else {
        Span::styled("○ guest", theme.muted_style())
    };

    let line = Line::from(vec![
        Span::styled(" 🌍 terra ", theme.title_style()),
        Span::styled("│ ", theme.muted_style()),
        Span::styled(app.view.name(), theme.base_style()),
        Span::styled(" │ ", theme.muted_style()),
        login,
        Span::styled(
            format!(" │ {}  (? for help)", app.theme_kind.name()),
            theme.muted_style(),
        ),
    ]);

    let title = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style()),
    );
    f.render_widget(title, area);
}

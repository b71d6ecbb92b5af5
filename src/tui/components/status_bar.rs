// Status bar component
//
// Bottom line: uptime, shown/total counts, active filter and sort, page
// position, favorites count. Errors take over the whole line in the error
// style so they cannot be missed.

use crate::tui::app::{App, View};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if let Some(error) = &app.catalog.error {
        let status = Paragraph::new(format!(" ✗ {}  (press r/g/f to retry a filter)", error))
            .style(theme.error_style())
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(status, area);
        return;
    }

    let bp = Breakpoint::from_width(area.width);

    let (list_len, pager) = match app.view {
        View::Favorites => (app.favorites_list().len(), &app.fav_pager),
        _ => (app.display_list().len(), &app.pager),
    };

    let loading = if app.catalog.loading { " ⏳ loading…" } else { "" };

    let filter_info = match (&app.filter_label, app.sort_label()) {
        (Some(filter), Some(sort)) => format!(" │ {} │ sort {}", filter, sort),
        (Some(filter), None) => format!(" │ {}", filter),
        (None, Some(sort)) => format!(" │ sort {}", sort),
        (None, None) => String::new(),
    };

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ 🌐 {}/{} countries │ page {}/{}{} │ ★ {}{}",
            app.uptime(),
            list_len,
            app.catalog.countries.len(),
            pager.current_page,
            pager.total_pages(list_len),
            filter_info,
            app.favorite_codes.len(),
            loading,
        )
    } else {
        // Compact format for narrow terminals
        format!(
            " {}/{} │ p{}/{} │ ★{}{}",
            list_len,
            app.catalog.countries.len(),
            pager.current_page,
            pager.total_pages(list_len),
            app.favorite_codes.len(),
            loading,
        )
    };

    let status = Paragraph::new(status_text)
        .style(theme.status_style())
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

// Pagination bar component
//
// Renders "« 1 2 [3] 4 5 »" centered under the card grid, windowed to at
// most five page numbers around the current page. Renders nothing at all
// when there is a single page.

use crate::catalog::pagination::Pager;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_pagination(f: &mut Frame, area: Rect, pager: &Pager, item_count: usize, theme: &Theme) {
    let total_pages = pager.total_pages(item_count);
    if total_pages <= 1 {
        return;
    }

    let mut spans = Vec::new();

    // Previous arrow, dimmed at the first page
    let prev_style = if pager.current_page == 1 {
        theme.muted_style()
    } else {
        theme.base_style()
    };
    spans.push(Span::styled("« ", prev_style));

    for page in pager.window(item_count) {
        if page == pager.current_page {
            spans.push(Span::styled(
                format!("[{}]", page),
                theme.selected_style().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", page), theme.base_style()));
        }
        spans.push(Span::raw(" "));
    }

    // Next arrow, dimmed at the last page
    let next_style = if pager.current_page == total_pages {
        theme.muted_style()
    } else {
        theme.base_style()
    };
    spans.push(Span::styled("»", next_style));

    let bar = Paragraph::new(Line::from(spans)).centered();
    f.render_widget(bar, area);
}

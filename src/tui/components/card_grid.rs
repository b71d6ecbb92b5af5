// Card grid component
//
// Lays the current page of countries out as a horizontal row of equal-width
// cards. An empty list renders a centered placeholder instead.

use super::render_country_card;
use crate::catalog::pagination::Pager;
use crate::model::Country;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

#[allow(clippy::too_many_arguments)]
pub fn render_card_grid(
    f: &mut Frame,
    area: Rect,
    countries: &[&Country],
    pager: &Pager,
    selected: usize,
    favorite_codes: &[String],
    empty_message: &str,
    theme: &Theme,
) {
    if countries.is_empty() {
        let placeholder = Paragraph::new(format!("\n\n{}", empty_message))
            .style(theme.muted_style())
            .centered();
        f.render_widget(placeholder, area);
        return;
    }

    let (start, end) = pager.page_bounds(countries.len());
    let page = &countries[start..end];

    // Equal-width columns; the page never holds more than page_size cards
    let constraints: Vec<Constraint> = page
        .iter()
        .map(|_| Constraint::Ratio(1, page.len() as u32))
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, country) in page.iter().enumerate() {
        let is_selected = start + i == selected;
        let is_favorite = favorite_codes.iter().any(|code| *code == country.cca3);
        render_country_card(f, columns[i], country, is_selected, is_favorite, theme);
    }
}

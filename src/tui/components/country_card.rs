// Country card component
//
// One bordered card in the catalog grid: common name as the title, then
// official name, region, capital, population and the cca3 code. A star
// marks favorites; the selected card gets the focused border.

use crate::model::Country;
use crate::theme::Theme;
use crate::util::{format_number, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_country_card(
    f: &mut Frame,
    area: Rect,
    country: &Country,
    selected: bool,
    is_favorite: bool,
    theme: &Theme,
) {
    let border_style = if selected {
        theme.border_focused_style()
    } else {
        theme.border_style()
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let star = if is_favorite { "★ " } else { "" };
    let title = format!(
        " {}{} ",
        star,
        truncate_to_width(&country.name.common, inner_width.saturating_sub(star.len()))
    );
    let title_style = if is_favorite {
        theme.title_style().fg(theme.favorite)
    } else {
        theme.title_style()
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&country.name.official, inner_width),
            theme.muted_style().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Region: ", theme.muted_style()),
            Span::styled(country.region.clone(), theme.base_style()),
        ]),
        Line::from(vec![
            Span::styled("Capital: ", theme.muted_style()),
            Span::styled(
                truncate_to_width(country.capital_display(), inner_width.saturating_sub(9)),
                theme.base_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Population: ", theme.muted_style()),
            Span::styled(format_number(country.population), theme.base_style()),
        ]),
        Line::from(Span::styled(country.cca3.clone(), theme.muted_style())),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, title_style)),
    );
    f.render_widget(card, area);
}

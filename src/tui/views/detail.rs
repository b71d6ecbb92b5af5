// Country detail view
//
// Everything the record carries about a single country, resolved from the
// catalog when possible and fetched by code otherwise.

use crate::tui::app::App;
use crate::util::{format_area, format_number};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let detail = &app.detail;

    if detail.loading {
        let loading = Paragraph::new("\n\n⏳ loading country…")
            .style(ratatui::style::Style::default().fg(theme.loading))
            .centered();
        f.render_widget(loading, area);
        return;
    }

    if let Some(error) = &detail.error {
        let message = Paragraph::new(format!(
            "\n\n{}\n\npress Esc to go back to the catalog",
            error
        ))
        .style(theme.error_style())
        .centered();
        f.render_widget(message, area);
        return;
    }

    let Some(country) = &detail.country else {
        let message = Paragraph::new("\n\nCountry not found\n\npress Esc to go back")
            .style(theme.muted_style())
            .centered();
        f.render_widget(message, area);
        return;
    };

    let is_favorite = app.favorite_codes.iter().any(|c| *c == country.cca3);
    let star = if is_favorite { " ★" } else { "" };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}{}", country.name.common, star),
            theme.title_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            country.name.official.clone(),
            theme.muted_style().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        field(theme, "Capital", country.capitals_joined()),
        field(theme, "Region", or_na(&country.region)),
        field(
            theme,
            "Subregion",
            country.subregion.clone().unwrap_or_else(|| "N/A".into()),
        ),
        field(theme, "Population", format_number(country.population)),
        field(
            theme,
            "Area",
            if country.area > 0.0 {
                format_area(country.area)
            } else {
                "N/A".to_string()
            },
        ),
        field(
            theme,
            "Independent",
            match country.independent {
                Some(true) => "Yes".to_string(),
                Some(false) => "No".to_string(),
                None => "N/A".to_string(),
            },
        ),
        field(theme, "Currencies", country.currency_display()),
        field(
            theme,
            "Languages",
            if country.languages.is_empty() {
                "N/A".to_string()
            } else {
                country.language_names().join(", ")
            },
        ),
    ];

    if !country.borders.is_empty() {
        lines.push(field(theme, "Borders", country.borders.join(" ")));
    }
    if !country.timezones.is_empty() {
        lines.push(field(theme, "Timezones", country.timezones.join(", ")));
    }
    if country.latlng.len() == 2 {
        lines.push(field(
            theme,
            "Coordinates",
            format!("{:.1}, {:.1}", country.latlng[0], country.latlng[1]),
        ));
    }
    let flag_url = if !country.flags.svg.is_empty() {
        &country.flags.svg
    } else {
        &country.flags.png
    };
    if !flag_url.is_empty() {
        lines.push(field(theme, "Flag", flag_url.clone()));
    }
    if let Some(alt) = &country.flags.alt {
        if !alt.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(alt.clone(), theme.muted_style())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Space: toggle favorite   Esc: back to catalog",
        theme.muted_style(),
    )));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(
                format!(" {} ", country.cca3),
                theme.title_style(),
            )),
    );
    f.render_widget(panel, area);
}

fn field(theme: &crate::theme::Theme, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}: ", label), theme.muted_style()),
        Span::styled(value, theme.base_style()),
    ])
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

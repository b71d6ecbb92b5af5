// Modal rendering
//
// Modals draw centered over the current view: help, recent logs, the login
// form and the filter-criteria prompt.

use crate::logging::LogLevel;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::modal::{FilterCriterion, FilterPrompt, LoginField, LoginForm, Modal, PromptStage};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
        Modal::Login(form) => render_login(f, form, app),
        Modal::Filter(prompt) => render_filter(f, prompt, app),
    }
}

/// Centered rect sized in absolute columns/rows, clamped to the frame
fn centered_rect(width: u16, height: u16, frame_area: Rect) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect {
        x: frame_area.x + (frame_area.width - width) / 2,
        y: frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    }
}

fn modal_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused_style())
        .title(Span::styled(title, theme.title_style()))
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(56, 22, f.area());
    f.render_widget(Clear, area);

    let keys: &[(&str, &str)] = &[
        ("/", "search by name"),
        ("r", "cycle region filter"),
        ("g", "cycle language filter"),
        ("f", "filter by other criteria"),
        ("s", "cycle sort order"),
        ("←/→  h/l", "previous / next page"),
        ("↑/↓  k/j", "previous / next card"),
        ("Enter", "open country details"),
        ("Space", "toggle favorite"),
        ("F1 / c", "catalog view"),
        ("F2 / v", "favorites view"),
        ("o", "login  (O: logout)"),
        ("t", "cycle theme"),
        ("!", "recent logs"),
        ("Esc", "back / close / clear search"),
        ("q", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>10}  ", key), theme.title_style()),
            Span::styled(*action, theme.base_style()),
        ]));
    }

    let help = Paragraph::new(lines).block(modal_block(" ? Help ", theme));
    f.render_widget(help, area);
}

fn render_logs(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(f.area().width.saturating_sub(8), 20, f.area());
    f.render_widget(Clear, area);

    let entries = app.log_buffer.get_all();
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = entries
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                LogLevel::Info => theme.log_info,
                LogLevel::Debug => theme.log_debug,
                LogLevel::Trace => theme.log_trace,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                    theme.muted_style(),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(format!("{} ", entry.target), theme.muted_style()),
                Span::styled(entry.message.clone(), theme.base_style()),
            ])
        })
        .collect();

    let logs = Paragraph::new(lines).block(modal_block(" Logs ", theme));
    f.render_widget(logs, area);
}

fn render_login(f: &mut Frame, form: &LoginForm, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(44, 12, f.area());
    f.render_widget(Clear, area);

    let field_line = |label: &str, value: &str, focused: bool, masked: bool| {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let cursor = if focused { "█" } else { "" };
        let style = if focused {
            theme.base_style().add_modifier(Modifier::BOLD)
        } else {
            theme.base_style()
        };
        Line::from(vec![
            Span::styled(format!("  {:>9}: ", label), theme.muted_style()),
            Span::styled(format!("{}{}", shown, cursor), style),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        field_line(
            "Email",
            &form.email,
            form.focus == Some(LoginField::Email),
            false,
        ),
        Line::from(""),
        field_line(
            "Password",
            &form.password,
            form.focus == Some(LoginField::Password),
            true,
        ),
        Line::from(""),
    ];

    if let Some(error) = form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            theme.error_style(),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: switch field   Enter: login   Esc: cancel",
        theme.muted_style(),
    )));

    let login = Paragraph::new(lines).block(modal_block(" Login ", theme));
    f.render_widget(login, area);
}

fn render_filter(f: &mut Frame, prompt: &FilterPrompt, app: &App) {
    let theme = &app.theme;

    match prompt.stage {
        PromptStage::Choose => {
            let criteria = FilterCriterion::all();
            let area = centered_rect(40, criteria.len() as u16 + 4, f.area());
            f.render_widget(Clear, area);

            let mut lines = vec![Line::from("")];
            for (i, criterion) in criteria.iter().enumerate() {
                let style = if i == prompt.selected {
                    theme.selected_style()
                } else {
                    theme.base_style()
                };
                let marker = if i == prompt.selected { "▸ " } else { "  " };
                lines.push(Line::from(Span::styled(
                    format!(" {}{}", marker, criterion.label()),
                    style,
                )));
            }

            let list = Paragraph::new(lines).block(modal_block(" Filter by… ", theme));
            f.render_widget(list, area);
        }
        PromptStage::Input => {
            let area = centered_rect(48, 8, f.area());
            f.render_widget(Clear, area);

            let criterion = prompt.criterion();
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {}: ", criterion.label()), theme.muted_style()),
                    Span::styled(format!("{}█", prompt.value), theme.base_style()),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", criterion.hint()),
                    theme.muted_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  Enter: apply   Esc: back",
                    theme.muted_style(),
                )),
            ];

            let input = Paragraph::new(lines).block(modal_block(" Filter by… ", theme));
            f.render_widget(input, area);
        }
    }
}

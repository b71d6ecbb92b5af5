// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch-task events)
// - Rendering the UI
//
// Keyboard dispatch is layered: Modal -> Search input -> Global -> View.

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod views;

use crate::events::AppEvent;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{FilterPrompt, LoginForm, Modal, PromptStage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Blocks until the user quits.
pub async fn run_tui(mut app: App, mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to restore terminal")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard input, the redraw tick and fetch-task
/// events simultaneously, responding to whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Periodic redraws keep the loading indicator and uptime fresh
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}

            // Fetch-task events
            Some(app_event) = event_rx.recv() => {
                app.apply_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal -> Search input -> Global -> View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Active search box captures text input
    if handle_search_input(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => {
            // Layer 3: Global keys (work regardless of view)
            if handle_global_keys(app, &key_event) {
                return;
            }

            // Layer 4: View-specific keys
            if !app.handle_key_press(key_event.code) {
                return;
            }
            match app.view {
                View::Catalog => handle_catalog_keys(app, key_event.code),
                View::Favorites => handle_favorites_keys(app, key_event.code),
                View::Detail => handle_detail_keys(app, key_event.code),
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if a modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // Always process Release events to keep the InputHandler in sync;
    // otherwise keys stay stuck "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    // Take the modal to avoid borrow conflicts with app mutations below
    let mut modal = app.modal.take().expect("modal checked above");
    let mut keep_open = true;
    let key = key_event.code;

    match &mut modal {
        Modal::Help | Modal::Logs => {
            if matches!(
                key,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('!')
            ) {
                keep_open = false;
            }
        }
        Modal::Login(form) => match key {
            KeyCode::Esc => keep_open = false,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
            KeyCode::Enter => {
                if form.submit() {
                    app.complete_login();
                    keep_open = false;
                }
            }
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        },
        Modal::Filter(prompt) => match prompt.stage {
            PromptStage::Choose => match key {
                KeyCode::Esc => keep_open = false,
                KeyCode::Up | KeyCode::Char('k') => prompt.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => prompt.select_next(),
                KeyCode::Enter => prompt.confirm_choice(),
                _ => {}
            },
            PromptStage::Input => match key {
                KeyCode::Esc => prompt.back_to_choice(),
                KeyCode::Backspace => {
                    prompt.value.pop();
                }
                KeyCode::Enter => {
                    let criterion = prompt.criterion();
                    let value = prompt.value.clone();
                    app.apply_criterion(criterion, &value);
                    keep_open = false;
                }
                KeyCode::Char(c) => prompt.value.push(c),
                _ => {}
            },
        },
    }

    if keep_open {
        app.modal = Some(modal);
    }
    true
}

/// Route keystrokes into the search box while it is active
fn handle_search_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.search_active || app.view != View::Catalog {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match key_event.code {
        KeyCode::Esc => app.search_clear(),
        KeyCode::Enter => app.search_active = false,
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        // Page/selection keys still work while typing
        KeyCode::Left => app.page_prev(),
        KeyCode::Right => app.page_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        _ => {}
    }
    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current view
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // View switching
        KeyCode::F(1) | KeyCode::Char('c') => {
            if app.handle_key_press(key) {
                app.set_view(View::Catalog);
            }
            true
        }
        KeyCode::F(2) | KeyCode::Char('v') => {
            if app.handle_key_press(key) {
                app.set_view(View::Favorites);
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::Help);
            }
            true
        }
        // Logs modal
        KeyCode::Char('!') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::Logs);
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Login / logout
        KeyCode::Char('o') => {
            if app.handle_key_press(key) && !app.is_logged_in {
                app.modal = Some(Modal::Login(LoginForm::new()));
            }
            true
        }
        KeyCode::Char('O') => {
            if app.handle_key_press(key) {
                app.logout();
            }
            true
        }
        _ => false,
    }
}

fn handle_catalog_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('/') => app.search_active = true,
        KeyCode::Char('r') => app.cycle_region(),
        KeyCode::Char('g') => app.cycle_language(),
        KeyCode::Char('f') => app.modal = Some(Modal::Filter(FilterPrompt::new())),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Left | KeyCode::Char('h') => app.page_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.page_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char(' ') => app.toggle_favorite_selected(),
        KeyCode::Esc => {
            // Clear search first, then active filters
            if !app.search.is_empty() {
                app.search_clear();
            } else {
                app.clear_filters();
            }
        }
        _ => {}
    }
}

fn handle_favorites_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.page_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.page_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char(' ') => app.toggle_favorite_selected(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

fn handle_detail_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Char(' ') => app.toggle_favorite_selected(),
        _ => {}
    }
}

// Terra - country directory for the terminal
//
// Fetches country data from the REST Countries API and lets the user
// search, filter and paginate the catalog, inspect a country's details,
// and keep a favorites list persisted on disk.
//
// Architecture:
// - API client (reqwest): one method per REST Countries endpoint
// - Catalog state container: full list + filtered result + loading/error
// - Fetcher: spawns fetch tasks; results flow back over an mpsc channel
// - Store: JSON key-value file holding favorites and session prefs
// - TUI (ratatui): catalog / favorites / detail views

mod api;
mod catalog;
mod cli;
mod config;
mod events;
mod favorites;
mod logging;
mod model;
mod session;
mod store;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use api::CountryClient;
use catalog::Fetcher;
use cli::CliAction;
use config::{Config, LogRotation};
use events::AppEvent;
use favorites::Favorites;
use logging::{LogBuffer, TuiLogLayer};
use session::SessionPrefs;
use store::FileStore;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::{route_view, App, View};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --reset, --edit, --path)
    let route = match cli::handle_cli() {
        CliAction::Handled => return Ok(()),
        CliAction::Run { route } => route,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Initialize tracing with conditional output:
    // TUI mode captures logs to a buffer (prevents garbling the display),
    // headless mode logs to stdout; file logging is optional on top.
    // The guard must stay alive so file logs flush on exit.
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    tracing::debug!("config loaded, api_url = {}", config.api_url);

    // The event channel connects fetch tasks to the UI
    let (event_tx, event_rx) = mpsc::channel(64);

    let client = CountryClient::new(
        &config.api_url,
        std::time::Duration::from_secs(config.request_timeout_secs),
    )?;
    let fetcher = Fetcher::new(client, event_tx);

    // Persistence: one JSON store file shared by favorites and prefs
    let store = FileStore::new(config.data_dir.clone());
    let favorites = Favorites::new(store.clone());
    let prefs = SessionPrefs::new(store);

    if config.enable_tui {
        // Fetch the entire catalog once at startup
        fetcher.fetch_catalog();

        let mut app = App::new(&config, fetcher, favorites, prefs, log_buffer);

        // Apply the requested start route; unknown routes land on the catalog
        let (view, code) = route_view(route.as_deref().unwrap_or("/"));
        match (view, code) {
            (View::Detail, Some(code)) => app.open_detail(&code),
            (view, _) => app.set_view(view),
        }

        tracing::info!("starting TUI");
        tui::run_tui(app, event_rx).await?;
    } else {
        tracing::info!("TUI disabled, printing catalog and exiting");
        run_headless(&fetcher, event_rx).await?;
    }

    tracing::info!("shutdown complete");
    Ok(())
}

/// Headless mode: fetch a projected catalog and print it as a table
async fn run_headless(fetcher: &Fetcher, mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    // A field projection keeps the response small; we only print these
    let seq = fetcher.fetch_all_fields(vec!["name", "cca3", "region", "population"]);
    tracing::debug!("headless catalog fetch issued (seq {})", seq);

    while let Some(event) = event_rx.recv().await {
        match event {
            AppEvent::FilterLoaded { mut countries, .. } => {
                countries.sort_by(|a, b| a.name.common.cmp(&b.name.common));
                for country in &countries {
                    println!(
                        "{:<5} {:<42} {:<12} {:>14}",
                        country.cca3,
                        util::truncate_utf8_safe(&country.name.common, 42),
                        country.region,
                        util::format_number(country.population),
                    );
                }
                println!("{} countries", countries.len());
                return Ok(());
            }
            AppEvent::FilterFailed { message, .. } => {
                anyhow::bail!("{}", message);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Set up the tracing subscriber
///
/// Precedence for the filter: RUST_LOG env var > config file > "info".
/// Returns the file-appender guard when file logging is enabled.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("terra={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                Some((non_blocking, guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    match (config.enable_tui, file_layer) {
        (true, Some((writer, guard))) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        (true, None) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        }
        (false, Some((writer, guard))) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        (false, None) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            None
        }
    }
}

// Events that flow from spawned fetch tasks to the TUI
//
// Every network operation runs in its own tokio task and reports back over
// an mpsc channel as one of these variants. Filter completions carry the
// sequence number they were issued with so the state container can discard
// completions that a newer filter request has superseded.

use crate::model::Country;

/// Main event type that flows through the application
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The startup catalog fetch resolved
    CatalogLoaded { countries: Vec<Country> },

    /// The startup catalog fetch failed
    CatalogFailed { message: String },

    /// A server-side filter fetch resolved
    FilterLoaded { seq: u64, countries: Vec<Country> },

    /// A server-side filter fetch failed
    FilterFailed { seq: u64, message: String },

    /// A single-country lookup for the detail view resolved
    CountryLoaded { code: String, country: Box<Country> },

    /// A single-country lookup for the detail view failed
    CountryFailed { code: String, message: String },
}

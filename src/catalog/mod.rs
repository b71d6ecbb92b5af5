// Catalog state container and fetch dispatch
//
// CatalogState is the single owner of the country data the UI renders: the
// full catalog (fetched once at startup), the optional server-side filtered
// result set, and the loading/error flags. It mutates only inside `apply`,
// fed by AppEvents - a unidirectional store with a pure reducer.
//
// Fetcher spawns one tokio task per network operation and reports back over
// the event channel. Filter fetches are stamped with a monotonically
// increasing sequence number; CatalogState remembers the newest issued
// sequence and drops completions that an even newer request has superseded,
// so the most recently *issued* filter wins regardless of arrival order.

pub mod filter;
pub mod pagination;
pub mod sort;

use crate::api::{ApiError, CountryClient};
use crate::events::AppEvent;
use crate::model::Country;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Per-session catalog state
#[derive(Debug, Default)]
pub struct CatalogState {
    /// Full catalog, fetched once at startup
    pub countries: Vec<Country>,

    /// Result of the most recent server-side filter call, replaced wholesale
    pub filtered: Option<Vec<Country>>,

    /// True while a catalog or filter fetch is in flight
    pub loading: bool,

    /// Message of the most recent failure, cleared when a new fetch starts
    pub error: Option<String>,

    /// Newest issued filter sequence; older completions are stale
    newest_seq: u64,
}

impl CatalogState {
    /// State for a session whose startup catalog fetch is already in flight
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Record that a filter fetch with this sequence was just issued
    pub fn filter_issued(&mut self, seq: u64) {
        self.newest_seq = seq;
        self.loading = true;
        self.error = None;
    }

    /// Drop the server-side filter, falling back to the full catalog
    pub fn clear_filtered(&mut self) {
        self.filtered = None;
    }

    /// Reducer: fold one event into the state
    ///
    /// A failed filter fetch records the error but never touches `countries`
    /// or the previous `filtered` set.
    pub fn apply(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CatalogLoaded { countries } => {
                self.countries = countries.clone();
                self.error = None;
                self.loading = false;
            }
            AppEvent::CatalogFailed { message } => {
                self.error = Some(message.clone());
                self.loading = false;
            }
            AppEvent::FilterLoaded { seq, countries } => {
                if *seq < self.newest_seq {
                    tracing::debug!("dropping stale filter result (seq {})", seq);
                    return;
                }
                self.filtered = Some(countries.clone());
                self.error = None;
                self.loading = false;
            }
            AppEvent::FilterFailed { seq, message } => {
                if *seq < self.newest_seq {
                    tracing::debug!("dropping stale filter error (seq {})", seq);
                    return;
                }
                self.error = Some(message.clone());
                self.loading = false;
            }
            // Detail lookups are handled by the detail view state
            AppEvent::CountryLoaded { .. } | AppEvent::CountryFailed { .. } => {}
        }
    }

    /// The list the UI should render
    ///
    /// Precedence: a non-empty local search filters the full catalog; else a
    /// non-empty server-side filter result; else the full catalog.
    pub fn display(&self, search: &str) -> Vec<&Country> {
        if !search.is_empty() && !self.countries.is_empty() {
            return filter::filter_countries(&self.countries, search);
        }

        if let Some(filtered) = &self.filtered {
            if !filtered.is_empty() {
                return filtered.iter().collect();
            }
        }

        self.countries.iter().collect()
    }

    /// Look a country up by its cca3 code in the full catalog
    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.cca3 == code)
    }
}

/// Spawns fetch tasks and stamps filter requests with sequence numbers
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<CountryClient>,
    tx: mpsc::Sender<AppEvent>,
    seq: Arc<AtomicU64>,
}

impl Fetcher {
    pub fn new(client: CountryClient, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            tx,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Kick off the startup fetch of the entire catalog
    pub fn fetch_catalog(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match client.all().await {
                Ok(countries) => {
                    tracing::info!("catalog loaded: {} countries", countries.len());
                    AppEvent::CatalogLoaded { countries }
                }
                Err(e) => {
                    tracing::error!("catalog fetch failed: {}", e);
                    AppEvent::CatalogFailed {
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event).await;
        });
    }

    /// Fetch a single country for the detail view
    pub fn fetch_country(&self, code: &str) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let code = code.to_string();
        tokio::spawn(async move {
            let event = match client.by_code(&code).await {
                Ok(country) => AppEvent::CountryLoaded {
                    code,
                    country: Box::new(country),
                },
                Err(e) => AppEvent::CountryFailed {
                    code,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event).await;
        });
    }

    // Criteria-specific filter fetches. Each returns the sequence number the
    // request was stamped with; the caller passes it to
    // `CatalogState::filter_issued`.

    pub fn fetch_independent(&self, status: bool) -> u64 {
        let client = self.client.clone();
        self.dispatch(async move { client.independent(status).await })
    }

    pub fn fetch_by_name(&self, name: &str) -> u64 {
        let client = self.client.clone();
        let name = name.to_string();
        self.dispatch(async move { client.by_name(&name).await })
    }

    pub fn fetch_by_full_name(&self, name: &str) -> u64 {
        let client = self.client.clone();
        let name = name.to_string();
        self.dispatch(async move { client.by_full_name(&name).await })
    }

    pub fn fetch_by_code(&self, code: &str) -> u64 {
        let client = self.client.clone();
        let code = code.to_string();
        self.dispatch(async move { client.by_code(&code).await.map(|c| vec![c]) })
    }

    pub fn fetch_by_codes(&self, codes: Vec<String>) -> u64 {
        let client = self.client.clone();
        self.dispatch(async move { client.by_codes(&codes).await })
    }

    pub fn fetch_by_currency(&self, code: &str) -> u64 {
        let client = self.client.clone();
        let code = code.to_string();
        self.dispatch(async move { client.by_currency(&code).await })
    }

    pub fn fetch_by_language(&self, code: &str) -> u64 {
        let client = self.client.clone();
        let code = code.to_string();
        self.dispatch(async move { client.by_language(&code).await })
    }

    pub fn fetch_by_capital(&self, capital: &str) -> u64 {
        let client = self.client.clone();
        let capital = capital.to_string();
        self.dispatch(async move { client.by_capital(&capital).await })
    }

    pub fn fetch_by_calling_code(&self, code: &str) -> u64 {
        let client = self.client.clone();
        let code = code.to_string();
        self.dispatch(async move { client.by_calling_code(&code).await })
    }

    pub fn fetch_by_region(&self, region: &str) -> u64 {
        let client = self.client.clone();
        let region = region.to_string();
        self.dispatch(async move { client.by_region(&region).await })
    }

    pub fn fetch_by_regional_bloc(&self, bloc: &str) -> u64 {
        let client = self.client.clone();
        let bloc = bloc.to_string();
        self.dispatch(async move { client.by_regional_bloc(&bloc).await })
    }

    pub fn fetch_by_subregion(&self, subregion: &str) -> u64 {
        let client = self.client.clone();
        let subregion = subregion.to_string();
        self.dispatch(async move { client.by_subregion(&subregion).await })
    }

    pub fn fetch_by_translation(&self, translation: &str) -> u64 {
        let client = self.client.clone();
        let translation = translation.to_string();
        self.dispatch(async move { client.by_translation(&translation).await })
    }

    pub fn fetch_all_fields(&self, fields: Vec<&'static str>) -> u64 {
        let client = self.client.clone();
        self.dispatch(async move { client.all_fields(&fields).await })
    }

    /// Stamp a filter request and spawn its task
    fn dispatch<F>(&self, fut: F) -> u64
    where
        F: Future<Output = Result<Vec<Country>, ApiError>> + Send + 'static,
    {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match fut.await {
                Ok(countries) => AppEvent::FilterLoaded { seq, countries },
                Err(e) => AppEvent::FilterFailed {
                    seq,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event).await;
        });
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CountryName;

    fn country(common: &str, cca3: &str) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: common.to_string(),
            },
            cca3: cca3.to_string(),
            ..Country::default()
        }
    }

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::new();
        state.apply(&AppEvent::CatalogLoaded {
            countries: vec![
                country("Finland", "FIN"),
                country("Sweden", "SWE"),
                country("Norway", "NOR"),
            ],
        });
        state
    }

    #[test]
    fn catalog_load_clears_loading() {
        let state = loaded_state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.countries.len(), 3);
    }

    #[test]
    fn failed_filter_keeps_base_catalog() {
        let mut state = loaded_state();

        state.filter_issued(1);
        assert!(state.loading);

        state.apply(&AppEvent::FilterFailed {
            seq: 1,
            message: "failed to fetch region".to_string(),
        });

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("failed to fetch region"));
        // Base catalog untouched by the failure
        assert_eq!(state.countries.len(), 3);
        assert!(state.filtered.is_none());
    }

    #[test]
    fn stale_filter_completion_is_dropped() {
        let mut state = loaded_state();

        // Two overlapping filter requests: seq 1 (slow) then seq 2 (fast)
        state.filter_issued(1);
        state.filter_issued(2);

        // Fast request resolves first
        state.apply(&AppEvent::FilterLoaded {
            seq: 2,
            countries: vec![country("Sweden", "SWE")],
        });
        assert!(!state.loading);

        // Slow request resolves later; it was superseded and must not win
        state.apply(&AppEvent::FilterLoaded {
            seq: 1,
            countries: vec![country("Finland", "FIN")],
        });

        let filtered = state.filtered.as_ref().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].cca3, "SWE");
    }

    #[test]
    fn stale_filter_error_is_dropped() {
        let mut state = loaded_state();

        state.filter_issued(1);
        state.filter_issued(2);

        state.apply(&AppEvent::FilterLoaded {
            seq: 2,
            countries: vec![country("Sweden", "SWE")],
        });
        state.apply(&AppEvent::FilterFailed {
            seq: 1,
            message: "failed to fetch lang".to_string(),
        });

        assert!(state.error.is_none());
        assert!(state.filtered.is_some());
    }

    #[test]
    fn display_prefers_local_search_over_filter() {
        let mut state = loaded_state();
        state.filter_issued(1);
        state.apply(&AppEvent::FilterLoaded {
            seq: 1,
            countries: vec![country("Sweden", "SWE")],
        });

        // Search wins over the server-side filter
        let shown = state.display("nor");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].cca3, "NOR");

        // Without a search the filter result shows
        let shown = state.display("");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].cca3, "SWE");
    }

    #[test]
    fn display_falls_back_to_catalog_when_filter_empty() {
        let mut state = loaded_state();
        state.filter_issued(1);
        state.apply(&AppEvent::FilterLoaded {
            seq: 1,
            countries: vec![],
        });

        assert_eq!(state.display("").len(), 3);
    }

    #[test]
    fn find_by_code() {
        let state = loaded_state();
        assert_eq!(state.find("SWE").unwrap().name.common, "Sweden");
        assert!(state.find("ZZZ").is_none());
    }
}

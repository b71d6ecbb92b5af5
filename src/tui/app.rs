// TUI application state
//
// App owns every piece of state the interface renders: the catalog state
// container, search and filter selections, pagination, the favorites cache,
// session prefs and the currently open modal. All mutation happens here or
// in the reducers it calls into; the views only read.

use super::input::InputHandler;
use super::layout::Breakpoint;
use super::modal::{FilterCriterion, Modal};
use crate::catalog::pagination::Pager;
use crate::catalog::sort::{sort_countries, SortField, SortOrder};
use crate::catalog::{CatalogState, Fetcher};
use crate::config::Config;
use crate::events::AppEvent;
use crate::favorites::Favorites;
use crate::logging::LogBuffer;
use crate::model::Country;
use crate::session::SessionPrefs;
use crate::store::FileStore;
use crate::theme::{Theme, ThemeKind};
use std::time::Instant;

/// Regions offered by the region filter, in cycle order
pub const REGIONS: &[&str] = &["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// (code, label) pairs offered by the language filter, in cycle order
pub const LANGUAGES: &[(&str, &str)] = &[
    ("eng", "English"),
    ("spa", "Spanish"),
    ("fra", "French"),
    ("ara", "Arabic"),
    ("por", "Portuguese"),
    ("rus", "Russian"),
    ("hin", "Hindi"),
    ("deu", "German"),
    ("jpn", "Japanese"),
    ("zho", "Chinese"),
];

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Catalog, // Search, filters, paginated card grid
    Favorites, // Favorite countries only
    Detail,    // One country in full
}

impl View {
    /// Get display name for the title bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Catalog => "Catalog",
            View::Favorites => "Favorites",
            View::Detail => "Details",
        }
    }
}

/// Map a route path to a view, mirroring the original URL scheme.
/// Unknown paths fall back to the catalog.
pub fn route_view(path: &str) -> (View, Option<String>) {
    if path == "/favorites" {
        return (View::Favorites, None);
    }
    if let Some(code) = path.strip_prefix("/country/") {
        if !code.is_empty() && !code.contains('/') {
            return (View::Detail, Some(code.to_uppercase()));
        }
    }
    (View::Catalog, None)
}

/// State of the country detail view
#[derive(Debug, Default)]
pub struct DetailState {
    pub code: String,
    pub country: Option<Country>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Main application state for the TUI
pub struct App {
    /// Current view being displayed
    pub view: View,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Catalog data, filter results and loading/error flags
    pub catalog: CatalogState,

    /// Dispatches fetch tasks
    pub fetcher: Fetcher,

    /// Local search term (filters the full catalog client-side)
    pub search: String,

    /// True while keystrokes go to the search box
    pub search_active: bool,

    /// Dropdown-style filter selections
    pub selected_region: Option<String>,
    pub selected_language: Option<String>,

    /// Label of the active server-side filter, for the status bar
    pub filter_label: Option<String>,

    /// Active sort, None = API order
    pub sort: Option<(SortField, SortOrder)>,

    /// Catalog view pagination and selection
    pub pager: Pager,
    pub selected: usize,

    /// Favorites view pagination and selection
    pub fav_pager: Pager,
    pub fav_selected: usize,

    /// Favorites persistence plus an in-memory cache of the codes
    pub favorites: Favorites<FileStore>,
    pub favorite_codes: Vec<String>,

    /// Session prefs persistence
    pub prefs: SessionPrefs<FileStore>,
    pub is_logged_in: bool,

    /// Country detail state
    pub detail: DetailState,

    /// Currently open modal, if any
    pub modal: Option<Modal>,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for the logs modal
    pub log_buffer: LogBuffer,

    /// Fixed page size from config; None chooses from terminal width
    fixed_page_size: Option<usize>,

    /// Input handler for flexible key behavior
    input: InputHandler,

    /// When the app started (for uptime display)
    pub start_time: Instant,
}

impl App {
    pub fn new(
        config: &Config,
        fetcher: Fetcher,
        favorites: Favorites<FileStore>,
        prefs: SessionPrefs<FileStore>,
        log_buffer: LogBuffer,
    ) -> Self {
        let theme_kind = ThemeKind::by_name(&config.theme);
        let favorite_codes = favorites.get();
        let is_logged_in = prefs.is_logged_in();

        // Restore the last filter selections for display; no fetch is
        // re-issued for them on startup
        let selected_region = prefs.selected_region();
        let selected_language = prefs.selected_language();

        let page_size = config.page_size.unwrap_or(4);

        Self {
            view: View::default(),
            should_quit: false,
            catalog: CatalogState::new(),
            fetcher,
            search: String::new(),
            search_active: false,
            selected_region,
            selected_language,
            filter_label: None,
            sort: None,
            pager: Pager::new(page_size),
            selected: 0,
            fav_pager: Pager::new(page_size),
            fav_selected: 0,
            favorites,
            favorite_codes,
            prefs,
            is_logged_in,
            detail: DetailState::default(),
            modal: None,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            fixed_page_size: config.page_size,
            input: InputHandler::default(),
            start_time: Instant::now(),
        }
    }

    // ── Event handling ───────────────────────────────────────────────────

    /// Fold one fetch-task event into the state
    pub fn apply_event(&mut self, event: AppEvent) {
        self.catalog.apply(&event);

        match &event {
            AppEvent::CatalogLoaded { .. } => {
                self.pager.reset();
                self.selected = 0;
            }
            // `loading` cleared means this completion won (was not stale)
            AppEvent::FilterLoaded { .. } if !self.catalog.loading => {
                self.pager.reset();
                self.selected = 0;
            }
            AppEvent::CountryLoaded { code, country } if *code == self.detail.code => {
                self.detail.country = Some((**country).clone());
                self.detail.loading = false;
                self.detail.error = None;
            }
            AppEvent::CountryFailed { code, message } if *code == self.detail.code => {
                self.detail.error = Some(message.clone());
                self.detail.loading = false;
            }
            _ => {}
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input.handle_key_release(key);
    }

    // ── Display lists ────────────────────────────────────────────────────

    /// The catalog list the UI renders: search beats server-side filter
    /// beats full catalog, with the active sort applied on top
    pub fn display_list(&self) -> Vec<&Country> {
        let mut list = self.catalog.display(&self.search);
        if let Some((field, order)) = self.sort {
            sort_countries(&mut list, field, order);
        }
        list
    }

    /// Favorite countries resolved against the full catalog
    pub fn favorites_list(&self) -> Vec<&Country> {
        self.catalog
            .countries
            .iter()
            .filter(|c| self.favorite_codes.iter().any(|code| *code == c.cca3))
            .collect()
    }

    fn active_len(&self) -> usize {
        match self.view {
            View::Favorites => self.favorites_list().len(),
            _ => self.display_list().len(),
        }
    }

    // ── Pagination and selection ─────────────────────────────────────────

    /// Recompute the responsive page size from the terminal width.
    /// Called from the render path, where the width is known.
    pub fn update_page_size(&mut self, width: u16) {
        let size = self
            .fixed_page_size
            .unwrap_or_else(|| Breakpoint::from_width(width).cards_per_page());

        let len = self.display_list().len();
        self.pager.set_page_size(size, len);

        let fav_len = self.favorites_list().len();
        self.fav_pager.set_page_size(size, fav_len);
    }

    pub fn select_next(&mut self) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        match self.view {
            View::Favorites => {
                if self.fav_selected + 1 < len {
                    self.fav_selected += 1;
                }
                let page = self.fav_selected / self.fav_pager.page_size + 1;
                self.fav_pager.go_to_page(page, len);
            }
            _ => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                let page = self.selected / self.pager.page_size + 1;
                self.pager.go_to_page(page, len);
            }
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.active_len();
        match self.view {
            View::Favorites => {
                self.fav_selected = self.fav_selected.saturating_sub(1);
                let page = self.fav_selected / self.fav_pager.page_size + 1;
                self.fav_pager.go_to_page(page, len);
            }
            _ => {
                self.selected = self.selected.saturating_sub(1);
                let page = self.selected / self.pager.page_size + 1;
                self.pager.go_to_page(page, len);
            }
        }
    }

    pub fn page_next(&mut self) {
        let len = self.active_len();
        match self.view {
            View::Favorites => {
                self.fav_pager.next_page(len);
                self.fav_selected = self.fav_pager.page_bounds(len).0.min(len.saturating_sub(1));
            }
            _ => {
                self.pager.next_page(len);
                self.selected = self.pager.page_bounds(len).0.min(len.saturating_sub(1));
            }
        }
    }

    pub fn page_prev(&mut self) {
        let len = self.active_len();
        match self.view {
            View::Favorites => {
                self.fav_pager.prev_page(len);
                self.fav_selected = self.fav_pager.page_bounds(len).0.min(len.saturating_sub(1));
            }
            _ => {
                self.pager.prev_page(len);
                self.selected = self.pager.page_bounds(len).0.min(len.saturating_sub(1));
            }
        }
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.on_search_changed();
    }

    pub fn search_pop(&mut self) {
        self.search.pop();
        self.on_search_changed();
    }

    pub fn search_clear(&mut self) {
        self.search.clear();
        self.search_active = false;
        self.pager.reset();
        self.selected = 0;
    }

    /// Typing a search term clears the dropdown filter selections
    fn on_search_changed(&mut self) {
        if !self.search.is_empty() {
            if self.selected_region.is_some() {
                self.selected_region = None;
                self.prefs.set_selected_region(None);
            }
            if self.selected_language.is_some() {
                self.selected_language = None;
                self.prefs.set_selected_language(None);
            }
        }
        self.pager.reset();
        self.selected = 0;
    }

    // ── Server-side filters ──────────────────────────────────────────────

    /// Cycle the region filter: None -> Africa -> ... -> Oceania -> None
    pub fn cycle_region(&mut self) {
        let next = match self.selected_region.as_deref() {
            None => Some(REGIONS[0]),
            Some(current) => REGIONS
                .iter()
                .position(|r| *r == current)
                .and_then(|i| REGIONS.get(i + 1))
                .copied(),
        };
        self.choose_region(next);
    }

    /// Select a region (or clear with None) and fetch its countries
    pub fn choose_region(&mut self, region: Option<&str>) {
        self.search.clear();
        self.search_active = false;
        if self.selected_language.is_some() {
            self.selected_language = None;
            self.prefs.set_selected_language(None);
        }

        self.selected_region = region.map(String::from);
        self.prefs.set_selected_region(region);
        self.filter_label = region.map(|r| format!("Region: {}", r));

        match region {
            Some(region) => {
                let seq = self.fetcher.fetch_by_region(region);
                self.catalog.filter_issued(seq);
            }
            // "All Regions": fall back to the full catalog without a fetch
            None => self.catalog.clear_filtered(),
        }

        self.pager.reset();
        self.selected = 0;
    }

    /// Cycle the language filter through LANGUAGES and back to None
    pub fn cycle_language(&mut self) {
        let next = match self.selected_language.as_deref() {
            None => Some(LANGUAGES[0].0),
            Some(current) => LANGUAGES
                .iter()
                .position(|(code, _)| *code == current)
                .and_then(|i| LANGUAGES.get(i + 1))
                .map(|(code, _)| *code),
        };
        self.choose_language(next);
    }

    /// Select a language (or clear with None) and fetch its countries
    pub fn choose_language(&mut self, language: Option<&str>) {
        self.search.clear();
        self.search_active = false;
        if self.selected_region.is_some() {
            self.selected_region = None;
            self.prefs.set_selected_region(None);
        }

        self.selected_language = language.map(String::from);
        self.prefs.set_selected_language(language);
        self.filter_label = language.map(|code| {
            let label = LANGUAGES
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| *label)
                .unwrap_or(code);
            format!("Language: {}", label)
        });

        match language {
            Some(language) => {
                let seq = self.fetcher.fetch_by_language(language);
                self.catalog.filter_issued(seq);
            }
            None => self.catalog.clear_filtered(),
        }

        self.pager.reset();
        self.selected = 0;
    }

    /// Dispatch a filter chosen from the criteria prompt
    pub fn apply_criterion(&mut self, criterion: FilterCriterion, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        // A prompt filter replaces search and dropdown selections
        self.search.clear();
        self.search_active = false;
        self.selected_region = None;
        self.prefs.set_selected_region(None);
        self.selected_language = None;
        self.prefs.set_selected_language(None);

        let seq = match criterion {
            FilterCriterion::Independent => self
                .fetcher
                .fetch_independent(value.eq_ignore_ascii_case("true")),
            FilterCriterion::Name => self.fetcher.fetch_by_name(value),
            FilterCriterion::FullName => self.fetcher.fetch_by_full_name(value),
            FilterCriterion::Code => self.fetcher.fetch_by_code(value),
            FilterCriterion::Codes => {
                let codes: Vec<String> = value
                    .split([';', ',', ' '])
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                self.fetcher.fetch_by_codes(codes)
            }
            FilterCriterion::Currency => self.fetcher.fetch_by_currency(value),
            FilterCriterion::Language => self.fetcher.fetch_by_language(value),
            FilterCriterion::Capital => self.fetcher.fetch_by_capital(value),
            FilterCriterion::CallingCode => self.fetcher.fetch_by_calling_code(value),
            FilterCriterion::Region => self.fetcher.fetch_by_region(value),
            FilterCriterion::RegionalBloc => self.fetcher.fetch_by_regional_bloc(value),
            FilterCriterion::Subregion => self.fetcher.fetch_by_subregion(value),
            FilterCriterion::Translation => self.fetcher.fetch_by_translation(value),
        };
        self.catalog.filter_issued(seq);
        self.filter_label = Some(format!("{}: {}", criterion.label(), value));

        self.pager.reset();
        self.selected = 0;
    }

    /// Drop every active filter: search, dropdown selections and the
    /// server-side filter result
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.search_active = false;
        if self.selected_region.is_some() {
            self.selected_region = None;
            self.prefs.set_selected_region(None);
        }
        if self.selected_language.is_some() {
            self.selected_language = None;
            self.prefs.set_selected_language(None);
        }
        self.filter_label = None;
        self.catalog.clear_filtered();
        self.pager.reset();
        self.selected = 0;
    }

    // ── Sorting ──────────────────────────────────────────────────────────

    /// Cycle: API order -> name A-Z -> population high-low -> area high-low
    pub fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some((SortField::Name, SortOrder::Ascending)),
            Some((SortField::Name, _)) => Some((SortField::Population, SortOrder::Descending)),
            Some((SortField::Population, _)) => Some((SortField::Area, SortOrder::Descending)),
            Some((SortField::Area, _)) => None,
        };
        self.pager.reset();
        self.selected = 0;
    }

    pub fn sort_label(&self) -> Option<String> {
        self.sort.map(|(field, order)| {
            let arrow = match order {
                SortOrder::Ascending => "↑",
                SortOrder::Descending => "↓",
            };
            format!("{}{}", field.label(), arrow)
        })
    }

    // ── Favorites ────────────────────────────────────────────────────────

    /// Toggle the favorite flag of whatever the current view has selected
    pub fn toggle_favorite_selected(&mut self) {
        let code = match self.view {
            View::Catalog => self
                .display_list()
                .get(self.selected)
                .map(|c| c.cca3.clone()),
            View::Favorites => self
                .favorites_list()
                .get(self.fav_selected)
                .map(|c| c.cca3.clone()),
            View::Detail => self
                .detail
                .country
                .as_ref()
                .map(|c| c.cca3.clone())
                .filter(|c| !c.is_empty())
                .or_else(|| Some(self.detail.code.clone())),
        };

        let Some(code) = code.filter(|c| !c.is_empty()) else {
            return;
        };
        self.favorite_codes = self.favorites.toggle(&code);

        // Removing a favorite can shrink the favorites view under the cursor
        let fav_len = self.favorites_list().len();
        if self.fav_selected >= fav_len {
            self.fav_selected = fav_len.saturating_sub(1);
        }
        self.fav_pager
            .go_to_page(self.fav_pager.current_page, fav_len);
    }

    // ── Navigation between views ─────────────────────────────────────────

    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.search_active = false;
    }

    /// Open the detail view for a country code. The catalog copy is used
    /// when present; otherwise a single-country fetch is dispatched.
    pub fn open_detail(&mut self, code: &str) {
        self.detail = DetailState {
            code: code.to_string(),
            ..DetailState::default()
        };

        if let Some(country) = self.catalog.find(code) {
            self.detail.country = Some(country.clone());
        } else {
            self.detail.loading = true;
            self.fetcher.fetch_country(code);
        }
        self.set_view(View::Detail);
    }

    /// Open the detail view for the current selection
    pub fn open_selected_detail(&mut self) {
        let code = match self.view {
            View::Favorites => self
                .favorites_list()
                .get(self.fav_selected)
                .map(|c| c.cca3.clone()),
            _ => self
                .display_list()
                .get(self.selected)
                .map(|c| c.cca3.clone()),
        };
        if let Some(code) = code.filter(|c| !c.is_empty()) {
            self.open_detail(&code);
        }
    }

    /// Back from detail or favorites to the catalog
    pub fn go_back(&mut self) {
        self.set_view(View::Catalog);
    }

    // ── Login ────────────────────────────────────────────────────────────

    pub fn complete_login(&mut self) {
        self.is_logged_in = true;
        self.prefs.set_logged_in(true);
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.prefs.set_logged_in(false);
    }

    // ── Misc ─────────────────────────────────────────────────────────────

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CountryClient;
    use crate::model::CountryName;
    use std::time::Duration;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

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

    fn test_app(dir: &TempDir) -> App {
        let store = FileStore::new(dir.path().to_path_buf());
        let client = CountryClient::new("http://localhost:1", Duration::from_secs(1)).unwrap();
        let (tx, _rx) = mpsc::channel(16);
        let mut app = App::new(
            &Config::default(),
            Fetcher::new(client, tx),
            Favorites::new(store.clone()),
            SessionPrefs::new(store),
            LogBuffer::new(),
        );
        app.apply_event(AppEvent::CatalogLoaded {
            countries: vec![
                country("Finland", "FIN"),
                country("Sweden", "SWE"),
                country("Norway", "NOR"),
            ],
        });
        app
    }

    #[test]
    fn routes_map_to_views() {
        assert_eq!(route_view("/"), (View::Catalog, None));
        assert_eq!(route_view("/favorites"), (View::Favorites, None));
        assert_eq!(
            route_view("/country/fin"),
            (View::Detail, Some("FIN".to_string()))
        );
        // Anything else redirects to the catalog
        assert_eq!(route_view("/nonsense"), (View::Catalog, None));
        assert_eq!(route_view("/country/"), (View::Catalog, None));
    }

    #[tokio::test]
    async fn searching_clears_dropdown_selections() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.choose_region(Some("Europe"));
        assert_eq!(app.selected_region.as_deref(), Some("Europe"));

        app.search_push('f');
        assert!(app.selected_region.is_none());
        assert!(app.prefs.selected_region().is_none());
        assert_eq!(app.pager.current_page, 1);
    }

    #[tokio::test]
    async fn region_choice_clears_search_and_language() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.search_push('f');
        app.choose_language(Some("eng"));
        app.choose_region(Some("Asia"));

        assert!(app.search.is_empty());
        assert!(app.selected_language.is_none());
        assert_eq!(app.selected_region.as_deref(), Some("Asia"));
        assert_eq!(app.prefs.selected_region().as_deref(), Some("Asia"));
        assert!(app.catalog.loading);
    }

    #[tokio::test]
    async fn clearing_region_restores_full_catalog_without_fetch() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.choose_region(Some("Europe"));
        app.apply_event(AppEvent::FilterLoaded {
            seq: 1,
            countries: vec![country("Finland", "FIN")],
        });
        assert_eq!(app.display_list().len(), 1);

        app.choose_region(None);
        assert!(app.catalog.filtered.is_none());
        assert_eq!(app.display_list().len(), 3);
    }

    #[tokio::test]
    async fn region_cycle_wraps_back_to_none() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        for expected in REGIONS {
            app.cycle_region();
            assert_eq!(app.selected_region.as_deref(), Some(*expected));
        }
        app.cycle_region();
        assert!(app.selected_region.is_none());
    }

    #[tokio::test]
    async fn favorites_toggle_from_catalog_view() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.selected = 1; // Sweden
        app.toggle_favorite_selected();
        assert_eq!(app.favorite_codes, vec!["SWE"]);
        assert_eq!(app.favorites_list().len(), 1);

        app.toggle_favorite_selected();
        assert!(app.favorite_codes.is_empty());
    }

    #[tokio::test]
    async fn detail_uses_catalog_copy_when_available() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.open_detail("SWE");
        assert_eq!(app.view, View::Detail);
        assert!(!app.detail.loading);
        assert_eq!(app.detail.country.as_ref().unwrap().name.common, "Sweden");
    }

    #[tokio::test]
    async fn detail_failure_is_recorded() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.open_detail("XYZ");
        assert!(app.detail.loading);

        app.apply_event(AppEvent::CountryFailed {
            code: "XYZ".to_string(),
            message: "country not found".to_string(),
        });
        assert!(!app.detail.loading);
        assert_eq!(app.detail.error.as_deref(), Some("country not found"));
    }

    #[tokio::test]
    async fn selection_follows_pages() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.pager.set_page_size(2, 3);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        // Third item lives on page 2
        assert_eq!(app.pager.current_page, 2);

        app.page_prev();
        assert_eq!(app.pager.current_page, 1);
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn winning_filter_resets_pagination() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.pager.set_page_size(1, 3);
        app.page_next();
        assert_eq!(app.pager.current_page, 2);

        app.choose_region(Some("Europe"));
        app.apply_event(AppEvent::FilterLoaded {
            seq: 1,
            countries: vec![country("Finland", "FIN"), country("Sweden", "SWE")],
        });
        assert_eq!(app.pager.current_page, 1);
        assert_eq!(app.selected, 0);
    }
}

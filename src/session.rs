// Persisted UI convenience state
//
// The login flag and the last-chosen filter selections survive restarts the
// same way the favorites do, through the key-value store. None of this is
// security-relevant: "logged in" is a cosmetic client-side flag.

use crate::store::KeyValueStore;

const LOGGED_IN_KEY: &str = "is_logged_in";
const REGION_KEY: &str = "selected_region";
const LANGUAGE_KEY: &str = "selected_language";

/// Session preferences over an injected persistence capability
pub struct SessionPrefs<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionPrefs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True only when the flag is present with the literal value "true"
    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// Logging out removes the flag rather than storing "false"
    pub fn set_logged_in(&self, logged_in: bool) {
        if logged_in {
            self.store.set(LOGGED_IN_KEY, "true", None);
        } else {
            self.store.remove(LOGGED_IN_KEY);
        }
    }

    pub fn selected_region(&self) -> Option<String> {
        self.store.get(REGION_KEY)
    }

    pub fn set_selected_region(&self, region: Option<&str>) {
        match region {
            Some(region) => self.store.set(REGION_KEY, region, None),
            None => self.store.remove(REGION_KEY),
        }
    }

    pub fn selected_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY)
    }

    pub fn set_selected_language(&self, language: Option<&str>) {
        match language {
            Some(language) => self.store.set(LANGUAGE_KEY, language, None),
            None => self.store.remove(LANGUAGE_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn login_flag_roundtrip() {
        let prefs = SessionPrefs::new(MemoryStore::new());
        assert!(!prefs.is_logged_in());

        prefs.set_logged_in(true);
        assert!(prefs.is_logged_in());

        prefs.set_logged_in(false);
        assert!(!prefs.is_logged_in());
    }

    #[test]
    fn arbitrary_flag_value_is_not_logged_in() {
        let store = MemoryStore::new();
        store.set("is_logged_in", "yes", None);
        let prefs = SessionPrefs::new(store);
        assert!(!prefs.is_logged_in());
    }

    #[test]
    fn filter_selections_roundtrip() {
        let prefs = SessionPrefs::new(MemoryStore::new());
        assert_eq!(prefs.selected_region(), None);

        prefs.set_selected_region(Some("Europe"));
        prefs.set_selected_language(Some("fin"));
        assert_eq!(prefs.selected_region().as_deref(), Some("Europe"));
        assert_eq!(prefs.selected_language().as_deref(), Some("fin"));

        prefs.set_selected_region(None);
        assert_eq!(prefs.selected_region(), None);
        // Clearing one selection leaves the other alone
        assert_eq!(prefs.selected_language().as_deref(), Some("fin"));
    }
}

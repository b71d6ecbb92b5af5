// Favorites list persisted through the key-value store
//
// The list of favorite cca3 codes lives under a single key as a JSON array,
// refreshed to a 30-day expiry on every write. All operations are
// read-modify-write against that one value; concurrent processes race and
// the last write wins. Malformed or absent data reads as an empty list.

use crate::store::KeyValueStore;
use chrono::Duration;

/// Store key holding the JSON-encoded favorites array
pub const FAVORITES_KEY: &str = "favorites";

/// Favorites expire 30 days after the last write
const FAVORITES_TTL_DAYS: i64 = 30;

/// Favorites list over an injected persistence capability
pub struct Favorites<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current favorite codes, in insertion order
    pub fn get(&self) -> Vec<String> {
        let Some(raw) = self.store.get(FAVORITES_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!("malformed favorites value, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Add a code unless already present; returns the updated list
    pub fn add(&self, code: &str) -> Vec<String> {
        let mut codes = self.get();
        if !codes.iter().any(|c| c == code) {
            codes.push(code.to_string());
            self.save(&codes);
        }
        codes
    }

    /// Remove a code; returns the updated list
    pub fn remove(&self, code: &str) -> Vec<String> {
        let mut codes = self.get();
        codes.retain(|c| c != code);
        self.save(&codes);
        codes
    }

    /// Add if absent, remove if present; returns the updated list
    pub fn toggle(&self, code: &str) -> Vec<String> {
        let mut codes = self.get();
        if codes.iter().any(|c| c == code) {
            codes.retain(|c| c != code);
        } else {
            codes.push(code.to_string());
        }
        self.save(&codes);
        codes
    }

    /// Membership check
    pub fn is_favorite(&self, code: &str) -> bool {
        self.get().iter().any(|c| c == code)
    }

    fn save(&self, codes: &[String]) {
        match serde_json::to_string(codes) {
            Ok(json) => self.store.set(
                FAVORITES_KEY,
                &json,
                Some(Duration::days(FAVORITES_TTL_DAYS)),
            ),
            Err(e) => tracing::warn!("could not serialize favorites: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn absent_key_reads_as_empty() {
        let favorites = Favorites::new(MemoryStore::new());
        assert!(favorites.get().is_empty());
        assert!(!favorites.is_favorite("FIN"));
    }

    #[test]
    fn malformed_value_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{definitely not an array", None);

        let favorites = Favorites::new(store);
        assert!(favorites.get().is_empty());
    }

    #[test]
    fn add_is_deduplicated() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add("FIN");
        favorites.add("SWE");
        favorites.add("FIN");
        assert_eq!(favorites.get(), vec!["FIN", "SWE"]);
    }

    #[test]
    fn remove_drops_only_the_given_code() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add("FIN");
        favorites.add("SWE");
        favorites.remove("FIN");
        assert_eq!(favorites.get(), vec!["SWE"]);
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let favorites = Favorites::new(MemoryStore::new());

        // Starting absent: toggle twice ends absent
        favorites.toggle("FIN");
        assert!(favorites.is_favorite("FIN"));
        favorites.toggle("FIN");
        assert!(!favorites.is_favorite("FIN"));

        // Starting present: toggle twice ends present
        favorites.add("SWE");
        favorites.toggle("SWE");
        favorites.toggle("SWE");
        assert!(favorites.is_favorite("SWE"));
    }

    #[test]
    fn insertion_order_is_kept() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.toggle("NOR");
        favorites.toggle("FIN");
        favorites.toggle("SWE");
        assert_eq!(favorites.get(), vec!["NOR", "FIN", "SWE"]);
    }
}

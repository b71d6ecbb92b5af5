// Country data model
//
// These types mirror the REST Countries v3.1 record shape. The API returns
// far more fields than we use; everything unknown is ignored and every field
// we do read has a default, so a sparse `?fields=` projection still parses.
// A country is identified by its `cca3` code (ISO 3166-1 alpha-3) and is
// treated as an immutable value once fetched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common and official names for a country
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image URLs plus optional alt text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency entry, keyed by its code in `Country::currencies`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One country record as returned by the API
///
/// BTreeMap keeps currency/language display order stable across fetches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Country {
    #[serde(default)]
    pub name: CountryName,

    /// ISO 3166-1 alpha-3 code - the stable identifier
    #[serde(default)]
    pub cca3: String,

    #[serde(default)]
    pub independent: Option<bool>,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub subregion: Option<String>,

    #[serde(default)]
    pub capital: Vec<String>,

    #[serde(default)]
    pub population: u64,

    #[serde(default)]
    pub area: f64,

    #[serde(default)]
    pub flags: Flags,

    /// Currency code -> currency details
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,

    /// Language code -> language name
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// cca3 codes of bordering countries
    #[serde(default)]
    pub borders: Vec<String>,

    #[serde(default)]
    pub timezones: Vec<String>,

    /// [latitude, longitude]
    #[serde(default)]
    pub latlng: Vec<f64>,
}

impl Country {
    /// First capital city, or "N/A" when the record has none
    pub fn capital_display(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or("N/A")
    }

    /// All capitals joined with ", " (a few countries list several)
    pub fn capitals_joined(&self) -> String {
        if self.capital.is_empty() {
            "N/A".to_string()
        } else {
            self.capital.join(", ")
        }
    }

    /// Language names in stable (code) order
    pub fn language_names(&self) -> Vec<&str> {
        self.languages.values().map(String::as_str).collect()
    }

    /// Currencies rendered as "Name (symbol)" entries
    pub fn currency_display(&self) -> String {
        if self.currencies.is_empty() {
            return "N/A".to_string();
        }
        self.currencies
            .values()
            .map(|c| match &c.symbol {
                Some(symbol) => format!("{} ({})", c.name, symbol),
                None => c.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "name": {"common": "Finland", "official": "Republic of Finland"},
            "cca3": "FIN",
            "independent": true,
            "region": "Europe",
            "subregion": "Northern Europe",
            "capital": ["Helsinki"],
            "population": 5530719,
            "area": 338424.0,
            "flags": {"svg": "https://flagcdn.com/fi.svg", "png": "https://flagcdn.com/w320/fi.png"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "languages": {"fin": "Finnish", "swe": "Swedish"},
            "borders": ["NOR", "SWE", "RUS"],
            "timezones": ["UTC+02:00"],
            "latlng": [64.0, 26.0],
            "unusedExtraField": {"ignored": true}
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name.common, "Finland");
        assert_eq!(country.cca3, "FIN");
        assert_eq!(country.capital_display(), "Helsinki");
        assert_eq!(country.currency_display(), "Euro (€)");
        assert_eq!(country.language_names(), vec!["Finnish", "Swedish"]);
    }

    #[test]
    fn parses_sparse_record() {
        // A `?fields=name,cca3` projection returns only the requested fields
        let json = r#"{"name": {"common": "Peru"}, "cca3": "PER"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name.common, "Peru");
        assert_eq!(country.capital_display(), "N/A");
        assert_eq!(country.currency_display(), "N/A");
        assert_eq!(country.population, 0);
    }

    #[test]
    fn currency_without_symbol() {
        let json = r#"{"cca3": "XXX", "currencies": {"XDR": {"name": "SDR"}}}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.currency_display(), "SDR");
    }
}

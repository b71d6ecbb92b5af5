// Local search filter
//
// Pure, side-effect free, and stable: input order is preserved. The search
// term matches case-insensitively as a substring of either the common or
// the official name. An empty term is the identity.

use crate::model::Country;

/// Filter the in-memory catalog by a search term
pub fn filter_countries<'a>(countries: &'a [Country], term: &str) -> Vec<&'a Country> {
    if term.is_empty() {
        return countries.iter().collect();
    }

    let needle = term.to_lowercase();
    countries
        .iter()
        .filter(|country| {
            country.name.common.to_lowercase().contains(&needle)
                || country.name.official.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CountryName;

    fn country(common: &str, official: &str) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: official.to_string(),
            },
            cca3: common[..3.min(common.len())].to_uppercase(),
            ..Country::default()
        }
    }

    fn catalog() -> Vec<Country> {
        vec![
            country("Finland", "Republic of Finland"),
            country("France", "French Republic"),
            country("Germany", "Federal Republic of Germany"),
            country("Ireland", "Ireland"),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let countries = catalog();
        let result = filter_countries(&countries, "");
        let names: Vec<_> = result.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Finland", "France", "Germany", "Ireland"]);
    }

    #[test]
    fn matches_common_name_case_insensitively() {
        let countries = catalog();
        let result = filter_countries(&countries, "fInLaNd");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name.common, "Finland");
    }

    #[test]
    fn matches_official_name() {
        let countries = catalog();
        // "federal" only appears in Germany's official name
        let result = filter_countries(&countries, "federal");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name.common, "Germany");
    }

    #[test]
    fn preserves_input_order() {
        let countries = catalog();
        // "republic" matches Finland, France and Germany via official names
        let result = filter_countries(&countries, "republic");
        let names: Vec<_> = result.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Finland", "France", "Germany"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let countries = catalog();
        assert!(filter_countries(&countries, "atlantis").is_empty());
    }
}

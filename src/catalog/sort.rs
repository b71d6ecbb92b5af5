// Catalog sorting
//
// Sorts a display list by a field in either direction. Name comparison is
// case-insensitive; numeric fields fall back to equal ordering on NaN so the
// sort is total.

use crate::model::Country;
use std::cmp::Ordering;

/// Field the catalog can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Population,
    Area,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Population => "population",
            SortField::Area => "area",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort a list of country references in place
pub fn sort_countries(countries: &mut [&Country], field: SortField, order: SortOrder) {
    countries.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a
                .name
                .common
                .to_lowercase()
                .cmp(&b.name.common.to_lowercase()),
            SortField::Population => a.population.cmp(&b.population),
            SortField::Area => a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CountryName;

    fn country(common: &str, population: u64, area: f64) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: common.to_string(),
            },
            population,
            area,
            ..Country::default()
        }
    }

    #[test]
    fn sorts_by_name_ascending() {
        let a = country("iceland", 370_000, 103_000.0);
        let b = country("Brazil", 212_000_000, 8_515_000.0);
        let c = country("chad", 16_000_000, 1_284_000.0);
        let mut refs = vec![&a, &b, &c];

        sort_countries(&mut refs, SortField::Name, SortOrder::Ascending);
        let names: Vec<_> = refs.iter().map(|c| c.name.common.as_str()).collect();
        // Case-insensitive: lowercase "chad" sorts between Brazil and iceland
        assert_eq!(names, vec!["Brazil", "chad", "iceland"]);
    }

    #[test]
    fn sorts_by_population_descending() {
        let a = country("Iceland", 370_000, 103_000.0);
        let b = country("Brazil", 212_000_000, 8_515_000.0);
        let c = country("Chad", 16_000_000, 1_284_000.0);
        let mut refs = vec![&a, &b, &c];

        sort_countries(&mut refs, SortField::Population, SortOrder::Descending);
        let names: Vec<_> = refs.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Brazil", "Chad", "Iceland"]);
    }

    #[test]
    fn sorts_by_area_ascending() {
        let a = country("Iceland", 370_000, 103_000.0);
        let b = country("Brazil", 212_000_000, 8_515_000.0);
        let c = country("Chad", 16_000_000, 1_284_000.0);
        let mut refs = vec![&b, &a, &c];

        sort_countries(&mut refs, SortField::Area, SortOrder::Ascending);
        let names: Vec<_> = refs.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Iceland", "Chad", "Brazil"]);
    }
}

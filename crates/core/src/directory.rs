//! Business directory: the listings the filters modal narrows down.

use serde::Deserialize;

use crate::filters::{PriceRange, SearchCriteria, ALL};

/// A single listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Business {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: PriceRange,
    /// Average star rating, 0.0–5.0.
    #[serde(default)]
    pub rating: f32,
}

/// Listings plus the category names offered by the filters modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    businesses: Vec<Business>,
    categories: Vec<String>,
}

impl Directory {
    /// Build a directory. Configured categories come first, in the given order,
    /// followed by any further categories seen on listings.
    ///
    /// Listing categories are trimmed so they compare equal to the offered names.
    pub fn new(mut businesses: Vec<Business>, configured_categories: Vec<String>) -> Self {
        for b in &mut businesses {
            b.category = b.category.trim().to_string();
        }

        let mut categories: Vec<String> = Vec::new();
        let seen = configured_categories
            .into_iter()
            .chain(businesses.iter().map(|b| b.category.clone()));
        for name in seen {
            let name = name.trim().to_string();
            if name.is_empty() || name == ALL || categories.contains(&name) {
                continue;
            }
            categories.push(name);
        }
        Self { businesses, categories }
    }

    /// Built-in listings used when no `.bizscope.toml` is present.
    pub fn sample() -> Self {
        let rows: [(&str, &str, &str, PriceRange, f32); 8] = [
            ("Joe's Diner", "Food", "Springfield", PriceRange::One, 4.3),
            ("Luigi's Trattoria", "Food", "Shelbyville", PriceRange::Three, 4.7),
            ("Corner Bakery", "Food", "Springfield", PriceRange::One, 3.8),
            ("Kwik Mart", "Retail", "Springfield", PriceRange::Two, 2.9),
            ("Shelbyville Outfitters", "Retail", "Shelbyville", PriceRange::Three, 4.1),
            ("Capital Hardware", "Retail", "Capital City", PriceRange::Two, 3.5),
            ("Brightside Dental", "Health", "Capital City", PriceRange::Four, 4.9),
            ("Evergreen Auto Repair", "Services", "Springfield", PriceRange::Two, 3.2),
        ];
        let businesses = rows
            .into_iter()
            .map(|(name, category, location, price, rating)| Business {
                name: name.to_string(),
                category: category.to_string(),
                location: location.to_string(),
                price,
                rating,
            })
            .collect();
        Self::new(businesses, Vec::new())
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Listings satisfying every criterion, in directory order.
    ///
    /// Search text matches name or category, location text matches location;
    /// both case-insensitive substrings where blank text matches everything.
    /// Category must match exactly unless it is [`ALL`].
    pub fn matching(&self, criteria: &SearchCriteria) -> Vec<&Business> {
        let search = criteria.search.trim().to_lowercase();
        let location = criteria.location.trim().to_lowercase();

        self.businesses
            .iter()
            .filter(|b| criteria.category == ALL || b.category == criteria.category)
            .filter(|b| {
                search.is_empty()
                    || b.name.to_lowercase().contains(&search)
                    || b.category.to_lowercase().contains(&search)
            })
            .filter(|b| location.is_empty() || b.location.to_lowercase().contains(&location))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(search: &str, category: &str, location: &str) -> SearchCriteria {
        SearchCriteria {
            search: search.into(),
            category: category.into(),
            location: location.into(),
        }
    }

    #[test]
    fn categories_merge_configured_then_seen() {
        let dir = Directory::new(
            vec![Business {
                name: "Kwik Mart".into(),
                category: "Retail".into(),
                location: String::new(),
                price: PriceRange::All,
                rating: 0.0,
            }],
            vec!["Food".into(), "all".into(), "Retail".into(), " ".into()],
        );
        assert_eq!(dir.categories(), &["Food".to_string(), "Retail".to_string()]);
    }

    #[test]
    fn padded_listing_category_matches_offered_name() {
        let dir = Directory::new(
            vec![Business {
                name: "Joe's Diner".into(),
                category: " Food ".into(),
                location: "Springfield".into(),
                price: PriceRange::One,
                rating: 4.3,
            }],
            Vec::new(),
        );
        assert_eq!(dir.categories(), &["Food".to_string()]);
        let offered = dir.categories()[0].clone();
        let hits = dir.matching(&criteria("", &offered, ""));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Food");
    }

    #[test]
    fn unfiltered_returns_everything_in_order() {
        let dir = Directory::sample();
        let hits = dir.matching(&SearchCriteria::default());
        assert_eq!(hits.len(), dir.len());
        assert_eq!(hits[0].name, "Joe's Diner");
    }

    #[test]
    fn combined_criteria_narrow_results() {
        let dir = Directory::sample();
        let hits = dir.matching(&criteria("joe", "Food", "springfield"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Joe's Diner");
    }

    #[test]
    fn search_matches_category_text() {
        let dir = Directory::sample();
        let hits = dir.matching(&criteria("HEALTH", ALL, ""));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Brightside Dental");
    }

    #[test]
    fn category_is_exact() {
        let dir = Directory::sample();
        assert!(dir.matching(&criteria("", "food", "")).is_empty());
        assert_eq!(dir.matching(&criteria("", "Retail", "")).len(), 3);
    }
}

//! Search filter modal state: the form bookkeeping behind the filters dialog,
//! kept independent of any UI toolkit so the open/confirm/reset contract can be
//! exercised without a renderer.
//!
//! Only search text, category and location are ever reported to the caller.
//! Price range and rating are collected locally for display and never leave
//! the modal.

use serde::Deserialize;
use tracing::debug;

/// Sentinel meaning "no restriction" for category, price range and rating.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Price bracket filter. `All` places no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PriceRange {
    #[default]
    All,
    One,
    Two,
    Three,
    Four,
}

impl PriceRange {
    /// Every option in display order.
    pub const OPTIONS: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::One,
        PriceRange::Two,
        PriceRange::Three,
        PriceRange::Four,
    ];

    /// Value used by the selection control.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceRange::All => ALL,
            PriceRange::One => "$",
            PriceRange::Two => "$$",
            PriceRange::Three => "$$$",
            PriceRange::Four => "$$$$",
        }
    }

    /// Human-readable option text.
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::All => "All Prices",
            other => other.as_str(),
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|p| p.as_str() == value)
    }
}

impl TryFrom<String> for PriceRange {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(value.trim())
            .ok_or_else(|| format!("invalid price range '{value}' (expected all, $, $$, $$$ or $$$$)"))
    }
}

/// Minimum star rating filter. `All` places no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingFilter {
    #[default]
    All,
    FourPlus,
    ThreePlus,
    TwoPlus,
    OnePlus,
}

impl RatingFilter {
    pub const OPTIONS: [RatingFilter; 5] = [
        RatingFilter::All,
        RatingFilter::FourPlus,
        RatingFilter::ThreePlus,
        RatingFilter::TwoPlus,
        RatingFilter::OnePlus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RatingFilter::All => ALL,
            RatingFilter::FourPlus => "4+",
            RatingFilter::ThreePlus => "3+",
            RatingFilter::TwoPlus => "2+",
            RatingFilter::OnePlus => "1+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingFilter::All => "All Ratings",
            RatingFilter::FourPlus => "4+ stars",
            RatingFilter::ThreePlus => "3+ stars",
            RatingFilter::TwoPlus => "2+ stars",
            RatingFilter::OnePlus => "1+ stars",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|r| r.as_str() == value)
    }

    /// Lowest rating that passes this filter, `None` for `All`.
    pub fn min_rating(self) -> Option<f32> {
        match self {
            RatingFilter::All => None,
            RatingFilter::FourPlus => Some(4.0),
            RatingFilter::ThreePlus => Some(3.0),
            RatingFilter::TwoPlus => Some(2.0),
            RatingFilter::OnePlus => Some(1.0),
        }
    }
}

/// Which version of the dialog is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    /// Category only. The search and location callbacks are still accepted
    /// but never invoked.
    Compact,
    /// Every field, including the local-only price range and rating.
    #[default]
    Full,
}

impl ModalVariant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(ModalVariant::Compact),
            "full" => Some(ModalVariant::Full),
            _ => None,
        }
    }

    /// Whether the business name field is shown and reported.
    pub fn shows_search(self) -> bool {
        self == ModalVariant::Full
    }

    pub fn shows_location(self) -> bool {
        self == ModalVariant::Full
    }

    /// Whether price range and rating selectors are shown.
    pub fn shows_local_filters(self) -> bool {
        self == ModalVariant::Full
    }
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Receiver for the values the modal reports on confirm and reset.
pub trait FilterSink {
    fn search_changed(&mut self, search: &str);
    fn category_changed(&mut self, category: &str);
    fn location_changed(&mut self, location: &str);
}

/// The criteria a caller actually receives from the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub search: String,
    pub category: String,
    pub location: String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            location: String::new(),
        }
    }
}

impl SearchCriteria {
    /// True when no criterion narrows the result set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.category == ALL && self.location.trim().is_empty()
    }
}

impl FilterSink for SearchCriteria {
    fn search_changed(&mut self, search: &str) {
        self.search = search.to_string();
    }

    fn category_changed(&mut self, category: &str) {
        self.category = category.to_string();
    }

    fn location_changed(&mut self, location: &str) {
        self.location = location.to_string();
    }
}

// ---------------------------------------------------------------------------
// Modal state
// ---------------------------------------------------------------------------

/// Transient state owned by one filters modal instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FiltersModalState {
    variant: ModalVariant,
    categories: Vec<String>,
    open: bool,
    search: String,
    category: String,
    location: String,
    price_range: PriceRange,
    rating: RatingFilter,
    /// Last initial-search value seen from the caller.
    observed_search: String,
}

impl FiltersModalState {
    /// Build closed modal state from the caller's configuration.
    ///
    /// Duplicate category names are dropped. An initial category that is not
    /// in the list falls back to [`ALL`].
    pub fn new(
        categories: Vec<String>,
        initial_search: Option<&str>,
        initial_category: Option<&str>,
        variant: ModalVariant,
    ) -> Self {
        let unique = unique_categories(categories);

        let category = match initial_category {
            Some(c) if unique.iter().any(|u| u == c) => c.to_string(),
            Some(c) if c != ALL => {
                debug!(category = c, "Initial category not offered, using 'all'");
                ALL.to_string()
            }
            _ => ALL.to_string(),
        };
        let search = initial_search.unwrap_or_default().to_string();

        Self {
            variant,
            categories: unique,
            open: false,
            observed_search: search.clone(),
            search,
            category,
            location: String::new(),
            price_range: PriceRange::All,
            rating: RatingFilter::All,
        }
    }

    pub fn variant(&self) -> ModalVariant {
        self.variant
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn rating(&self) -> RatingFilter {
        self.rating
    }

    /// Snapshot of the values that confirm would report.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            search: if self.variant.shows_search() {
                self.search.clone()
            } else {
                String::new()
            },
            category: self.category.clone(),
            location: if self.variant.shows_location() {
                self.location.clone()
            } else {
                String::new()
            },
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dismiss without reporting anything.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Select a category. Returns `false` and leaves the selection untouched
    /// when `category` is neither [`ALL`] nor one of the offered names.
    pub fn set_category(&mut self, category: &str) -> bool {
        if category == ALL || self.categories.iter().any(|c| c == category) {
            self.category = category.to_string();
            true
        } else {
            false
        }
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.price_range = price_range;
    }

    pub fn set_rating(&mut self, rating: RatingFilter) {
        self.rating = rating;
    }

    /// Replace the offered categories. A selection that is no longer offered
    /// falls back to [`ALL`].
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = unique_categories(categories);
        if self.category != ALL && !self.categories.contains(&self.category) {
            self.category = ALL.to_string();
        }
    }

    /// Overwrite local search text when the caller's initial search term has
    /// changed since it was last observed. Returns whether it overwrote.
    pub fn sync_initial_search(&mut self, initial_search: &str) -> bool {
        if self.observed_search == initial_search {
            return false;
        }
        debug!(search = initial_search, "Initial search term changed, overwriting local text");
        self.observed_search = initial_search.to_string();
        self.search = initial_search.to_string();
        true
    }

    /// Report the current values and close.
    pub fn confirm<S: FilterSink + ?Sized>(&mut self, sink: &mut S) {
        debug!(criteria = ?self.criteria(), "Applying search filters");
        self.report(sink);
        self.open = false;
    }

    /// Clear every field to its default and report the cleared values.
    /// Visibility is left as it was.
    pub fn reset<S: FilterSink + ?Sized>(&mut self, sink: &mut S) {
        debug!("Resetting search filters");
        self.search.clear();
        self.category = ALL.to_string();
        self.location.clear();
        self.price_range = PriceRange::All;
        self.rating = RatingFilter::All;
        self.report(sink);
    }

    fn report<S: FilterSink + ?Sized>(&self, sink: &mut S) {
        if self.variant.shows_search() {
            sink.search_changed(&self.search);
        }
        sink.category_changed(&self.category);
        if self.variant.shows_location() {
            sink.location_changed(&self.location);
        }
    }
}

/// Drop duplicates and the [`ALL`] sentinel, keeping first-seen order.
fn unique_categories(categories: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(categories.len());
    for name in categories {
        if name != ALL && !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

//! Root application component: header with quick search and filters, results, status bar.

use bizscope_core::{Business, ModalVariant, SearchCriteria, ALL};
use dioxus::prelude::*;

use crate::filters::FiltersModal;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let core = CORE.read();
    let quick_search = QUICK_SEARCH.read().clone();

    let (categories, initial_category, variant) = match core.as_ref() {
        Some(state) => (
            state.config.directory.categories().to_vec(),
            state.initial_category(),
            state.config.variant,
        ),
        None => (Vec::new(), ALL.to_string(), ModalVariant::Full),
    };

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                span { class: "app-title", "BizScope" }

                // Quick search, also seeds the modal's business name field
                input {
                    class: "quick-search",
                    r#type: "text",
                    placeholder: "Search businesses...",
                    value: "{quick_search}",
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        CRITERIA.write().search = value.clone();
                        *QUICK_SEARCH.write() = value;
                    },
                }

                FiltersModal {
                    categories,
                    initial_search_term: quick_search.clone(),
                    initial_category,
                    variant,
                    on_search_change: move |search: String| CRITERIA.write().search = search,
                    on_category_change: move |category: String| CRITERIA.write().category = category,
                    on_location_change: move |location: String| CRITERIA.write().location = location,
                    button { class: "btn btn-outline filters-button", "Filters" }
                }
            }

            ActiveFilters {}

            main {
                class: "content-area",
                ResultsList {}
            }

            StatusBar {}
        }
    }
}

/// Chips summarizing the criteria currently applied.
#[component]
fn ActiveFilters() -> Element {
    let criteria = CRITERIA.read();
    if criteria.is_unfiltered() {
        return rsx! {
            div { class: "active-filters hidden" }
        };
    }

    let chips: Vec<String> = [
        (!criteria.search.trim().is_empty()).then(|| format!("Name: {}", criteria.search.trim())),
        (criteria.category != ALL).then(|| format!("Category: {}", criteria.category)),
        (!criteria.location.trim().is_empty()).then(|| format!("Location: {}", criteria.location.trim())),
    ]
    .into_iter()
    .flatten()
    .collect();

    rsx! {
        div {
            class: "active-filters",
            for chip in chips {
                span { class: "filter-chip", "{chip}" }
            }
            button {
                class: "filter-chip-clear",
                onclick: move |_| {
                    *CRITERIA.write() = SearchCriteria::default();
                    *QUICK_SEARCH.write() = String::new();
                },
                "Clear all"
            }
        }
    }
}

/// Listings matching the reported criteria.
#[component]
fn ResultsList() -> Element {
    let core = CORE.read();
    let criteria = CRITERIA.read();

    let hits: Vec<Business> = match core.as_ref() {
        Some(state) => state.config.directory.matching(&criteria).into_iter().cloned().collect(),
        None => Vec::new(),
    };

    if hits.is_empty() {
        return rsx! {
            div {
                class: "results-empty",
                span { "No businesses match these filters" }
            }
        };
    }

    let rows: Vec<(String, Business)> = hits
        .into_iter()
        .enumerate()
        .map(|(idx, business)| (result_key(idx, &business), business))
        .collect();

    rsx! {
        div {
            class: "results-list",
            for (row_key, business) in rows {
                div {
                    key: "{row_key}",
                    class: "result-item",
                    div {
                        class: "result-heading",
                        span { class: "result-name", "{business.name}" }
                        span { class: "result-price", {business.price.label()} }
                    }
                    div {
                        class: "result-meta",
                        span { class: "result-category", "{business.category}" }
                        span { class: "result-sep", "\u{00B7}" }
                        span { class: "result-location", "{business.location}" }
                        span { class: "result-sep", "\u{00B7}" }
                        span { class: "result-rating", {format!("\u{2605} {:.1}", business.rating)} }
                    }
                }
            }
        }
    }
}

/// Row key for a listing. Names alone may repeat across a directory.
fn result_key(idx: usize, business: &Business) -> String {
    format!("{idx}:{}:{}", business.name, business.location)
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let core = CORE.read();
    let criteria = CRITERIA.read();

    let (shown, total) = match core.as_ref() {
        Some(state) => (
            state.config.directory.matching(&criteria).len(),
            state.config.directory.len(),
        ),
        None => (0, 0),
    };

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-count", "{shown} of {total} businesses" }
            if !criteria.is_unfiltered() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-filtered", "filtered" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizscope_core::PriceRange;

    fn listing(name: &str, location: &str) -> Business {
        Business {
            name: name.into(),
            category: "Food".into(),
            location: location.into(),
            price: PriceRange::One,
            rating: 4.0,
        }
    }

    #[test]
    fn duplicate_names_get_distinct_keys() {
        let a = listing("Corner Bakery", "Springfield");
        let b = listing("Corner Bakery", "Springfield");
        assert_ne!(result_key(0, &a), result_key(1, &b));
    }
}

//! Filters modal component.
//!
//! Field values live in a component-owned [`FiltersModalState`]; the caller
//! only hears about search text, category and location, and only on Search or
//! Reset. The compact variant reports the category alone. Price range and
//! rating stay inside the dialog.

use bizscope_core::{
    FilterSink, FiltersModalState, ModalVariant, PriceRange, RatingFilter, ALL,
};
use dioxus::prelude::*;

use super::fields::{FieldRow, SelectField, TextField};

/// Forwards modal reports to the caller's event handlers.
struct CallbackSink {
    search: EventHandler<String>,
    category: EventHandler<String>,
    location: EventHandler<String>,
}

impl FilterSink for CallbackSink {
    fn search_changed(&mut self, search: &str) {
        self.search.call(search.to_string());
    }

    fn category_changed(&mut self, category: &str) {
        self.category.call(category.to_string());
    }

    fn location_changed(&mut self, location: &str) {
        self.location.call(location.to_string());
    }
}

/// Keys that dismiss the dialog without reporting.
fn dismisses(key: &Key) -> bool {
    *key == Key::Escape
}

fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL.to_string(), "All Categories".to_string()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

fn price_options() -> Vec<(String, String)> {
    PriceRange::OPTIONS
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect()
}

fn rating_options() -> Vec<(String, String)> {
    RatingFilter::OPTIONS
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

/// Modal dialog for business search filters. `children` is the trigger.
///
/// The compact variant accepts `on_search_change` and `on_location_change` but
/// never invokes them.
#[component]
pub fn FiltersModal(
    on_search_change: EventHandler<String>,
    on_category_change: EventHandler<String>,
    on_location_change: EventHandler<String>,
    categories: Vec<String>,
    #[props(default)] initial_search_term: String,
    #[props(default = ALL.to_string())] initial_category: String,
    #[props(default)] variant: ModalVariant,
    children: Element,
) -> Element {
    let mut state = use_signal(|| {
        FiltersModalState::new(
            categories.clone(),
            Some(initial_search_term.as_str()),
            Some(initial_category.as_str()),
            variant,
        )
    });

    // Caller wins: a new initial search term overwrites whatever was typed.
    use_effect(use_reactive((&initial_search_term,), move |(term,)| {
        state.write().sync_initial_search(&term);
    }));

    use_effect(use_reactive((&categories,), move |(categories,)| {
        if state.peek().categories() != categories.as_slice() {
            state.write().set_categories(categories);
        }
    }));

    let sink = move || CallbackSink {
        search: on_search_change,
        category: on_category_change,
        location: on_location_change,
    };

    let (is_open, search, category, location, price, rating, offered) = {
        let s = state.read();
        (
            s.is_open(),
            s.search().to_string(),
            s.category().to_string(),
            s.location().to_string(),
            s.price_range(),
            s.rating(),
            s.categories().to_vec(),
        )
    };

    rsx! {
        span {
            class: "filters-trigger",
            onclick: move |_| state.write().open(),
            {children}
        }

        if is_open {
            // Clicking the backdrop dismisses
            div {
                class: "modal-backdrop",
                onclick: move |_| state.write().close(),

                div {
                    class: "modal-content",
                    tabindex: "-1",
                    onclick: move |e| e.stop_propagation(),
                    onmounted: move |e: MountedEvent| async move {
                        let _ = e.set_focus(true).await;
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if dismisses(&e.key()) {
                            state.write().close();
                        }
                    },

                    div {
                        class: "modal-header",
                        h2 { class: "modal-title", "Search filters" }
                        button {
                            class: "modal-close",
                            title: "Close",
                            onclick: move |_| state.write().close(),
                            "\u{00D7}"
                        }
                    }

                    div {
                        class: "modal-body",

                        if variant.shows_search() {
                            FieldRow {
                                name: "Business name",
                                TextField {
                                    value: search,
                                    placeholder: "Search by name...",
                                    on_input: move |v: String| state.write().set_search(v),
                                }
                            }
                        }

                        FieldRow {
                            name: "Category",
                            SelectField {
                                value: category,
                                options: category_options(&offered),
                                on_change: move |v: String| {
                                    state.write().set_category(&v);
                                },
                            }
                        }

                        if variant.shows_location() {
                            FieldRow {
                                name: "Location",
                                TextField {
                                    value: location,
                                    placeholder: "City or neighborhood...",
                                    on_input: move |v: String| state.write().set_location(v),
                                }
                            }
                        }

                        if variant.shows_local_filters() {
                            FieldRow {
                                name: "Price range",
                                SelectField {
                                    value: price.as_str().to_string(),
                                    options: price_options(),
                                    on_change: move |v: String| {
                                        if let Some(p) = PriceRange::from_label(&v) {
                                            state.write().set_price_range(p);
                                        }
                                    },
                                }
                            }

                            FieldRow {
                                name: "Rating",
                                SelectField {
                                    value: rating.as_str().to_string(),
                                    options: rating_options(),
                                    on_change: move |v: String| {
                                        if let Some(r) = RatingFilter::from_label(&v) {
                                            state.write().set_rating(r);
                                        }
                                    },
                                }
                            }
                        }
                    }

                    div {
                        class: "modal-footer",
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| {
                                let mut sink = sink();
                                state.write().reset(&mut sink);
                            },
                            "Reset"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut sink = sink();
                                state.write().confirm(&mut sink);
                            },
                            "Search"
                        }
                    }
                }
            }
        }
    }
}

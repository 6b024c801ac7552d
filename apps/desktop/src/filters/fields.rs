//! Labelled form rows used inside the filters modal.

use dioxus::prelude::*;

/// One labelled row: name on the left, control on the right.
#[component]
pub fn FieldRow(#[props(into)] name: String, children: Element) -> Element {
    rsx! {
        div {
            class: "filter-row",
            span { class: "filter-label", "{name}" }
            div { class: "filter-control", {children} }
        }
    }
}

/// Single-line text entry bound to `value`.
#[component]
pub fn TextField(
    value: String,
    #[props(into)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "filter-input",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |e: Event<FormData>| on_input.call(e.value()),
        }
    }
}

/// Dropdown over `(value, label)` pairs. Only listed values can be emitted.
#[component]
pub fn SelectField(
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "filter-select",
            value: "{value}",
            onchange: move |e: Event<FormData>| on_change.call(e.value()),
            for (opt_value, opt_label) in options.iter() {
                option {
                    key: "{opt_value}",
                    value: "{opt_value}",
                    selected: *opt_value == value,
                    "{opt_label}"
                }
            }
        }
    }
}

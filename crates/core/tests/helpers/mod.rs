//! Test harness for filters modal integration tests.
//!
//! Wraps a `FiltersModalState` together with a sink that records every
//! callback invocation in order.

use bizscope_core::{FilterSink, FiltersModalState, ModalVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String),
    Category(String),
    Location(String),
}

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<Call>,
}

impl FilterSink for RecordingSink {
    fn search_changed(&mut self, search: &str) {
        self.calls.push(Call::Search(search.to_string()));
    }

    fn category_changed(&mut self, category: &str) {
        self.calls.push(Call::Category(category.to_string()));
    }

    fn location_changed(&mut self, location: &str) {
        self.calls.push(Call::Location(location.to_string()));
    }
}

impl RecordingSink {
    /// How many times each callback fired: (search, category, location).
    pub fn counts(&self) -> (usize, usize, usize) {
        self.calls.iter().fold((0, 0, 0), |(s, c, l), call| match call {
            Call::Search(_) => (s + 1, c, l),
            Call::Category(_) => (s, c + 1, l),
            Call::Location(_) => (s, c, l + 1),
        })
    }
}

pub struct TestHarness {
    pub modal: FiltersModalState,
    pub sink: RecordingSink,
}

impl TestHarness {
    pub fn new(categories: &[&str]) -> Self {
        Self::with_seed(categories, None, None, ModalVariant::Full)
    }

    pub fn with_seed(
        categories: &[&str],
        initial_search: Option<&str>,
        initial_category: Option<&str>,
        variant: ModalVariant,
    ) -> Self {
        let categories = categories.iter().map(|c| c.to_string()).collect();
        Self {
            modal: FiltersModalState::new(categories, initial_search, initial_category, variant),
            sink: RecordingSink::default(),
        }
    }

    pub fn confirm(&mut self) {
        self.modal.confirm(&mut self.sink);
    }

    pub fn reset(&mut self) {
        self.modal.reset(&mut self.sink);
    }
}

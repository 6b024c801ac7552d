//! Global application state using Dioxus signals.

use std::path::{Path, PathBuf};

use bizscope_core::{load_directory_config, DirectoryConfig, SearchCriteria, ALL};
use dioxus::prelude::*;

use crate::INITIAL_STATE;

/// Loaded directory and modal configuration, created once at startup.
pub struct AppState {
    pub config: DirectoryConfig,
}

impl AppState {
    /// Load `.bizscope.toml` from the current working directory.
    pub fn from_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_path(&cwd)
    }

    pub fn from_path(root: &Path) -> Self {
        AppState {
            config: load_directory_config(root),
        }
    }

    /// Category to seed the filters modal with: the configured one when it is
    /// offered, otherwise "all".
    pub fn initial_category(&self) -> String {
        match &self.config.initial_category {
            Some(c) if self.config.directory.categories().contains(c) => c.clone(),
            _ => ALL.to_string(),
        }
    }

    /// Criteria in effect before the user touches the filters.
    pub fn seed_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            search: self.config.initial_search.clone(),
            category: self.initial_category(),
            location: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Loaded state, taken from [`INITIAL_STATE`] on first read
pub static CORE: GlobalSignal<Option<AppState>> =
    Signal::global(|| INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take()));

/// Criteria last reported by the filters modal (or typed in the quick search)
pub static CRITERIA: GlobalSignal<SearchCriteria> = Signal::global(|| {
    CORE.peek().as_ref().map(AppState::seed_criteria).unwrap_or_default()
});

/// Header quick-search text, fed to the modal as its initial search term
pub static QUICK_SEARCH: GlobalSignal<String> = Signal::global(|| {
    CORE.peek().as_ref().map(|s| s.config.initial_search.clone()).unwrap_or_default()
});

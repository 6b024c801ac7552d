//! BizScope core — everything behind the desktop app that does not need a renderer.
//!
//! # Modules
//!
//! - [`filters`] — Filters modal state: open/confirm/reset bookkeeping and the callback seam
//! - [`directory`] — Business listings and criteria matching
//! - [`config`] — `.bizscope.toml` loading with defaults and typo hints

pub mod config;
pub mod directory;
pub mod filters;

pub use config::{load_directory_config, DirectoryConfig};
pub use directory::{Business, Directory};
pub use filters::{
    FilterSink, FiltersModalState, ModalVariant, PriceRange, RatingFilter, SearchCriteria, ALL,
};

//! Search filters dialog: field rows and the modal itself.

mod fields;
mod modal;

pub use modal::FiltersModal;

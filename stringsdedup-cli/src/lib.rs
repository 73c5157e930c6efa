//! CLI library for testing purposes

pub mod check;
pub mod count;
pub mod duplicates;
pub mod validation;

pub use duplicates::DuplicatesOptions;
pub use validation::{ensure_clean_destination, suggested_cleaned_path};

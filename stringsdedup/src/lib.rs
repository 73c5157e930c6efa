#![forbid(unsafe_code)]
//! Duplicate-key analysis and cleaning for Apple `.strings` localization files.
//!
//! Parses the single-line `"key" = "value";` format, indexes every key
//! occurrence with its line number, classifies duplicate groups as same-value
//! or conflicting, and can write a deduplicated copy that preserves comments,
//! blank lines, and first-occurrence order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsdedup::{FileAnalysis, write_cleaned};
//!
//! let analysis = FileAnalysis::read_from("en.lproj/Localizable.strings")?;
//! for group in analysis.duplicate_groups() {
//!     println!("{} appears {} times", group.key, group.occurrences.len());
//! }
//! write_cleaned(analysis.raw_lines(), "Localizable-cleaned.strings")?;
//! # Ok::<(), stringsdedup::Error>(())
//! ```
//!
//! Only single-line pairs are recognized; escaped quotes, multi-line values,
//! and block comments are out of scope and pass through untouched.

pub mod analysis;
pub mod clean;
pub mod error;
pub mod line;

// Re-export most used types for easy consumption
pub use crate::{
    analysis::{DuplicateGroup, DuplicateKind, FileAnalysis, Occurrence},
    clean::{cleaned_lines, write_cleaned},
    error::Error,
    line::{Line, classify},
};

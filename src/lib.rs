//! Workspace umbrella crate for the supermarket listing grouper.
//!
//! This crate stitches together the three pipeline stages — title
//! normalization, grouping-key extraction, and category aggregation — so
//! callers can group a batch of listings with a single API entry point. The
//! stages themselves live in their own crates and stay pure; the only I/O in
//! the workspace is the file shell in [`shell`], which the `prodcat` binary
//! drives.

pub use classify::{
    extract_key, extract_size, CategoryRule, GroupingKey, BUILTIN_RULES, KEY_SEPARATOR,
};
pub use grouping::{aggregate, aggregate_with, Category, PipelineError, ProductRecord};
pub use normalize::{
    collapse_whitespace, normalize, normalize_with, strip_diacritics, NormalizeConfig,
    NormalizeError,
};

pub mod shell;

/// Groups a batch of listings end to end with default configuration.
///
/// Equivalent to [`aggregate`]; exported under a task-shaped name for
/// callers that treat the workspace as a single library.
pub fn group_products(records: &[ProductRecord]) -> Vec<Category> {
    aggregate(records)
}

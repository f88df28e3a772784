//! Category aggregation: the grouping stage of the listing pipeline.
//!
//! Runs each record's title through normalization and key extraction, then
//! buckets records by [`GroupingKey`](classify::GroupingKey) in an
//! insertion-ordered map. Strictly single-pass and in input order: the first
//! record to establish a key donates its original title as the bucket's
//! representative, and members keep input order within a bucket.
//!
//! ## Invariants
//!
//! - `sum(category.count) == records.len()`
//! - Member order within a category equals input order (never sorted)
//! - Categories are emitted in first-seen-key order
//!
//! Deterministic for a given input order; re-ordering the input can change
//! which title becomes representative for a key.

use std::time::Instant;

use indexmap::map::Entry;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use classify::{extract_key, GroupingKey};
use normalize::{normalize_with, NormalizeConfig, NormalizeError};

mod types;

pub use crate::types::{Category, ProductRecord};

/// Errors from the configurable aggregation entry point.
///
/// The default-config path cannot fail; classification and bucketing are
/// total, so the only failure source is config validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("normalization failure: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Groups records into categories using the default normalization config.
pub fn aggregate(records: &[ProductRecord]) -> Vec<Category> {
    // The default config always validates, so the Result is vacuous here.
    match aggregate_with(records, &NormalizeConfig::default()) {
        Ok(categories) => categories,
        Err(PipelineError::Normalize(err)) => {
            unreachable!("default normalize config rejected: {err}")
        }
    }
}

/// Groups records into categories with an explicit normalization config.
///
/// Processes records strictly in input order: compute the key; if unseen,
/// open a new category with this record's original title as representative;
/// if seen, append the member and bump the count. Categories come back in
/// first-seen-key order.
pub fn aggregate_with(
    records: &[ProductRecord],
    cfg: &NormalizeConfig,
) -> Result<Vec<Category>, PipelineError> {
    cfg.validate()?;
    let start = Instant::now();

    let mut buckets: IndexMap<GroupingKey, Category> = IndexMap::new();
    for record in records {
        let canonical = normalize_with(&record.title, cfg)?;
        let key = extract_key(&canonical);
        match buckets.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().absorb(record),
            Entry::Vacant(entry) => {
                entry.insert(Category::seeded(record));
            }
        }
    }

    let categories: Vec<Category> = buckets.into_values().collect();
    debug!(
        records = records.len(),
        categories = categories.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "aggregate_complete"
    );
    Ok(categories)
}

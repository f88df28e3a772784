//! Record model for the grouping pipeline.
//!
//! [`ProductRecord`] is the immutable input unit; it has no identity beyond
//! its content. [`Category`] is the output bucket, created on the first
//! occurrence of a grouping key and mutated (count bumped, member appended)
//! on every later record with the same key. Both serialize to the exact
//! shapes the I/O shell reads and writes.

use serde::{Deserialize, Serialize};

/// One raw listing: a title plus the supermarket it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub supermarket: String,
}

/// One output bucket of listings that share a grouping key.
///
/// `category` is the representative title: the original (non-normalized)
/// title of the first record seen for the key. Members stay in input order;
/// re-ordering the input can change which title becomes representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub count: usize,
    pub products: Vec<ProductRecord>,
}

impl Category {
    /// A fresh bucket seeded with its first member.
    pub(crate) fn seeded(record: &ProductRecord) -> Self {
        Self {
            category: record.title.clone(),
            count: 1,
            products: vec![record.clone()],
        }
    }

    /// Appends a later member with the same key.
    pub(crate) fn absorb(&mut self, record: &ProductRecord) {
        self.count += 1;
        self.products.push(record.clone());
    }
}

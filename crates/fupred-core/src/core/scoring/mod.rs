//! Folding-unit score fields.
//!
//! Lower scores mark more probable domain boundaries. Both fields read their
//! contact counts from a [`ContactCounts`](counts::ContactCounts) prefix-sum
//! table, so each entry costs O(1) regardless of the number of contacts.
//!
//! - [`counts`] - 2D cumulative contact-count table
//! - [`model`] - score formulas, pseudo-count and selectability rules
//! - [`field1d`] - single-boundary scores, one per split position
//! - [`field2d`] - double-boundary scores, one per pair of split positions

pub mod counts;
pub mod field1d;
pub mod field2d;
pub mod model;

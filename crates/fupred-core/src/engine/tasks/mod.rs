//! The two candidate search passes.
//!
//! Each pass scans a fully materialized score field in a fixed order and
//! returns its candidates in that order, which the ranker relies on to
//! break score ties.

pub mod contiguous;
pub mod discontinuous;

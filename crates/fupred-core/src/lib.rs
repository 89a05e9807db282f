//! # FUpred Core Library
//!
//! Predicts folding-unit (domain) boundaries of an RNA or protein chain from
//! its list of internal contacts alone. Every split position, and every pair
//! of split positions, receives a folding-unit score; local minima of those
//! score surfaces become contiguous (`C`) or discontinuous (`D`) boundary
//! candidates, reported in ascending score order.
//!
//! ## Layers
//!
//! - **[`core`]** - stateless data (`ContactSet`, `Candidate`), the score
//!   fields and the file formats.
//! - **[`engine`]** - configuration, the two search passes and the ranker.
//! - **[`workflows`]** - the end-to-end [`predict`](workflows::predict) entry
//!   point.

pub mod core;
pub mod engine;
pub mod workflows;

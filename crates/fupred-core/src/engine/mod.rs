//! # Engine Module
//!
//! Turns score fields into ranked boundary candidates.
//!
//! - **Configuration** ([`config`]) - scoring model, search and ranking parameters
//! - **Search** ([`tasks`]) - the contiguous and discontinuous local-minimum passes
//! - **Ranking** ([`ranking`]) - score ordering and the reliability cut-off
//! - **Progress Monitoring** ([`progress`]) - phase and task events for front ends
//! - **Error Handling** ([`error`]) - engine-specific error types

pub mod config;
pub mod error;
pub mod progress;
pub mod ranking;
pub mod tasks;

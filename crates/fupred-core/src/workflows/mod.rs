//! # Workflows Module
//!
//! End-to-end procedures tying [`core`](crate::core) and
//! [`engine`](crate::engine) together.
//!
//! - **Prediction Workflow** ([`predict`]) - contact set in, ranked
//!   boundary candidates out.

pub mod predict;

//! # Core Module
//!
//! Stateless building blocks of the predictor: the chain/contact data model,
//! the pure scoring arithmetic and the file formats around them.
//!
//! - **Chain Representation** ([`models`]) - contacts and the validated contact set
//! - **Scoring** ([`scoring`]) - prefix-sum contact counts and the 1D/2D FU score fields
//! - **File I/O** ([`io`]) - connectivity-table input and FU report output

pub mod io;
pub mod models;
pub mod scoring;

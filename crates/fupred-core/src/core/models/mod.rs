//! Data models for a chain, its internal contacts and the boundary
//! hypotheses drawn from them.
//!
//! - [`contact`] - [`Contact`](contact::Contact) pairs, raw
//!   [`PairingRecord`](contact::PairingRecord)s and the validated
//!   [`ContactSet`](contact::ContactSet) every later stage reads from
//! - [`candidate`] - contiguous and discontinuous boundary
//!   [`Candidate`](candidate::Candidate)s with their report labels

pub mod candidate;
pub mod contact;

//! Input/output for contact data and prediction reports.
//!
//! Reading and writing go through the [`traits::ContactFile`] and
//! [`traits::ReportFile`] interfaces, implemented by the connectivity-table
//! reader ([`ct`]) and the FU report writer ([`report`]).

pub mod ct;
pub mod report;
pub mod traits;

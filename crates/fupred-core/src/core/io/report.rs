use crate::core::io::traits::ReportFile;
use crate::core::models::candidate::Candidate;
use std::io::{self, Write};
use thiserror::Error;

/// Column header preceding the ranked candidates.
pub const HEADER: &str = "#FUscore\tDC\t(domain1)(domain2)\t(domain1)linker(domain2)";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Tab-separated FU report: a header line, then one line per candidate.
pub struct FuReport;

impl ReportFile for FuReport {
    type Error = ReportError;

    fn write_to(candidates: &[Candidate], writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", HEADER)?;
        for candidate in candidates {
            writeln!(writer, "{}", candidate)?;
        }
        Ok(())
    }
}

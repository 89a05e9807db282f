use crate::core::models::candidate::Candidate;
use crate::core::models::contact::ContactSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading a chain's contacts from a file format.
pub trait ContactFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a contact set from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<ContactSet, Self::Error>;

    /// Reads a contact set from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ContactSet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for writing ranked candidates.
pub trait ReportFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Writes the ranked candidates, in order, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(candidates: &[Candidate], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the ranked candidates to a file path, replacing its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(candidates: &[Candidate], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(candidates, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

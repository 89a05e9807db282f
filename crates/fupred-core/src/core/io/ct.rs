use crate::core::io::traits::ContactFile;
use crate::core::models::contact::{ContactSet, PairingRecord};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Minimum number of fields for a line to count as a pairing record.
const MIN_FIELDS: usize = 6;
/// Zero-based column of the position index.
const POSITION_FIELD: usize = 0;
/// Zero-based column of the paired position.
const PARTNER_FIELD: usize = 4;

#[derive(Debug, Error)]
pub enum CtError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses the leading integer of a field the way C's `atol` does: optional
/// sign, then digits up to the first non-digit. Anything unparsable is 0.
fn parse_leading_int(field: &str) -> i64 {
    let trimmed = field.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add((d - b'0') as i64)
        });
    if negative { -value } else { value }
}

/// Parses one CT line into a record. Returns `None` for comments, blank
/// lines and lines with too few fields.
fn parse_record(line: &str) -> Option<PairingRecord> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line.split([' ', '\t']).filter(|f| !f.is_empty()).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    Some(PairingRecord {
        position: parse_leading_int(fields[POSITION_FIELD]),
        partner: parse_leading_int(fields[PARTNER_FIELD]),
    })
}

/// Connectivity-table (`.ct`) secondary structure reader.
///
/// Each line `index base prev next partner number` describes one position.
/// Lines that do not parse are skipped rather than rejected, including the
/// usual length/title header line of a CT file.
pub struct CtFile;

impl ContactFile for CtFile {
    type Error = CtError;

    fn read_from(reader: &mut impl BufRead) -> Result<ContactSet, Self::Error> {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);
            match parse_record(line) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        let contacts = ContactSet::from_records(records);
        debug!(
            length = contacts.len(),
            contacts = contacts.num_contacts(),
            skipped,
            "Parsed connectivity table."
        );
        Ok(contacts)
    }
}

use std::fmt;
use tracing::warn;

/// A contact between two chain positions (a base pair or a residue contact).
///
/// Positions are 0-based and always stored with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contact {
    i: usize,
    j: usize,
}

impl Contact {
    /// Creates a contact from two positions given in either order.
    ///
    /// Returns `None` for a self-contact (`a == b`).
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { i: a, j: b }),
            std::cmp::Ordering::Greater => Some(Self { i: b, j: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn i(&self) -> usize {
        self.i
    }

    #[inline]
    pub fn j(&self) -> usize {
        self.j
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.i + 1, self.j + 1)
    }
}

/// One record of a pairing table: a 1-based position and its 1-based partner.
///
/// A partner of `0` means the position is unpaired. Values come straight from
/// the input and are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingRecord {
    pub position: i64,
    pub partner: i64,
}

/// The ordered contact list of a chain together with its length `L`.
///
/// Built once from input and read-only afterwards. Every contact satisfies
/// `i < j < L`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    length: usize,
    contacts: Vec<Contact>,
}

impl ContactSet {
    /// Builds a contact set from 0-based position pairs.
    ///
    /// Self-contacts and pairs touching a position outside `[0, length)` are
    /// dropped. Input order is preserved.
    pub fn new(length: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut dropped = 0usize;
        let contacts = pairs
            .into_iter()
            .filter_map(|(a, b)| match Contact::new(a, b) {
                Some(c) if c.j < length => Some(c),
                _ => {
                    dropped += 1;
                    None
                }
            })
            .collect();
        if dropped > 0 {
            warn!(dropped, length, "Discarded contacts outside the chain.");
        }
        Self { length, contacts }
    }

    /// Builds a contact set from pairing-table records.
    ///
    /// `L` is the number of records seen. A record contributes the contact
    /// `(position - 1, partner - 1)` only when `1 <= position < partner`, so
    /// each pair listed from both ends is kept once. Partners beyond `L` are
    /// discarded.
    pub fn from_records(records: impl IntoIterator<Item = PairingRecord>) -> Self {
        let mut length = 0usize;
        let mut pairs = Vec::new();
        for record in records {
            length += 1;
            if record.position >= 1 && record.position < record.partner {
                pairs.push(((record.position - 1) as usize, (record.partner - 1) as usize));
            }
        }
        Self::new(length, pairs)
    }

    /// Chain length `L`.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn num_contacts(&self) -> usize {
        self.contacts.len()
    }
}

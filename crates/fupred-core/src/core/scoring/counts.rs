use crate::core::models::contact::ContactSet;
use std::ops::Range;

/// A 2D cumulative contact-count table.
///
/// `cumulative[x][y]` holds the number of contacts with `i < x` and `j < y`,
/// so the count over any rectangle of `(i, j)` ranges is four lookups.
#[derive(Debug, Clone)]
pub struct ContactCounts {
    length: usize,
    stride: usize,
    cumulative: Vec<u32>,
}

impl ContactCounts {
    pub fn new(contacts: &ContactSet) -> Self {
        let length = contacts.len();
        let stride = length + 1;
        let mut cumulative = vec![0u32; stride * stride];

        for contact in contacts.contacts() {
            cumulative[(contact.i() + 1) * stride + contact.j() + 1] += 1;
        }
        for x in 1..stride {
            for y in 1..stride {
                let idx = x * stride + y;
                cumulative[idx] = cumulative[idx] + cumulative[idx - stride] + cumulative[idx - 1]
                    - cumulative[idx - stride - 1];
            }
        }

        Self {
            length,
            stride,
            cumulative,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn prefix(&self, x: usize, y: usize) -> u32 {
        self.cumulative[x * self.stride + y]
    }

    /// Number of contacts with `i` in `first` and `j` in `second`.
    ///
    /// Range bounds must lie within `[0, L]`.
    #[inline]
    pub fn count(&self, first: Range<usize>, second: Range<usize>) -> u32 {
        if first.start >= first.end || second.start >= second.end {
            return 0;
        }
        self.prefix(first.end, second.end) + self.prefix(first.start, second.start)
            - self.prefix(first.start, second.end)
            - self.prefix(first.end, second.start)
    }
}

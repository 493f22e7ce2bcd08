use std::fmt;
use std::ops::RangeInclusive;

use log::warn;

use crate::error::{Error, Result};
use crate::position::BitPosition;

/// Inclusive span of bits inside a buffer.
///
/// A range whose start lies after its end is empty: it has no positions,
/// reads over it yield zero and writes over it change nothing. Both ends are
/// normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitRange {
    start: BitPosition,
    end: BitPosition,
}

impl BitRange {
    pub const fn new(start: BitPosition, end: BitPosition) -> Self {
        BitRange {
            start: start.normalized(),
            end: end.normalized(),
        }
    }

    /// Range of `count` bits beginning at `start`.
    pub fn with_count(start: BitPosition, count: u32) -> Result<Self> {
        if count == 0 {
            warn!("Rejecting zero-length bit range at {}", start);
            return Err(Error::EmptyRange);
        }
        let start = start.normalized();
        Ok(BitRange::new(start, start + (count - 1)))
    }

    pub const fn start(&self) -> BitPosition {
        self.start
    }

    pub const fn end(&self) -> BitPosition {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of bits covered, counting both ends.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end.to_bits() - self.start.to_bits() + 1
        }
    }

    pub fn contains(&self, pos: BitPosition) -> bool {
        self.start <= pos && pos <= self.end
    }

    pub fn iter(&self) -> Positions {
        Positions {
            next: self.start,
            remaining: self.len(),
        }
    }
}

impl From<RangeInclusive<BitPosition>> for BitRange {
    fn from(range: RangeInclusive<BitPosition>) -> Self {
        let (start, end) = range.into_inner();
        BitRange::new(start, end)
    }
}

impl IntoIterator for BitRange {
    type Item = BitPosition;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.iter()
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Iterator over every position of a [`BitRange`], start first.
#[derive(Debug, Clone)]
pub struct Positions {
    next: BitPosition,
    remaining: u64,
}

impl Iterator for Positions {
    type Item = BitPosition;

    fn next(&mut self) -> Option<BitPosition> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.next;
        self.next.increment();
        self.remaining -= 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

use std::fmt;

use crate::buffer::ByteBuffer;
use crate::error::Result;
use crate::position::{BitPosition, BITS_PER_BYTE};
use crate::range::BitRange;

/// A byte count, for sizing a [`Bits`] view in whole bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes(pub u8);

impl Bytes {
    pub fn bits(self) -> u32 {
        u32::from(self.0) * u32::from(BITS_PER_BYTE)
    }
}

/// View of a single bit in a buffer.
///
/// The position is checked when the view is made, so nothing on the view
/// itself can fail.
pub struct Bit<'a, const N: usize> {
    buffer: &'a mut ByteBuffer<N>,
    pos: BitPosition,
}

impl<const N: usize> Bit<'_, N> {
    pub fn position(&self) -> BitPosition {
        self.pos
    }

    pub fn is_set(&self) -> bool {
        self.buffer.peek(self.pos)
    }

    pub fn is_cleared(&self) -> bool {
        !self.is_set()
    }

    pub fn set(&mut self) {
        self.buffer.put(self.pos, true);
    }

    pub fn clear(&mut self) {
        self.buffer.put(self.pos, false);
    }
}

impl<const N: usize> fmt::Display for Bit<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_set() { "set" } else { "cleared" })
    }
}

/// View of a multi-bit field in a buffer, read and written as a `u32`.
pub struct Bits<'a, const N: usize> {
    buffer: &'a mut ByteBuffer<N>,
    range: BitRange,
}

impl<const N: usize> Bits<'_, N> {
    pub fn range(&self) -> BitRange {
        self.range
    }

    pub fn value(&self) -> u32 {
        self.buffer.load(self.range)
    }

    pub fn has_value(&self, value: u32) -> bool {
        self.value() == value
    }

    pub fn set_value(&mut self, value: u32) {
        self.buffer.store(self.range, value);
    }
}

impl<const N: usize> fmt::Display for Bits<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<const N: usize> ByteBuffer<N> {
    /// Binds a view to the bit at `pos`.
    pub fn bit(&mut self, pos: BitPosition) -> Result<Bit<'_, N>> {
        let pos = self.checked(pos)?;
        Ok(Bit { buffer: self, pos })
    }

    /// Binds a view to the bits of `range`.
    pub fn bits(&mut self, range: BitRange) -> Result<Bits<'_, N>> {
        let range = self.checked_range(range)?;
        Ok(Bits { buffer: self, range })
    }

    /// Binds a view to `count` whole bytes' worth of bits starting at `pos`.
    pub fn bytes(&mut self, pos: BitPosition, count: Bytes) -> Result<Bits<'_, N>> {
        let range = BitRange::with_count(pos, count.bits())?;
        self.bits(range)
    }
}

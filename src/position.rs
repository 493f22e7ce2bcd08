use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub const BITS_PER_BYTE: u8 = 8;

/// Address of a single bit inside a byte buffer.
///
/// Ordering and equality are lexicographic on the stored `(byte, bit)`, which
/// matches bit order only for normalized positions (bit index below 8).
///
/// All arithmetic wraps: stepping back from [`BitPosition::ZERO`] lands on
/// [`BitPosition::MAX`] and stepping forward from `MAX` lands on `ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BitPosition {
    byte: u32,
    bit: u8,
}

impl BitPosition {
    pub const ZERO: BitPosition = BitPosition::new(0, 0);
    pub const MAX: BitPosition = BitPosition::new(u32::MAX, BITS_PER_BYTE - 1);

    /// Builds a position from a byte index and a bit index.
    ///
    /// `bit` is stored as given and is expected to be in `0..8`; arithmetic on
    /// the result folds any excess into the byte index. Until then comparisons
    /// see the raw fields, so `new(0, 9) < new(1, 0)` and `new(0, 8) != new(1, 0)`.
    /// Use [`BitPosition::normalized`] before comparing such positions.
    pub const fn new(byte: u32, bit: u8) -> Self {
        BitPosition { byte, bit }
    }

    /// Builds a position from an absolute bit index.
    pub const fn from_bits(bits: u32) -> Self {
        BitPosition::new(bits / BITS_PER_BYTE as u32, (bits % BITS_PER_BYTE as u32) as u8)
    }

    pub const fn byte(&self) -> u32 {
        self.byte
    }

    pub const fn bit(&self) -> u8 {
        self.bit
    }

    /// Absolute bit index, widened so `MAX` does not overflow.
    pub const fn to_bits(&self) -> u64 {
        self.byte as u64 * BITS_PER_BYTE as u64 + self.bit as u64
    }

    /// Folds a bit index of 8 or more into the byte index.
    pub const fn normalized(self) -> Self {
        BitPosition::new(
            self.byte.wrapping_add((self.bit / BITS_PER_BYTE) as u32),
            self.bit % BITS_PER_BYTE,
        )
    }

    pub fn increment(&mut self) {
        *self += 1u32;
    }

    pub fn decrement(&mut self) {
        *self -= 1u32;
    }

    pub fn next(self) -> Self {
        self + 1u32
    }

    pub fn prev(self) -> Self {
        self - 1u32
    }
}

impl AddAssign for BitPosition {
    fn add_assign(&mut self, rhs: BitPosition) {
        let bit = self.bit.wrapping_add(rhs.bit);
        // Carry whole bytes out of the bit index first
        self.byte = self
            .byte
            .wrapping_add((bit / BITS_PER_BYTE) as u32)
            .wrapping_add(rhs.byte);
        self.bit = bit % BITS_PER_BYTE;
    }
}

impl AddAssign<u32> for BitPosition {
    fn add_assign(&mut self, rhs: u32) {
        *self += BitPosition::from_bits(rhs);
    }
}

impl SubAssign for BitPosition {
    fn sub_assign(&mut self, rhs: BitPosition) {
        let mut bit = self.bit.wrapping_sub(rhs.bit);
        if bit >= BITS_PER_BYTE {
            // Wrapped below zero: deficit is how far under zero we went
            let deficit = bit.wrapping_neg();
            let rem = deficit % BITS_PER_BYTE;
            let borrow = (deficit / BITS_PER_BYTE) as u32 + u32::from(rem != 0);
            bit = (BITS_PER_BYTE - rem) % BITS_PER_BYTE;
            self.byte = self.byte.wrapping_sub(borrow);
        }
        self.bit = bit;
        self.byte = self.byte.wrapping_sub(rhs.byte);
    }
}

impl SubAssign<u32> for BitPosition {
    fn sub_assign(&mut self, rhs: u32) {
        *self -= BitPosition::from_bits(rhs);
    }
}

impl Add for BitPosition {
    type Output = BitPosition;

    fn add(mut self, rhs: BitPosition) -> BitPosition {
        self += rhs;
        self
    }
}

impl Add<u32> for BitPosition {
    type Output = BitPosition;

    fn add(mut self, rhs: u32) -> BitPosition {
        self += rhs;
        self
    }
}

impl Sub for BitPosition {
    type Output = BitPosition;

    fn sub(mut self, rhs: BitPosition) -> BitPosition {
        self -= rhs;
        self
    }
}

impl Sub<u32> for BitPosition {
    type Output = BitPosition;

    fn sub(mut self, rhs: u32) -> BitPosition {
        self -= rhs;
        self
    }
}

impl From<u32> for BitPosition {
    fn from(bits: u32) -> Self {
        BitPosition::from_bits(bits)
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.byte, self.bit)
    }
}

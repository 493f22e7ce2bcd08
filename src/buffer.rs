use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::integral::Integral;
use crate::position::BitPosition;
use crate::range::BitRange;

/// Fixed-capacity, zero-initialized byte storage with bit-level access.
///
/// Bits within a byte are numbered from the least-significant end, and field
/// values are laid out least-significant bit first.
///
/// Addressing a byte outside the buffer is an error. Asking for more bits than
/// fit is not: positional reads and writes are clamped to the requested bit
/// count, the width of the value type and the end of the buffer, whichever
/// comes first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteBuffer<const N: usize> {
    buf: [u8; N],
}

impl<const N: usize> ByteBuffer<N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        ByteBuffer { buf: [0; N] }
    }

    pub fn from_bytes(buf: [u8; N]) -> Self {
        ByteBuffer { buf }
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Overwrites every byte with `value`.
    pub fn fill(&mut self, value: u8) {
        self.buf.fill(value);
    }

    pub const fn size(&self) -> usize {
        N
    }

    /// First position past the last bit of the buffer.
    pub fn end(&self) -> BitPosition {
        BitPosition::new(u32::try_from(N).unwrap_or(u32::MAX), 0)
    }

    pub fn set_bit(&mut self, pos: BitPosition) -> Result<()> {
        let pos = self.checked(pos)?;
        self.put(pos, true);
        Ok(())
    }

    pub fn clear_bit(&mut self, pos: BitPosition) -> Result<()> {
        let pos = self.checked(pos)?;
        self.put(pos, false);
        Ok(())
    }

    pub fn get_bit(&self, pos: BitPosition) -> Result<bool> {
        let pos = self.checked(pos)?;
        Ok(self.peek(pos))
    }

    /// Sets the bit at `pos` when the low bit of `value` is 1, clears it otherwise.
    pub fn assign_bit<T: Integral>(&mut self, pos: BitPosition, value: T) -> Result<()> {
        let pos = self.checked(pos)?;
        self.put(pos, value.lsb());
        Ok(())
    }

    /// Writes the low `bit_count` bits of `value` starting at `pos`.
    ///
    /// Bits that would land past the width of `T` or past the end of the
    /// buffer are dropped.
    pub fn set<T: Integral>(&mut self, pos: BitPosition, value: T, bit_count: u32) -> Result<()> {
        let start = self.checked(pos)?;
        let end = self.clamp::<T>(start, bit_count);
        trace!("Writing {} bits of {} at {}", bit_count, value, start);

        let mut cur = start;
        let mut idx = 0;
        while cur < end {
            self.put(cur, value.bit(idx));
            cur.increment();
            idx += 1;
        }
        Ok(())
    }

    /// Reads `bit_count` bits starting at `pos` into the low bits of a `T`.
    ///
    /// Clamped like [`ByteBuffer::set`]; bits beyond the clamp stay zero.
    pub fn get<T: Integral>(&self, pos: BitPosition, bit_count: u32) -> Result<T> {
        let start = self.checked(pos)?;
        let end = self.clamp::<T>(start, bit_count);

        let mut value = T::ZERO;
        let mut cur = start;
        let mut idx = 0;
        while cur < end {
            if self.peek(cur) {
                value = value.with_bit(idx);
            }
            cur.increment();
            idx += 1;
        }
        trace!("Read {} bits at {}: {}", bit_count, start, value);
        Ok(value)
    }

    /// Writes `value` across every position of `range`, low bit at the start.
    ///
    /// Positions past the width of `T` are cleared. An empty range is a no-op.
    pub fn set_range<T: Integral>(&mut self, range: BitRange, value: T) -> Result<()> {
        let range = self.checked_range(range)?;
        trace!("Writing {} over {}", value, range);
        self.store(range, value);
        Ok(())
    }

    /// Reads every position of `range` into a `T`, start in the low bit.
    ///
    /// Positions past the width of `T` are ignored. An empty range reads as zero.
    pub fn get_range<T: Integral>(&self, range: BitRange) -> Result<T> {
        let range = self.checked_range(range)?;
        let value = self.load(range);
        trace!("Read {} over {}", value, range);
        Ok(value)
    }

    /// Normalizes `pos` and confirms its byte lies inside the buffer.
    pub(crate) fn checked(&self, pos: BitPosition) -> Result<BitPosition> {
        let pos = pos.normalized();
        let in_bounds = usize::try_from(pos.byte()).map_or(false, |byte| byte < N);
        if !in_bounds {
            warn!("Bit position {} is outside buffer of {} bytes", pos, N);
            return Err(Error::OutOfBounds {
                byte: u64::from(pos.byte()),
                size: N,
            });
        }
        Ok(pos)
    }

    /// A non-empty range must end inside the buffer.
    pub(crate) fn checked_range(&self, range: BitRange) -> Result<BitRange> {
        if !range.is_empty() {
            self.checked(range.end())?;
        }
        Ok(range)
    }

    // Positions handed to the helpers below have already been through `checked`.

    pub(crate) fn put(&mut self, pos: BitPosition, on: bool) {
        let mask = 1u8 << pos.bit();
        let byte = &mut self.buf[pos.byte() as usize];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    pub(crate) fn peek(&self, pos: BitPosition) -> bool {
        (self.buf[pos.byte() as usize] >> pos.bit()) & 1 == 1
    }

    pub(crate) fn store<T: Integral>(&mut self, range: BitRange, value: T) {
        for (pos, idx) in range.iter().zip(0u32..) {
            self.put(pos, value.bit(idx));
        }
    }

    pub(crate) fn load<T: Integral>(&self, range: BitRange) -> T {
        range
            .iter()
            .zip(0u32..)
            .filter(|&(pos, _)| self.peek(pos))
            .fold(T::ZERO, |value, (_, idx)| value.with_bit(idx))
    }

    fn clamp<T: Integral>(&self, start: BitPosition, bit_count: u32) -> BitPosition {
        let requested = start + bit_count;
        let end = requested.min(start + T::BITS).min(self.end());
        if end < requested {
            debug!(
                "Truncating {}-bit field at {} to {} bits",
                bit_count,
                start,
                end.to_bits() - start.to_bits()
            );
        }
        end
    }
}

impl<const N: usize> Default for ByteBuffer<N> {
    fn default() -> Self {
        ByteBuffer::new()
    }
}

impl<const N: usize> AsRef<[u8]> for ByteBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl<const N: usize> AsMut<[u8]> for ByteBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

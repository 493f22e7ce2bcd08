use log::{trace, warn};

use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::integral::Integral;
use crate::position::{BitPosition, BITS_PER_BYTE};
use crate::range::BitRange;

pub trait BitWrite {
    fn write_bits<T: Integral>(&mut self, value: T, bits: u32) -> Result<()>;
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(u8::from(bit), 1)
    }
}

pub trait BitRead {
    fn read_bits<T: Integral>(&mut self, bits: u32) -> Result<T>;
    fn read_bit(&mut self) -> Result<bool> {
        self.read_bits::<u8>(1).map(|v| v != 0)
    }
}

/// Walks a buffer field by field, LSB first, advancing after every access.
///
/// Unlike the positional calls on [`ByteBuffer`], a field that does not fit in
/// what is left of the buffer is rejected rather than truncated. Fields wider
/// than the value type are zero-extended on write and cut to the type's width
/// on read.
pub struct BitCursor<'a, const N: usize> {
    buffer: &'a mut ByteBuffer<N>,
    pos: BitPosition,
}

impl<'a, const N: usize> BitCursor<'a, N> {
    pub fn new(buffer: &'a mut ByteBuffer<N>) -> Self {
        BitCursor::at(buffer, BitPosition::ZERO)
    }

    pub fn at(buffer: &'a mut ByteBuffer<N>, pos: BitPosition) -> Self {
        BitCursor {
            buffer,
            pos: pos.normalized(),
        }
    }

    pub fn position(&self) -> BitPosition {
        self.pos
    }

    /// Bits between the cursor and the end of the buffer.
    pub fn remaining(&self) -> u64 {
        self.buffer.end().to_bits().saturating_sub(self.pos.to_bits())
    }

    pub fn skip(&mut self, bits: u32) -> Result<()> {
        self.claim(bits)?;
        self.pos += bits;
        Ok(())
    }

    /// Moves forward to the next byte boundary, if not already on one.
    pub fn align(&mut self) -> Result<()> {
        match self.pos.bit() {
            0 => Ok(()),
            bit => self.skip(u32::from(BITS_PER_BYTE - bit)),
        }
    }

    /// Range of the next `bits` bits, or `None` for a zero-width field.
    fn claim(&self, bits: u32) -> Result<Option<BitRange>> {
        let remaining = self.remaining();
        if u64::from(bits) > remaining {
            warn!(
                "Field of {} bits at {} overruns buffer ({} bits left)",
                bits, self.pos, remaining
            );
            return Err(Error::Overflow { requested: bits, remaining });
        }
        match bits {
            0 => Ok(None),
            _ => BitRange::with_count(self.pos, bits).map(Some),
        }
    }
}

impl<const N: usize> BitWrite for BitCursor<'_, N> {
    fn write_bits<T: Integral>(&mut self, value: T, bits: u32) -> Result<()> {
        if let Some(range) = self.claim(bits)? {
            trace!("Cursor writing {} over {}", value, range);
            self.buffer.store(range, value);
            self.pos += bits;
        }
        Ok(())
    }
}

impl<const N: usize> BitRead for BitCursor<'_, N> {
    fn read_bits<T: Integral>(&mut self, bits: u32) -> Result<T> {
        let Some(range) = self.claim(bits)? else {
            return Ok(T::ZERO);
        };
        let value = self.buffer.load(range);
        trace!("Cursor read {} over {}", value, range);
        self.pos += bits;
        Ok(value)
    }
}

use std::fmt;

/// Fixed-width unsigned integer that can be moved into and out of a buffer
/// one bit at a time, least-significant bit first.
pub trait Integral: Copy + PartialEq + fmt::Debug + fmt::Display {
    const BITS: u32;
    const ZERO: Self;

    /// Bit `idx` of the value. Indices at or past `BITS` read as zero.
    fn bit(self, idx: u32) -> bool;

    /// The value with bit `idx` set. Indices at or past `BITS` are ignored.
    fn with_bit(self, idx: u32) -> Self;

    fn lsb(self) -> bool {
        self.bit(0)
    }
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $(
            impl Integral for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn bit(self, idx: u32) -> bool {
                    idx < Self::BITS && (self >> idx) & 1 == 1
                }

                #[inline]
                fn with_bit(self, idx: u32) -> Self {
                    if idx < Self::BITS {
                        self | ((1 as $t) << idx)
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, u128, usize);

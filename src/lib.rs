//! Bit-addressable access to fixed-size byte buffers.
//!
//! [`BitPosition`] and [`BitRange`] describe where a field lives,
//! [`ByteBuffer`] reads and writes fields at those addresses, and the
//! [`Bit`] / [`Bits`] views bind an address once for repeated access.
//! [`BitCursor`] packs consecutive fields for codec-style use.

use log::info;

mod access;
mod bit_io;
mod buffer;
mod error;
mod integral;
mod position;
mod range;

#[cfg(test)]
mod tests;

pub use access::{Bit, Bits, Bytes};
pub use bit_io::{BitCursor, BitRead, BitWrite};
pub use buffer::ByteBuffer;
pub use error::{Error, Result};
pub use integral::Integral;
pub use position::{BitPosition, BITS_PER_BYTE};
pub use range::{BitRange, Positions};

// Initializes logging, honoring RUST_LOG
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("bitbuffer logging initialized");
}

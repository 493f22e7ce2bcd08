use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Byte index {byte} out of bounds for buffer of {size} bytes")]
    OutOfBounds { byte: u64, size: usize },
    #[error("Bit range must cover at least one bit")]
    EmptyRange,
    #[error("Cannot move {requested} bits, only {remaining} left in buffer")]
    Overflow { requested: u32, remaining: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

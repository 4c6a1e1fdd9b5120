use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackerError {
    #[error("Invalid item size {size}: item sizes must be positive")]
    InvalidItem { size: u32 },
    #[error("Invalid bin capacity {capacity}: capacity must be positive")]
    InvalidCapacity { capacity: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Item of size {size} can never fit in a bin of capacity {capacity}")]
    OversizedItem { size: u32, capacity: u32 },
    #[error("No more bins: every item has been packed")]
    Exhausted,
    #[error("No item of size {size} left to remove")]
    Underflow { size: u32 },
    #[error("Invalid sequence {input:?}: {reason}")]
    InvalidSequence { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PackerError>;

//! Error types for padding and ECB operations

use thiserror::Error;

use crate::padding::PaddingStyle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcbError {
    #[error("Invalid block size {0} for this operation")]
    InvalidBlockSize(usize),

    #[error("Input of {len} bytes is not a multiple of the {block_size}-byte block size")]
    NotBlockAligned { len: usize, block_size: usize },

    #[error("Unknown padding style: {0:?}")]
    UnknownPaddingStyle(String),

    #[error("Zero-length input cannot be unpadded")]
    EmptyInput,

    #[error("Padding length {padding_len} is out of range for block size {block_size}")]
    PaddingOutOfRange { padding_len: usize, block_size: usize },

    #[error("ISO 7816-4 padding marker not found")]
    PaddingMarkerNotFound,

    #[error("{0} padding is incorrect")]
    PaddingMismatch(PaddingStyle),

    #[error("Invalid key length {0} (expected 16, 24 or 32 bytes)")]
    InvalidKeyLength(usize),
}

pub type Result<T> = std::result::Result<T, EcbError>;

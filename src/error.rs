//! Error types for rafaga.

use thiserror::Error;

/// Errors that can occur while compressing or decompressing.
///
/// Every decoding failure aborts the operation immediately; no partial
/// output is ever considered valid. [`crate::is_valid_compressed`] collapses
/// all of these to `false`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The length header ends before its final byte.
    #[error("truncated length varint")]
    TruncatedVarint,

    /// Five length-header bytes with the continuation bit still set.
    #[error("unterminated length varint")]
    UnterminatedVarint,

    /// The length header encodes a value wider than 32 bits.
    #[error("length varint overflows 32 bits")]
    OverflowingVarint,

    /// A tag byte's trailing bytes extend past the end of the input.
    #[error("token truncated at end of input")]
    TruncatedToken,

    /// A literal's bytes extend past the input or past the declared
    /// output length.
    #[error("literal overruns input or declared output length")]
    LiteralOverrun,

    /// A copy would extend past the declared output length.
    #[error("copy overruns declared output length")]
    CopyOverrun,

    /// A copy offset of zero, or one reaching back before the start of
    /// the output.
    #[error("bad copy offset {offset} at output position {pos}")]
    BadOffset {
        /// The offending offset.
        offset: u32,
        /// Output position at which the copy was decoded.
        pos: u64,
    },

    /// The token stream ended before producing the declared output length.
    #[error("stream ended after {produced} of {declared} declared bytes")]
    ShortStream {
        /// Bytes produced before the input ran out.
        produced: u64,
        /// Length declared by the header.
        declared: u64,
    },

    /// Input bytes remain after the declared output length was reached.
    #[error("{remaining} trailing bytes after the final token")]
    TrailingGarbage {
        /// Number of unconsumed input bytes.
        remaining: usize,
    },

    /// The declared output length exceeds the caller-supplied maximum.
    #[error("declared length {declared} exceeds output limit {limit}")]
    OutputLimitExceeded {
        /// Length declared by the header.
        declared: u64,
        /// Caller-supplied maximum output length.
        limit: usize,
    },

    /// The input is too large for the format's 32-bit length header.
    #[error("input of {len} bytes exceeds the 32-bit length header")]
    InputTooLarge {
        /// Logical input length in bytes.
        len: u64,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

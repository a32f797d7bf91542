//! Byte-oriented lossless compression tuned for speed over ratio.
//!
//! A compressed blob is a varint-encoded uncompressed length followed by a
//! stream of tagged tokens: literals copied verbatim from the stream, and
//! back-references into the bytes already produced. The compressor scans
//! independent 64 KiB fragments with a hash-table match finder; the
//! decompressor replays the token stream into a contiguous buffer or a
//! caller-supplied list of segments, or just checks it structurally.
//!
//! # Example
//!
//! ```
//! let data = b"the quick brown fox jumps over the lazy dog, the quick brown fox";
//! let packed = rafaga::compress(data).unwrap();
//! assert!(rafaga::is_valid_compressed(&packed));
//! assert_eq!(rafaga::uncompress(&packed).unwrap(), data);
//! ```

#![deny(missing_docs)]
#![deny(clippy::panic)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

mod block;
mod error;
mod sink;
mod tag;
mod varint;

pub use block::constants::BLOCK_SIZE;
pub use error::{Error, Result};

use sink::{SegmentSink, SliceSink};

/// Upper bound on the compressed size of `len` input bytes.
#[must_use]
pub const fn max_compressed_length(len: usize) -> usize {
    32 + len + len / 6
}

/// Compress `input` into a fresh buffer.
///
/// # Errors
///
/// [`Error::InputTooLarge`] when `input` does not fit the format's 32-bit
/// length header.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    block::compress(input)
}

/// Compress the logical concatenation of `segments`.
///
/// Produces exactly the bytes [`compress`] would produce for the flattened
/// input; segments may be empty.
///
/// # Errors
///
/// [`Error::InputTooLarge`] when the segments total more than the format's
/// 32-bit length header allows.
pub fn compress_from_segments(segments: &[&[u8]]) -> Result<Vec<u8>> {
    block::compress_from_segments(segments)
}

/// Decompress `input` into a fresh buffer sized from its length header.
///
/// # Errors
///
/// Any corruption kind of [`Error`]. On targets where the declared length
/// does not fit `usize`, [`Error::OutputLimitExceeded`] is returned instead
/// of attempting the allocation.
pub fn uncompress(input: &[u8]) -> Result<Vec<u8>> {
    let (declared, header) = varint::read_uvarint(input)?;
    let declared = u64::from(declared);
    let Ok(len) = usize::try_from(declared) else {
        return Err(Error::OutputLimitExceeded { declared, limit: usize::MAX });
    };
    let mut out = vec![0u8; len];
    let mut sink = SliceSink::new(&mut out);
    block::decode(&input[header..], declared, &mut sink)?;
    Ok(out)
}

/// Decompress `input`, refusing up front to produce more than
/// `max_output_len` bytes.
///
/// The budget is enforced against the declared length before any
/// allocation, so untrusted headers cannot force large allocations.
///
/// # Errors
///
/// [`Error::OutputLimitExceeded`] when the header declares more than the
/// budget, otherwise any corruption kind of [`Error`].
pub fn uncompress_with_limit(input: &[u8], max_output_len: usize) -> Result<Vec<u8>> {
    let (declared, _) = varint::read_uvarint(input)?;
    if u64::from(declared) > max_output_len as u64 {
        return Err(Error::OutputLimitExceeded {
            declared: u64::from(declared),
            limit: max_output_len,
        });
    }
    uncompress(input)
}

/// Decompress `input` across an ordered list of caller-owned segments.
///
/// Output straddles segment boundaries as needed; empty segments are
/// skipped. The segments must hold at least the declared length; surplus
/// space after the final byte is left untouched.
///
/// # Errors
///
/// Any corruption kind of [`Error`]; a segment list too small for the
/// declared output fails at the offending token.
pub fn uncompress_to_segments(input: &[u8], segments: &mut [&mut [u8]]) -> Result<()> {
    let (declared, header) = varint::read_uvarint(input)?;
    let mut sink = SegmentSink::new(segments);
    block::decode(&input[header..], u64::from(declared), &mut sink)
}

/// Check whether `input` decodes to exactly its declared length.
///
/// Structural only: nothing is allocated and `input` is not modified, so
/// headers declaring absurd lengths are rejected cheaply.
#[must_use]
pub fn is_valid_compressed(input: &[u8]) -> bool {
    block::validate(input).is_ok()
}

/// Read the declared uncompressed length without decoding the body.
///
/// # Errors
///
/// The varint corruption kinds of [`Error`].
pub fn get_uncompressed_length(input: &[u8]) -> Result<u32> {
    Ok(varint::read_uvarint(input)?.0)
}

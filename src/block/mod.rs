//! The compressed block format: framer, fragment compressor, decoder,
//! validator.

mod compress;
mod decompress;
mod validate;

pub(crate) use compress::{compress, compress_from_segments};
pub(crate) use decompress::decode;
pub(crate) use validate::validate;

/// Constants of the block format.
pub(crate) mod constants {
    /// Maximum number of input bytes compressed as one independent
    /// fragment. Copies never reach across a fragment's left edge, so the
    /// encoder's offsets always fit sixteen bits; the decoder accepts the
    /// wider forms regardless.
    pub const BLOCK_SIZE: usize = 1 << 16;

    /// Shortest match the compressor will emit.
    pub const MIN_MATCH: usize = 4;

    /// Offsets below this fit the two-byte copy token.
    pub const MAX_COPY1_OFFSET: usize = 2048;

    /// Longest literal length embedded directly in a tag byte.
    pub const MAX_INLINE_LITERAL: usize = 60;

    /// Fragment tail in which the scanner stops looking for matches; all
    /// word-wide loads in the hot loop stay inside the fragment because of
    /// this margin.
    pub const INPUT_MARGIN: usize = 15;

    /// log2 of the largest hash table.
    pub const MAX_HASH_TABLE_BITS: u32 = 14;

    /// Smallest hash table the compressor will allocate.
    pub const MIN_HASH_TABLE_SIZE: usize = 256;
}

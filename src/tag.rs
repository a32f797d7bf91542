//! Token descriptor table.
//!
//! Every token starts with a tag byte whose low two bits select the kind.
//! Decoding a tag through this 256-entry table yields the number of
//! trailing bytes, the embedded length, and (for short-offset copies) the
//! high bits of the offset without any per-token bit twiddling.

/// Tag kind for literal tokens.
pub(crate) const TAG_LITERAL: u8 = 0b00;
/// Tag kind for copies with a one-byte offset trailer (11-bit offsets).
pub(crate) const TAG_COPY1: u8 = 0b01;
/// Tag kind for copies with a two-byte offset trailer.
pub(crate) const TAG_COPY2: u8 = 0b10;
/// Tag kind for copies with a four-byte offset trailer.
pub(crate) const TAG_COPY4: u8 = 0b11;

/// Pack a descriptor: bits 0..8 embedded length, bits 8..11 offset high
/// bits, bits 11..14 trailing byte count.
const fn entry(extra: u16, len: u16, offset_high: u16) -> u16 {
    len | (offset_high << 8) | (extra << 11)
}

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];

    // Literals with the length embedded in the tag.
    let mut len = 1usize;
    while len <= 60 {
        table[TAG_LITERAL as usize | ((len - 1) << 2)] = entry(0, len as u16, 0);
        len += 1;
    }

    // Literals whose length arrives in 1..=4 trailing bytes. The embedded
    // length of 1 is the "+1" applied to the trailer value.
    let mut extra = 1usize;
    while extra <= 4 {
        table[TAG_LITERAL as usize | ((extra + 59) << 2)] = entry(extra as u16, 1, 0);
        extra += 1;
    }

    // Copy-1: length 4..=11 and the offset's high three bits in the tag.
    let mut len = 4usize;
    while len < 12 {
        let mut high = 0usize;
        while high < 8 {
            table[TAG_COPY1 as usize | ((len - 4) << 2) | (high << 5)] =
                entry(1, len as u16, high as u16);
            high += 1;
        }
        len += 1;
    }

    // Copy-2 and copy-4: length 1..=64 in the tag, offset fully in the
    // trailer.
    let mut len = 1usize;
    while len <= 64 {
        table[TAG_COPY2 as usize | ((len - 1) << 2)] = entry(2, len as u16, 0);
        table[TAG_COPY4 as usize | ((len - 1) << 2)] = entry(4, len as u16, 0);
        len += 1;
    }

    table
}

/// Descriptor table indexed by tag byte.
pub(crate) const TAG_TABLE: [u16; 256] = build_table();

/// Number of bytes immediately following the tag byte.
#[inline]
pub(crate) fn extra_bytes(entry: u16) -> usize {
    (entry >> 11) as usize
}

/// Length carried by the tag itself. For long literals this is 1 and the
/// real length is trailer + 1.
#[inline]
pub(crate) fn embedded_len(entry: u16) -> u32 {
    u32::from(entry & 0xff)
}

/// High offset bits already shifted into place, nonzero only for copy-1.
#[inline]
pub(crate) fn offset_high(entry: u16) -> u32 {
    u32::from(entry & 0x0700)
}

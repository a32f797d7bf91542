//! Shared helpers for the integration suites.

#![allow(dead_code)]

use rafaga::{
    compress, get_uncompressed_length, is_valid_compressed, max_compressed_length, uncompress,
};

/// Compress `input`, check the size-bound / validity / header laws, then
/// decompress and compare.
pub fn verify(input: &[u8]) {
    let packed = compress(input).unwrap();
    assert!(
        packed.len() <= max_compressed_length(input.len()),
        "size bound violated for {} input bytes",
        input.len()
    );
    assert!(is_valid_compressed(&packed));
    assert_eq!(get_uncompressed_length(&packed).unwrap() as usize, input.len());
    assert_eq!(uncompress(&packed).unwrap(), input);
}

/// Append the varint length header.
pub fn append_header(dst: &mut Vec<u8>, mut len: u32) {
    while len >= 0x80 {
        dst.push(len as u8 | 0x80);
        len >>= 7;
    }
    dst.push(len as u8);
}

/// Append a literal token, derived from the format rules rather than the
/// encoder's internals.
pub fn append_literal(dst: &mut Vec<u8>, literal: &[u8]) {
    if literal.is_empty() {
        return;
    }
    let mut n = literal.len() - 1;
    if n < 60 {
        dst.push((n as u8) << 2);
    } else {
        let mark = dst.len();
        dst.push(0);
        let mut count = 0u8;
        while n > 0 {
            dst.push(n as u8);
            n >>= 8;
            count += 1;
        }
        dst[mark] = (59 + count) << 2;
    }
    dst.extend_from_slice(literal);
}

/// Append copy tokens for `len` bytes at distance `offset`, chunking the
/// way any conforming encoder must.
pub fn append_copy(dst: &mut Vec<u8>, offset: usize, mut len: usize) {
    while len > 0 {
        let chunk = if len >= 68 {
            64
        } else if len > 64 {
            60
        } else {
            len
        };
        len -= chunk;
        if (4..12).contains(&chunk) && offset < 2048 {
            dst.push(0b01 | (((chunk - 4) as u8) << 2) | (((offset >> 8) as u8) << 5));
            dst.push(offset as u8);
        } else if offset < 65536 {
            dst.push(0b10 | (((chunk - 1) as u8) << 2));
            dst.extend_from_slice(&(offset as u16).to_le_bytes());
        } else {
            dst.push(0b11 | (((chunk - 1) as u8) << 2));
            dst.extend_from_slice(&(offset as u32).to_le_bytes());
        }
    }
}

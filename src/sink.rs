//! Output sinks for the decoder.
//!
//! The decode loop validates every length and offset against the declared
//! output size before calling in, so sinks only enforce their own capacity.
//! Each sink is a concrete type and the decoder is monomorphized over it;
//! there is no per-token dynamic dispatch.

use crate::{Error, Result};

/// Destination for decoded bytes.
pub(crate) trait Sink {
    /// Append `src` verbatim.
    fn put_literal(&mut self, src: &[u8]) -> Result<()>;

    /// Re-emit `len` bytes starting `offset` bytes behind the current
    /// position, with byte-at-a-time semantics when the regions overlap.
    fn copy_back(&mut self, offset: usize, len: usize) -> Result<()>;
}

/// Sink over a single pre-sized contiguous buffer.
pub(crate) struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Sink for SliceSink<'_> {
    #[inline]
    fn put_literal(&mut self, src: &[u8]) -> Result<()> {
        self.buf[self.pos..self.pos + src.len()].copy_from_slice(src);
        self.pos += src.len();
        Ok(())
    }

    #[inline]
    fn copy_back(&mut self, offset: usize, len: usize) -> Result<()> {
        incremental_copy(self.buf, self.pos, offset, len);
        self.pos += len;
        Ok(())
    }
}

/// Copy `len` bytes within `buf` from `dst - offset` to `dst`, reproducing
/// the byte-at-a-time model when the regions overlap.
pub(crate) fn incremental_copy(buf: &mut [u8], dst: usize, offset: usize, len: usize) {
    if offset >= len {
        buf.copy_within(dst - offset..dst - offset + len, dst);
    } else if offset == 1 {
        let b = buf[dst - 1];
        buf[dst..dst + len].fill(b);
    } else {
        // Widening pattern copy: each chunk spans at most the distance
        // already materialized, so source and destination stay disjoint
        // while the chunk size doubles as the pattern lands.
        let mut dist = offset;
        let mut at = dst;
        let mut rem = len;
        while rem > 0 {
            let chunk = dist.min(rem);
            buf.copy_within(at - dist..at - dist + chunk, at);
            at += chunk;
            rem -= chunk;
            dist += chunk;
        }
    }
}

/// Sink for structural validation: tracks nothing, writes nothing.
#[derive(Default)]
pub(crate) struct TallySink;

impl Sink for TallySink {
    #[inline]
    fn put_literal(&mut self, _src: &[u8]) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn copy_back(&mut self, _offset: usize, _len: usize) -> Result<()> {
        Ok(())
    }
}

/// Sink over an ordered list of caller-owned segments.
///
/// Writes proceed in logical output order, straddling segment boundaries as
/// needed; empty segments are skipped. Copy sources are resolved back to a
/// (segment, position) pair through the running prefix of segment starts.
pub(crate) struct SegmentSink<'a, 'b> {
    segments: &'a mut [&'b mut [u8]],
    /// Logical start of each segment, with the grand total appended.
    starts: Vec<usize>,
    seg: usize,
    seg_pos: usize,
    written: usize,
}

impl<'a, 'b> SegmentSink<'a, 'b> {
    pub(crate) fn new(segments: &'a mut [&'b mut [u8]]) -> Self {
        let mut starts = Vec::with_capacity(segments.len() + 1);
        let mut total = 0usize;
        for seg in segments.iter() {
            starts.push(total);
            total += seg.len();
        }
        starts.push(total);
        Self { segments, starts, seg: 0, seg_pos: 0, written: 0 }
    }

    #[inline]
    fn total(&self) -> usize {
        self.starts[self.segments.len()]
    }

    /// Segment index and in-segment position for logical position `pos`.
    /// `pos` must be strictly below the total, which places it inside a
    /// non-empty segment.
    fn locate(&self, pos: usize) -> (usize, usize) {
        let seg = self.starts.partition_point(|&start| start <= pos) - 1;
        (seg, pos - self.starts[seg])
    }

    /// Advance the write cursor past exhausted segments.
    #[inline]
    fn skip_full_segments(&mut self) {
        while self.seg < self.segments.len() && self.seg_pos == self.segments[self.seg].len() {
            self.seg += 1;
            self.seg_pos = 0;
        }
    }
}

impl Sink for SegmentSink<'_, '_> {
    fn put_literal(&mut self, src: &[u8]) -> Result<()> {
        if self.written + src.len() > self.total() {
            return Err(Error::LiteralOverrun);
        }
        let mut src = src;
        while !src.is_empty() {
            self.skip_full_segments();
            let room = self.segments[self.seg].len() - self.seg_pos;
            let take = room.min(src.len());
            self.segments[self.seg][self.seg_pos..self.seg_pos + take]
                .copy_from_slice(&src[..take]);
            self.seg_pos += take;
            self.written += take;
            src = &src[take..];
        }
        Ok(())
    }

    fn copy_back(&mut self, offset: usize, len: usize) -> Result<()> {
        if self.written + len > self.total() {
            return Err(Error::CopyOverrun);
        }
        let (mut src_seg, mut src_pos) = self.locate(self.written - offset);
        self.skip_full_segments();

        // Fast path: source and destination each inside one segment and far
        // enough apart that a block move preserves the byte model.
        if offset >= len
            && self.segments[self.seg].len() - self.seg_pos >= len
            && self.segments[src_seg].len() - src_pos >= len
        {
            if src_seg == self.seg {
                self.segments[self.seg].copy_within(src_pos..src_pos + len, self.seg_pos);
            } else {
                // The source always precedes the destination.
                let (head, tail) = self.segments.split_at_mut(self.seg);
                tail[0][self.seg_pos..self.seg_pos + len]
                    .copy_from_slice(&head[src_seg][src_pos..src_pos + len]);
            }
            self.seg_pos += len;
            self.written += len;
            return Ok(());
        }

        // General path: one byte at a time, straddling segments on either
        // side. A self-overlapping copy reads bytes this same loop has just
        // written, which is exactly the byte-at-a-time model.
        for _ in 0..len {
            while self.segments[src_seg].len() == src_pos {
                src_seg += 1;
                src_pos = 0;
            }
            let byte = self.segments[src_seg][src_pos];
            src_pos += 1;
            self.skip_full_segments();
            self.segments[self.seg][self.seg_pos] = byte;
            self.seg_pos += 1;
            self.written += 1;
        }
        Ok(())
    }
}

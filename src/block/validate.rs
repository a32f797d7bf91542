//! Structural validation without output.

use crate::block::decode;
use crate::sink::TallySink;
use crate::varint::read_uvarint;
use crate::Result;

/// Run the full decode over `input` discarding every byte produced.
///
/// Rejects exactly the inputs [`crate::uncompress`] rejects, but allocates
/// nothing, so a header declaring gigabytes of output costs only the walk
/// over the (small) token stream.
///
/// # Errors
///
/// Any corruption kind of [`crate::Error`].
pub(crate) fn validate(input: &[u8]) -> Result<()> {
    let (declared, header) = read_uvarint(input)?;
    let mut sink = TallySink;
    decode(&input[header..], u64::from(declared), &mut sink)
}

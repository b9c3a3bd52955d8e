//! Segment reads for a decoded response.

use std::io::Read;

use message::Response;

use crate::error::{Segment, WireError, WireResult};

/// Fills the pre-sized `extras`, `key`, and `body` buffers of `response`
/// from `stream`.
///
/// Segments are read in wire order—extras, then key, then body. Empty
/// extras and key segments are skipped; the body read is always attempted,
/// even at zero length.
///
/// # Errors
///
/// A short read, EOF, or I/O failure aborts immediately with
/// [`WireError::Stream`] naming the segment being read. No retry is
/// attempted; a partially filled record must not be treated as valid.
pub fn read_segments<R: Read>(stream: &mut R, response: &mut Response) -> WireResult<()> {
    if !response.extras.is_empty() {
        stream
            .read_exact(&mut response.extras)
            .map_err(|source| WireError::Stream {
                segment: Segment::Extras,
                source,
            })?;
    }
    if !response.key.is_empty() {
        stream
            .read_exact(&mut response.key)
            .map_err(|source| WireError::Stream {
                segment: Segment::Key,
                source,
            })?;
    }
    stream
        .read_exact(&mut response.body)
        .map_err(|source| WireError::Stream {
            segment: Segment::Body,
            source,
        })
}

//! Header decoding.

use message::{Opcode, Response, Status, HEADER_SIZE, REQUEST_MAGIC, RESPONSE_MAGIC};

use crate::error::{FramingError, LimitKind};
use crate::limits::Limits;

/// Decodes a 24-byte header into a [`Response`] with pre-sized segments.
///
/// The returned record has `opcode`, `status`, `opaque`, and `cas` filled
/// from the header, and `extras`, `key`, and `body` allocated (zero-filled)
/// to their declared lengths; body length is derived as
/// `total_body_length - (key_len + extras_len)`. Reading the segment
/// contents is [`read_segments`](crate::read_segments)' job.
///
/// Pure transform: no I/O, deterministic.
///
/// # Errors
///
/// - [`FramingError::BadMagic`] if byte 0 is neither magic value. Both the
///   response and the request magic are accepted, so captured request
///   frames can be decoded symmetrically.
/// - [`FramingError::BodyLengthUnderflow`] if `key_len + extras_len`
///   exceeds `total_body_length`. This is checked explicitly; the naive
///   unsigned subtraction would wrap around and demand a near-4 GiB
///   allocation.
/// - [`FramingError::LimitExceeded`] if a declared length exceeds
///   `limits`, before anything is allocated.
pub fn decode_header(header: &[u8; HEADER_SIZE], limits: &Limits) -> Result<Response, FramingError> {
    let magic = header[0];
    if magic != RESPONSE_MAGIC && magic != REQUEST_MAGIC {
        return Err(FramingError::BadMagic { found: magic });
    }

    let opcode = Opcode::from_raw(header[1]);
    let key_len = u16::from_be_bytes([header[2], header[3]]);
    let extras_len = header[4];
    // header[5] is the data type byte; the decoder ignores it.
    let status = Status::from_raw(u16::from_be_bytes([header[6], header[7]]));
    let total_body = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);
    let opaque = u32::from_be_bytes([header[12], header[13], header[14], header[15]]);
    let cas = u64::from_be_bytes([
        header[16], header[17], header[18], header[19], header[20], header[21], header[22],
        header[23],
    ]);

    let framing_len = u32::from(key_len) + u32::from(extras_len);
    if framing_len > total_body {
        return Err(FramingError::BodyLengthUnderflow {
            total_body,
            key_len,
            extras_len,
        });
    }

    if usize::from(key_len) > limits.max_key_bytes {
        return Err(FramingError::LimitExceeded {
            kind: LimitKind::KeyBytes,
            limit: limits.max_key_bytes,
            actual: usize::from(key_len),
        });
    }
    let total_body_usize = total_body as usize;
    if total_body_usize > limits.max_total_body_bytes {
        return Err(FramingError::LimitExceeded {
            kind: LimitKind::TotalBodyBytes,
            limit: limits.max_total_body_bytes,
            actual: total_body_usize,
        });
    }

    let body_len = (total_body - framing_len) as usize;

    Ok(Response {
        opcode,
        status,
        opaque,
        cas,
        extras: vec![0; usize::from(extras_len)],
        key: vec![0; usize::from(key_len)],
        body: vec![0; body_len],
    })
}

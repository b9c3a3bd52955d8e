//! Header byte layout shared by request and response serialization.

use std::io;

use crate::{Opcode, HEADER_SIZE};

/// Encodes the 24-byte header for a frame.
///
/// `field` is the byte 6–7 slot: vbucket id for requests, status for
/// responses. Segment lengths that do not fit their header fields are
/// rejected before anything is written.
pub(crate) fn header_bytes(
    magic: u8,
    opcode: Opcode,
    field: u16,
    opaque: u32,
    cas: u64,
    extras_len: usize,
    key_len: usize,
    body_len: usize,
) -> io::Result<[u8; HEADER_SIZE]> {
    let key_len = u16::try_from(key_len)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "key exceeds 65535 bytes"))?;
    let extras_len = u8::try_from(extras_len)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "extras exceed 255 bytes"))?;
    let total_body = u64::from(extras_len) + u64::from(key_len) + body_len as u64;
    let total_body = u32::try_from(total_body).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "total body length exceeds u32")
    })?;

    let mut out = [0u8; HEADER_SIZE];
    out[0] = magic;
    out[1] = opcode.raw();
    out[2..4].copy_from_slice(&key_len.to_be_bytes());
    out[4] = extras_len;
    out[5] = 0x00; // data type, always raw bytes
    out[6..8].copy_from_slice(&field.to_be_bytes());
    out[8..12].copy_from_slice(&total_body.to_be_bytes());
    out[12..16].copy_from_slice(&opaque.to_be_bytes());
    out[16..24].copy_from_slice(&cas.to_be_bytes());
    Ok(out)
}

//! Response records.

use std::io::{self, Write};

use crate::encode::header_bytes;
use crate::{Opcode, Status, HEADER_SIZE, RESPONSE_MAGIC};

/// A response frame as exchanged on the wire.
///
/// A record is allocated fresh per message, filled once by the decode path
/// (or by the caller, on the transmit path) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Command this response answers.
    pub opcode: Opcode,
    /// Result code; zero is success.
    pub status: Status,
    /// Correlation token echoed from the request.
    pub opaque: u32,
    /// Compare-and-swap version stamp.
    pub cas: u64,
    /// Command-specific fixed-purpose payload.
    pub extras: Vec<u8>,
    /// Key the command operated on.
    pub key: Vec<u8>,
    /// Value payload.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns the encoded size of this response in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        HEADER_SIZE + self.extras.len() + self.key.len() + self.body.len()
    }

    /// Writes this response's wire bytes to `sink`.
    ///
    /// Emits the 24-byte header followed by extras, key, and body. A segment
    /// too long for its header field is rejected with
    /// [`io::ErrorKind::InvalidInput`] before any byte is written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let header = header_bytes(
            RESPONSE_MAGIC,
            self.opcode,
            self.status.raw(),
            self.opaque,
            self.cas,
            self.extras.len(),
            self.key.len(),
            self.body.len(),
        )?;
        sink.write_all(&header)?;
        sink.write_all(&self.extras)?;
        sink.write_all(&self.key)?;
        sink.write_all(&self.body)?;
        Ok(())
    }
}

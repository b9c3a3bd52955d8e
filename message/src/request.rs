//! Request records.

use std::io::{self, Write};

use crate::encode::header_bytes;
use crate::{Opcode, HEADER_SIZE, REQUEST_MAGIC};

/// A request frame as exchanged on the wire.
///
/// Bytes 6–7 of a request header carry the vbucket id, where a response
/// carries its status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    /// Command to execute.
    pub opcode: Opcode,
    /// Virtual bucket the key hashes to.
    pub vbucket: u16,
    /// Correlation token echoed back by the peer.
    pub opaque: u32,
    /// Compare-and-swap version stamp; zero when unused.
    pub cas: u64,
    /// Command-specific fixed-purpose payload.
    pub extras: Vec<u8>,
    /// Key the command operates on.
    pub key: Vec<u8>,
    /// Value payload.
    pub body: Vec<u8>,
}

impl Request {
    /// Returns the encoded size of this request in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        HEADER_SIZE + self.extras.len() + self.key.len() + self.body.len()
    }

    /// Writes this request's wire bytes to `sink`.
    ///
    /// Emits the 24-byte header followed by extras, key, and body. A segment
    /// too long for its header field is rejected with
    /// [`io::ErrorKind::InvalidInput`] before any byte is written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let header = header_bytes(
            REQUEST_MAGIC,
            self.opcode,
            self.vbucket,
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

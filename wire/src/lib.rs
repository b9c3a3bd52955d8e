//! Header framing for the memcached binary protocol.
//!
//! This crate implements the on-the-wire framing core: decoding 24-byte
//! headers into pre-sized records, reading extras/key/body segments from a
//! blocking stream, the one-response receive orchestration, and the
//! symmetric transmit path. Record types and their serialization live in
//! the `message` crate; connections, pooling, and the client API live
//! above this layer.
//!
//! # Design Principles
//!
//! - **Bounded decoding** - Header-declared lengths are validated against
//!   [`Limits`] before any allocation.
//! - **Synchronous and stateless** - Every operation is a pure function of
//!   its stream and record; concurrent calls must not share a stream.
//! - **Status is not an error** - A well-formed response with a failure
//!   status is returned as [`Received::Failed`] carrying the full record,
//!   never as a stream or framing error.
//!
//! # Example
//!
//! ```
//! use message::{Opcode, Request, HEADER_SIZE};
//! use wire::{receive_response, transmit_request, Limits};
//! # use std::io::Cursor;
//!
//! let request = Request {
//!     opcode: Opcode::GET,
//!     key: b"greeting".to_vec(),
//!     ..Request::default()
//! };
//! let mut sink = Vec::new();
//! transmit_request(Some(&mut sink), &request).unwrap();
//!
//! // A request frame decodes symmetrically on the receive path.
//! let mut stream = Cursor::new(sink);
//! let mut header_buf = [0u8; HEADER_SIZE];
//! let received = receive_response(Some(&mut stream), &mut header_buf, &Limits::default()).unwrap();
//! assert_eq!(received.response().key, b"greeting");
//! ```

mod error;
mod header;
mod limits;
mod receive;
mod segments;
mod transmit;

pub use error::{FramingError, LimitKind, Segment, WireError, WireResult};
pub use header::decode_header;
pub use limits::Limits;
pub use receive::{receive_response, Received};
pub use segments::read_segments;
pub use transmit::{transmit_request, transmit_response};

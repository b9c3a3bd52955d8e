//! Record types and wire serialization for the memcached binary protocol.
//!
//! This crate defines [`Request`] and [`Response`] records together with the
//! constants of the 24-byte binary header, and knows how to emit a record's
//! own wire bytes onto any [`std::io::Write`] sink. It does not read from
//! streams and does not interpret opcodes—framing and the receive path live
//! in the `wire` crate.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Network byte order, fixed header layout.
//! - **Opaque opcodes** - Command codes pass through uninterpreted.
//! - **Explicit errors** - Oversized segments are rejected before any byte
//!   is written, never truncated.

mod encode;
mod opcode;
mod request;
mod response;
mod status;

pub use opcode::Opcode;
pub use request::Request;
pub use response::Response;
pub use status::Status;

/// Size of the fixed binary protocol header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Magic byte identifying a request frame.
pub const REQUEST_MAGIC: u8 = 0x80;

/// Magic byte identifying a response frame.
pub const RESPONSE_MAGIC: u8 = 0x81;

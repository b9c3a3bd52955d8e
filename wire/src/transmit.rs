//! The transmit path.

use std::io::Write;

use message::{Request, Response};

use crate::error::{Segment, WireError, WireResult};

/// Transmits one request to `sink`.
///
/// Delegates the byte layout to [`Request::write_to`]; this layer imposes
/// no buffering policy—wrap the sink in a writer of your choosing. Safe to
/// call repeatedly with different records on the same sink.
///
/// # Errors
///
/// - [`WireError::NoConnection`] if `sink` is `None`; nothing is written.
/// - [`WireError::Stream`] wrapping any write failure verbatim.
pub fn transmit_request<W: Write>(sink: Option<&mut W>, request: &Request) -> WireResult<()> {
    let Some(sink) = sink else {
        return Err(WireError::NoConnection);
    };
    request.write_to(sink).map_err(|source| WireError::Stream {
        segment: Segment::Frame,
        source,
    })
}

/// Transmits one response to `sink`.
///
/// The server-side mirror of [`transmit_request`], with the same contract.
pub fn transmit_response<W: Write>(sink: Option<&mut W>, response: &Response) -> WireResult<()> {
    let Some(sink) = sink else {
        return Err(WireError::NoConnection);
    };
    response.write_to(sink).map_err(|source| WireError::Stream {
        segment: Segment::Frame,
        source,
    })
}

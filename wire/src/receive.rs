//! The receive path: header read, decode, segment reads, status policy.

use std::io::Read;

use message::{Response, Status, HEADER_SIZE};

use crate::error::{Segment, WireError, WireResult};
use crate::header::decode_header;
use crate::limits::Limits;
use crate::segments::read_segments;

/// Outcome of receiving one response.
///
/// A non-success status is not a stream error: the frame was well-formed
/// and fully read, the server merely reported a protocol-level failure.
/// Both variants carry the complete record, so callers that do not care
/// about the distinction can call [`into_response`](Self::into_response)
/// and inspect [`Response::status`] themselves, while callers that treat a
/// failure status as fatal can match on [`Received::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Received {
    /// The response carried the success status.
    Success(Response),
    /// The response carried a non-success status.
    Failed { status: Status, response: Response },
}

impl Received {
    fn from_response(response: Response) -> Self {
        if response.status.is_success() {
            Self::Success(response)
        } else {
            Self::Failed {
                status: response.status,
                response,
            }
        }
    }

    /// Returns the record regardless of its status.
    #[must_use]
    pub fn into_response(self) -> Response {
        match self {
            Self::Success(response) | Self::Failed { response, .. } => response,
        }
    }

    /// Borrows the record regardless of its status.
    #[must_use]
    pub fn response(&self) -> &Response {
        match self {
            Self::Success(response) | Self::Failed { response, .. } => response,
        }
    }

    /// Returns the response status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.response().status
    }

    /// Returns `true` for [`Received::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Receives one complete response from `stream`.
///
/// Reads the 24-byte header into `header_buf` (a caller-supplied scratch
/// buffer, reusable across calls), decodes it, then reads the extras, key,
/// and body segments. Blocks until the frame is complete or the stream
/// fails; timeouts belong to the stream implementation.
///
/// # Errors
///
/// - [`WireError::NoConnection`] if `stream` is `None`; no bytes are read.
/// - [`WireError::Stream`] if the header or a segment read fails; the
///   stream is no longer positioned on a frame boundary and must not be
///   reused.
/// - [`WireError::Framing`] if the header is structurally invalid.
pub fn receive_response<R: Read>(
    stream: Option<&mut R>,
    header_buf: &mut [u8; HEADER_SIZE],
    limits: &Limits,
) -> WireResult<Received> {
    let Some(stream) = stream else {
        return Err(WireError::NoConnection);
    };

    stream
        .read_exact(header_buf)
        .map_err(|source| WireError::Stream {
            segment: Segment::Header,
            source,
        })?;

    let mut response = decode_header(header_buf, limits)?;
    read_segments(stream, &mut response)?;

    Ok(Received::from_response(response))
}

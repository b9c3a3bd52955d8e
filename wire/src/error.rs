//! Error types for framing operations.

use std::fmt;
use std::io;

/// Result type for framing operations.
pub type WireResult<T> = Result<T, WireError>;

/// The part of a frame being transferred when a stream error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The fixed 24-byte header.
    Header,
    /// The extras segment.
    Extras,
    /// The key segment.
    Key,
    /// The body segment.
    Body,
    /// An entire outgoing frame.
    Frame,
}

/// Structural errors in a frame header.
///
/// A framing error means the stream position is no longer reliable; the
/// connection should not be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FramingError {
    /// Byte 0 was neither the request nor the response magic.
    BadMagic { found: u8 },

    /// Total body length is smaller than key length plus extras length.
    BodyLengthUnderflow {
        total_body: u32,
        key_len: u16,
        extras_len: u8,
    },

    /// A header-declared length exceeds the configured limits.
    LimitExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific frame limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    KeyBytes,
    TotalBodyBytes,
}

/// Top-level error for the receive and transmit paths.
#[derive(Debug)]
#[non_exhaustive]
pub enum WireError {
    /// The stream or sink argument was absent; no bytes were touched.
    NoConnection,

    /// The frame header was structurally invalid.
    Framing(FramingError),

    /// The underlying read or write failed; the stream should be
    /// considered unusable.
    Stream { segment: Segment, source: io::Error },
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Extras => "extras",
            Self::Key => "key",
            Self::Body => "body",
            Self::Frame => "frame",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic { found } => write!(f, "bad magic: 0x{found:02x}"),
            Self::BodyLengthUnderflow {
                total_body,
                key_len,
                extras_len,
            } => {
                write!(
                    f,
                    "total body length {total_body} smaller than key ({key_len}) plus extras ({extras_len})"
                )
            }
            Self::LimitExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyBytes => "key bytes",
            Self::TotalBodyBytes => "total body bytes",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConnection => write!(f, "no connection"),
            Self::Framing(err) => write!(f, "framing error: {err}"),
            Self::Stream { segment, source } => {
                write!(f, "stream error on {segment}: {source}")
            }
        }
    }
}

impl std::error::Error for FramingError {}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Framing(err) => Some(err),
            Self::Stream { source, .. } => Some(source),
            Self::NoConnection => None,
        }
    }
}

impl From<FramingError> for WireError {
    fn from(err: FramingError) -> Self {
        Self::Framing(err)
    }
}

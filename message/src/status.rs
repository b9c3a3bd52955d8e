//! Response status codes.

use std::fmt;

/// Binary protocol result code carried in response headers.
///
/// Zero means success; any other value is a protocol-level failure. The
/// framing layer only distinguishes success from non-success—the named
/// constants exist for diagnostics and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status(u16);

impl Status {
    pub const SUCCESS: Self = Self(0x0000);
    pub const KEY_NOT_FOUND: Self = Self(0x0001);
    pub const KEY_EXISTS: Self = Self(0x0002);
    pub const VALUE_TOO_LARGE: Self = Self(0x0003);
    pub const INVALID_ARGUMENTS: Self = Self(0x0004);
    pub const ITEM_NOT_STORED: Self = Self(0x0005);
    pub const DELTA_BADVAL: Self = Self(0x0006);
    pub const UNKNOWN_COMMAND: Self = Self(0x0081);
    pub const OUT_OF_MEMORY: Self = Self(0x0082);

    /// Creates a status from a raw code.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw status code.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if this status indicates success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Returns the protocol-defined name of the status, if it has one.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0x0000 => Some("no error"),
            0x0001 => Some("key not found"),
            0x0002 => Some("key exists"),
            0x0003 => Some("value too large"),
            0x0004 => Some("invalid arguments"),
            0x0005 => Some("item not stored"),
            0x0006 => Some("non-numeric value"),
            0x0081 => Some("unknown command"),
            0x0082 => Some("out of memory"),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (0x{:04x})", self.0),
            None => write!(f, "status 0x{:04x}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_zero() {
        assert_eq!(Status::SUCCESS.raw(), 0);
        assert!(Status::SUCCESS.is_success());
    }

    #[test]
    fn nonzero_is_failure() {
        assert!(!Status::KEY_NOT_FOUND.is_success());
        assert!(!Status::from_raw(0x338).is_success());
        assert!(!Status::from_raw(0xFFFF).is_success());
    }

    #[test]
    fn from_raw_roundtrip() {
        let status = Status::from_raw(0x338);
        assert_eq!(status.raw(), 0x338);
    }

    #[test]
    fn named_statuses() {
        assert_eq!(Status::KEY_NOT_FOUND.name(), Some("key not found"));
        assert_eq!(Status::OUT_OF_MEMORY.name(), Some("out of memory"));
        assert_eq!(Status::from_raw(0x338).name(), None);
    }

    #[test]
    fn display_known_and_unknown() {
        assert_eq!(Status::KEY_EXISTS.to_string(), "key exists (0x0002)");
        assert_eq!(Status::from_raw(0x338).to_string(), "status 0x0338");
    }

    #[test]
    fn default_is_success() {
        assert!(Status::default().is_success());
    }
}

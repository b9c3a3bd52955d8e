//! Command opcodes.

use std::fmt;

/// Binary protocol command code.
///
/// The framing layer treats opcodes as opaque 8-bit values and never rejects
/// an unknown one; the constants below name the well-known commands for
/// callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opcode(u8);

impl Opcode {
    pub const GET: Self = Self(0x00);
    pub const SET: Self = Self(0x01);
    pub const ADD: Self = Self(0x02);
    pub const REPLACE: Self = Self(0x03);
    pub const DELETE: Self = Self(0x04);
    pub const INCREMENT: Self = Self(0x05);
    pub const DECREMENT: Self = Self(0x06);
    pub const QUIT: Self = Self(0x07);
    pub const FLUSH: Self = Self(0x08);
    pub const GETQ: Self = Self(0x09);
    pub const NOOP: Self = Self(0x0A);
    pub const VERSION: Self = Self(0x0B);
    pub const GETK: Self = Self(0x0C);
    pub const GETKQ: Self = Self(0x0D);
    pub const APPEND: Self = Self(0x0E);
    pub const PREPEND: Self = Self(0x0F);
    pub const STAT: Self = Self(0x10);
    pub const SETQ: Self = Self(0x11);
    pub const ADDQ: Self = Self(0x12);
    pub const DELETEQ: Self = Self(0x14);
    pub const TOUCH: Self = Self(0x1C);

    /// Creates an opcode from a raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw opcode byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

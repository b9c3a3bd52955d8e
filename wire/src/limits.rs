//! Configurable limits for bounded frame decoding.

/// Limits applied to header-declared lengths before any buffer is sized.
///
/// Header fields are attacker-influenced: a key length up to 65535 and a
/// total body length up to 4 GiB can be declared in 24 bytes. These limits
/// are enforced during header decoding to keep allocations bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum key length in bytes.
    pub max_key_bytes: usize,

    /// Maximum total body length (extras + key + body) in bytes.
    pub max_total_body_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // The header field allows the full u16 range
            max_key_bytes: 65_535,

            // Matches the ceiling of typical server configurations
            max_total_body_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_key_bytes: 64,
            max_total_body_bytes: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_key_bytes: usize::MAX,
            max_total_body_bytes: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_key_bytes() {
        let limits = Limits::default();
        assert_eq!(limits.max_key_bytes, 65_535);
    }

    #[test]
    fn default_limits_total_body() {
        let limits = Limits::default();
        assert_eq!(limits.max_total_body_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();

        assert!(test_limits.max_key_bytes < default_limits.max_key_bytes);
        assert!(test_limits.max_total_body_bytes < default_limits.max_total_body_bytes);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_key_bytes, usize::MAX);
        assert_eq!(limits.max_total_body_bytes, usize::MAX);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_key_bytes, 64);
    }
}

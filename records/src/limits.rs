//! Configurable limits for bounded decoding.

/// Limits enforced while unmarshalling records.
///
/// List counts and datum lengths are read from the wire and are therefore
/// attacker-controlled. These limits are checked before any count-driven
/// allocation loop to keep memory usage bounded on malformed or hostile
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum number of elements accepted for any single list field.
    pub max_list_elements: usize,

    /// Maximum padded payload size in bytes for a single variable datum.
    pub max_datum_bytes: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            // The longest list a real PDU carries is bounded by the u16
            // length field of its header; 4096 elements is far past that.
            max_list_elements: 4096,
            max_datum_bytes: 32 * 1024,
        }
    }
}

impl DecodeLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_list_elements: 8,
            max_datum_bytes: 256,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_list_elements: usize::MAX,
            max_datum_bytes: usize::MAX,
        }
    }
}

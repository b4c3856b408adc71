//! Error types for record decoding.

use std::fmt;

use stream::StreamError;

/// Result type for record decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while unmarshalling a record.
///
/// Marshalling is infallible: the writer grows as needed and no value-range
/// validation is performed on fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input ended before the record's fields could be read.
    Stream(StreamError),

    /// A wire-provided list count exceeds the configured limit.
    ///
    /// Counts are attacker-controlled; this bound is checked before any
    /// allocation or element decode loop.
    CountExceedsLimit {
        /// Name of the list field whose count was rejected.
        field: &'static str,
        /// The count read from the wire.
        count: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// A variable datum's bit length implies a payload larger than the
    /// configured limit.
    DatumTooLarge {
        /// The padded payload size in bytes implied by the bit length.
        datum_bytes: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(err) => write!(f, "stream error: {err}"),
            Self::CountExceedsLimit {
                field,
                count,
                limit,
            } => {
                write!(f, "{field} count {count} exceeds limit {limit}")
            }
            Self::DatumTooLarge { datum_bytes, limit } => {
                write!(
                    f,
                    "variable datum of {datum_bytes} bytes exceeds limit {limit}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StreamError> for DecodeError {
    fn from(err: StreamError) -> Self {
        Self::Stream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_stream_error() {
        let err = DecodeError::Stream(StreamError::UnexpectedEof {
            requested: 4,
            available: 1,
        });
        let msg = err.to_string();
        assert!(msg.contains("stream error"));
        assert!(msg.contains("4 bytes"));
    }

    #[test]
    fn display_count_exceeds_limit() {
        let err = DecodeError::CountExceedsLimit {
            field: "variable_parameters",
            count: 10_000,
            limit: 4096,
        };
        let msg = err.to_string();
        assert!(msg.contains("variable_parameters"));
        assert!(msg.contains("10000"));
        assert!(msg.contains("4096"));
    }

    #[test]
    fn display_datum_too_large() {
        let err = DecodeError::DatumTooLarge {
            datum_bytes: 1 << 20,
            limit: 32 * 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("variable datum"));
    }

    #[test]
    fn from_stream_error() {
        let stream_err = StreamError::UnexpectedEof {
            requested: 1,
            available: 0,
        };
        let err = DecodeError::from(stream_err.clone());
        assert_eq!(err, DecodeError::Stream(stream_err));
    }

    #[test]
    fn stream_error_is_source() {
        use std::error::Error;
        let err = DecodeError::Stream(StreamError::UnexpectedEof {
            requested: 1,
            available: 0,
        });
        assert!(err.source().is_some());
    }
}

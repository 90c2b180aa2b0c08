//! Error types for the clip codec and timeline parser.

use serde::{Deserialize, Serialize};

/// Errors surfaced by encoding, timeline parsing and record loading.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimDataError {
    /// A two-token timeline line with an unknown event name or a non-integer time.
    /// Fails the whole timeline; no partial event list is returned.
    #[error("Malformed event line {line} '{text}': {reason}")]
    MalformedEventLine {
        line: usize,
        text: String,
        reason: String,
    },

    /// A sample whose scaled fixed-point value does not fit in an `i32` (or is not finite).
    /// `value` is the offending float as text, so NaN and infinities survive serialization.
    #[error("Channel value {value} overflows the fixed-point range")]
    ChannelOverflow { value: String },

    /// A deserialized record violates an ordering invariant.
    #[error("Invalid animation record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    #[error("IO error: {reason}")]
    Io { reason: String },
}

impl AnimDataError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedEventLine { .. } => "timeline",
            Self::ChannelOverflow { .. } => "codec",
            Self::InvalidRecord { .. } => "validation",
            Self::Serialization { .. } => "serialization",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for AnimDataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnimDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_categories() {
        let err = AnimDataError::MalformedEventLine {
            line: 3,
            text: "Foo,bar".into(),
            reason: "unknown event 'Foo'".into(),
        };
        assert_eq!(err.category(), "timeline");
        assert_eq!(
            AnimDataError::ChannelOverflow {
                value: "1e12".into()
            }
            .category(),
            "codec"
        );
    }

    #[test]
    fn display_names_the_line() {
        let err = AnimDataError::MalformedEventLine {
            line: 2,
            text: "Jump,x".into(),
            reason: "invalid time".into(),
        };
        assert_eq!(err.to_string(), "Malformed event line 2 'Jump,x': invalid time");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AnimDataError = io.into();
        assert!(matches!(err, AnimDataError::Io { .. }));
    }

    #[test]
    fn non_finite_overflow_survives_json() {
        let error = crate::fixed_point::try_encode(f32::NAN).unwrap_err();
        assert_eq!(
            error,
            AnimDataError::ChannelOverflow {
                value: "NaN".into()
            }
        );
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: AnimDataError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);

        let inf = crate::fixed_point::try_encode(f32::NEG_INFINITY).unwrap_err();
        let back: AnimDataError =
            serde_json::from_str(&serde_json::to_string(&inf).unwrap()).unwrap();
        assert_eq!(back.to_string(), "Channel value -inf overflows the fixed-point range");
    }

    #[test]
    fn serialization() {
        let error = AnimDataError::InvalidRecord {
            reason: "unsorted".into(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: AnimDataError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}

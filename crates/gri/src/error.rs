//! Error types for GRI decoding, validation, construction and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Stable error codes for the identifier errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// G001: A required `.` separator is missing
    MissingSeparator,
    /// G002: A segment that must carry a value is empty
    EmptySegment,
    /// G003: A field holds a character the format cannot represent there
    InvalidField,
    /// G004: A required field was never supplied
    MissingField,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "G001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MissingSeparator => "G001",
            ErrorCode::EmptySegment => "G002",
            ErrorCode::InvalidField => "G003",
            ErrorCode::MissingField => "G004",
        }
    }
}

/// Names a positional segment of a GRI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    EntityType,
    EntityId,
    Aspect,
    AspectId,
    Scope,
}

impl Segment {
    /// Returns the field name as used by the remote graph API.
    pub fn name(&self) -> &'static str {
        match self {
            Segment::EntityType => "entityType",
            Segment::EntityId => "entityId",
            Segment::Aspect => "aspect",
            Segment::AspectId => "aspectId",
            Segment::Scope => "scope",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error while decoding a GRI string.
///
/// Every variant keeps the complete input so callers can report what was
/// actually received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[G001] malformed GRI {value:?}: missing '.' after {segment}")]
    MissingSeparator { value: String, segment: Segment },

    #[error("[G002] malformed GRI {value:?}: {segment} is empty")]
    EmptySegment { value: String, segment: Segment },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::MissingSeparator { .. } => ErrorCode::MissingSeparator,
            DecodeError::EmptySegment { .. } => ErrorCode::EmptySegment,
        }
    }

    /// Returns the input that failed to decode.
    pub fn value(&self) -> &str {
        match self {
            DecodeError::MissingSeparator { value, .. }
            | DecodeError::EmptySegment { value, .. } => value,
        }
    }

    /// Returns the segment at which decoding stopped.
    pub fn segment(&self) -> Segment {
        match self {
            DecodeError::MissingSeparator { segment, .. }
            | DecodeError::EmptySegment { segment, .. } => *segment,
        }
    }
}

/// Error during structural validation of a [`Gri`](crate::Gri).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("[G002] {segment} is empty")]
    EmptySegment { segment: Segment },

    #[error("[G003] {segment} {value:?} contains reserved character {char:?}")]
    ReservedChar {
        segment: Segment,
        value: String,
        char: char,
    },
}

impl ValidationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptySegment { .. } => ErrorCode::EmptySegment,
            ValidationError::ReservedChar { .. } => ErrorCode::InvalidField,
        }
    }
}

/// Error from [`GriBuilder::build`](crate::GriBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("[G004] {segment} is required")]
    MissingField { segment: Segment },
}

impl BuildError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::MissingField
    }
}

/// Error while loading environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_keeps_input() {
        let err = DecodeError::MissingSeparator {
            value: "nodots".to_string(),
            segment: Segment::EntityType,
        };
        assert_eq!(err.value(), "nodots");
        assert_eq!(err.segment(), Segment::EntityType);
        assert_eq!(err.code().code(), "G001");
        assert_eq!(
            err.to_string(),
            "[G001] malformed GRI \"nodots\": missing '.' after entityType"
        );
    }

    #[test]
    fn test_error_codes() {
        let empty = DecodeError::EmptySegment {
            value: "a..c".to_string(),
            segment: Segment::EntityId,
        };
        assert_eq!(empty.code(), ErrorCode::EmptySegment);

        let reserved = ValidationError::ReservedChar {
            segment: Segment::Aspect,
            value: "a:b".to_string(),
            char: ':',
        };
        assert_eq!(reserved.code().code(), "G003");

        let missing = BuildError::MissingField {
            segment: Segment::Aspect,
        };
        assert_eq!(missing.code().code(), "G004");
        assert_eq!(missing.to_string(), "[G004] aspect is required");
    }
}

//! Error taxonomy for the window helper.
//!
//! Two classes of failure exist: configuration (a timezone identifier the
//! bundled database does not know) and validation (a malformed date string,
//! or an instant outside the formatting bounds). Both are deterministic and
//! non-retryable; errors propagate to the caller and are never logged or
//! swallowed here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeWindowError {
    /// Unknown or unavailable IANA timezone identifier.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),

    /// A date string that does not parse as `YYYY-MM-DD`, or a local day
    /// with no valid wall-clock time in the requested zone.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An instant outside the configured formatting bounds.
    #[error("instant {instant} outside allowed range [{min}, {max}]")]
    InstantOutOfRange { instant: i64, min: i64, max: i64 },
}

impl TimeWindowError {
    /// Environment misconfiguration; resolve at startup, not per call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownZone(_))
    }

    /// Bad input to a single call; the caller decides whether to abort the
    /// request or fall back to a default.
    pub fn is_validation(&self) -> bool {
        !self.is_configuration()
    }
}

pub type Result<T> = std::result::Result<T, TimeWindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_zone_is_configuration() {
        let err = TimeWindowError::UnknownZone("Mars/Olympus".to_string());
        assert!(err.is_configuration());
        assert!(!err.is_validation());
    }

    #[test]
    fn bad_date_and_bad_instant_are_validation() {
        let date = TimeWindowError::InvalidDate("2024-13-40".to_string());
        let range = TimeWindowError::InstantOutOfRange {
            instant: -1,
            min: 0,
            max: 100,
        };
        assert!(date.is_validation());
        assert!(range.is_validation());
        assert!(!range.is_configuration());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = TimeWindowError::UnknownZone("Mars/Olympus".to_string());
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}

//! Application-defined failure kinds

use crate::Failure;

/// A kind of failure defined by the application using this library.
///
/// Implement this on your own error enum to give each case a stable code
/// and a message, then turn a case into a [`Failure`] with
/// [`into_failure`](FailureKind::into_failure).
///
/// ```rust
/// use outcome_failure::{Failure, FailureKind};
///
/// enum ParseError {
///     Empty,
///     BadDigit(char),
/// }
///
/// impl FailureKind for ParseError {
///     fn code(&self) -> &'static str {
///         match self {
///             ParseError::Empty => "PARSE_EMPTY",
///             ParseError::BadDigit(_) => "PARSE_DIGIT",
///         }
///     }
///
///     fn message(&self) -> String {
///         match self {
///             ParseError::Empty => "input is empty".to_string(),
///             ParseError::BadDigit(c) => format!("'{}' is not a digit", c),
///         }
///     }
/// }
///
/// let failure = ParseError::BadDigit('x').into_failure();
/// assert_eq!(failure.to_string(), "PARSE_DIGIT: 'x' is not a digit");
/// assert!(failure.is(&ParseError::BadDigit('y')));
/// ```
pub trait FailureKind {
    /// Stable identifier of this kind; must not be empty
    fn code(&self) -> &'static str;

    /// Human-readable description; must not be empty
    fn message(&self) -> String;

    /// Build the failure described by this kind
    #[track_caller]
    fn into_failure(self) -> Failure
    where
        Self: Sized,
    {
        Failure::from_kind(&self)
    }

    /// Build the failure described by this kind, attaching its cause
    #[track_caller]
    fn caused_by(self, cause: impl Into<anyhow::Error>) -> Failure
    where
        Self: Sized,
    {
        Failure::from_kind(&self).with_cause(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum ConfigError {
        Missing,
        Malformed,
    }

    impl FailureKind for ConfigError {
        fn code(&self) -> &'static str {
            match self {
                ConfigError::Missing => "CONFIG_MISSING",
                ConfigError::Malformed => "CONFIG_MALFORMED",
            }
        }

        fn message(&self) -> String {
            match self {
                ConfigError::Missing => "configuration file not found".to_string(),
                ConfigError::Malformed => "configuration file is malformed".to_string(),
            }
        }
    }

    struct Unnamed;

    impl FailureKind for Unnamed {
        fn code(&self) -> &'static str {
            ""
        }

        fn message(&self) -> String {
            "no code".to_string()
        }
    }

    #[test]
    fn test_into_failure() {
        let failure = ConfigError::Missing.into_failure();
        assert_eq!(failure.code(), "CONFIG_MISSING");
        assert_eq!(failure.message(), "configuration file not found");
        assert!(failure.cause().is_none());
    }

    #[test]
    fn test_caused_by() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let failure = ConfigError::Missing.caused_by(io_err);
        assert_eq!(failure, ConfigError::Missing.into_failure());
        assert!(failure.cause().is_some());
    }

    #[test]
    fn test_is_kind() {
        let failure = ConfigError::Malformed.into_failure();
        assert!(failure.is(&ConfigError::Malformed));
        assert!(!failure.is(&ConfigError::Missing));
    }

    #[test]
    #[should_panic(expected = "code")]
    fn test_kind_with_empty_code_panics() {
        Unnamed.into_failure();
    }
}

//! The Failure descriptor carried by a failed outcome

use crate::{FailureKind, InvalidFailure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable description of a domain failure.
///
/// A failure carries:
/// - `code`: a short, stable identifier (e.g. `PARSE`)
/// - `message`: a human-readable description
/// - `cause`: the underlying error, if any
///
/// Two failures are equal when their code and message are equal. The cause
/// never takes part in equality or hashing.
///
/// # Example
///
/// ```rust
/// use outcome_failure::Failure;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let failure = Failure::new("CONFIG", "config.toml not found").with_cause(io);
///
/// assert_eq!(failure.to_string(), "CONFIG: config.toml not found");
/// assert!(failure.cause().is_some());
/// assert_eq!(failure, Failure::new("CONFIG", "config.toml not found"));
/// ```
#[derive(Clone)]
pub struct Failure {
    code: String,
    message: String,
    cause: Option<Arc<anyhow::Error>>,
}

impl Failure {
    /// Create a new failure with the given code and message.
    ///
    /// # Panics
    ///
    /// Panics if `code` or `message` is empty. Use [`Failure::try_new`] when
    /// the parts come from input that has not been checked.
    #[track_caller]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(failure) => failure,
            Err(err) => panic!("invalid failure: {}", err),
        }
    }

    /// Create a new failure, reporting a missing code or message as an error
    pub fn try_new(
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, InvalidFailure> {
        let code = code.into();
        let message = message.into();

        if code.is_empty() {
            return Err(InvalidFailure::MissingCode);
        }
        if message.is_empty() {
            return Err(InvalidFailure::MissingMessage { code });
        }

        Ok(Self {
            code,
            message,
            cause: None,
        })
    }

    /// Create a failure from an application-defined kind
    #[track_caller]
    pub fn from_kind<K: FailureKind + ?Sized>(kind: &K) -> Self {
        Self::new(kind.code(), kind.message())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the failure code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the underlying cause (if any)
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_deref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Attach the underlying cause.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if a cause was already attached.
    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.cause.is_none(), "failure cause already set");
        self.cause = Some(Arc::new(cause.into()));
        self
    }

    /// Check whether `kind` describes this failure
    pub fn is<K: FailureKind + ?Sized>(&self, kind: &K) -> bool {
        self.code == kind.code()
    }
}

// =============================================================================
// Equality - code and message only
// =============================================================================

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.message.hash(state);
    }
}

// =============================================================================
// Display - "<code>: <message>"
// =============================================================================

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Failure {}", self.code)?;
        writeln!(f)?;
        writeln!(f, "    Message: {}", self.message)?;

        if let Some(cause) = &self.cause {
            writeln!(f)?;
            writeln!(f, "    Cause: {:?}", cause)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let cause = self.cause.as_deref()?;
        let source: &(dyn std::error::Error + 'static) = &**cause;
        Some(source)
    }
}

// =============================================================================
// Serde - the cause travels as its display string and is not read back
// =============================================================================

#[derive(Serialize)]
struct FailureRepr<'a> {
    code: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

#[derive(Deserialize)]
struct FailureParts {
    code: String,
    message: String,
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FailureRepr {
            code: &self.code,
            message: &self.message,
            cause: self.cause.as_ref().map(|c| format!("{:#}", c)),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Failure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = FailureParts::deserialize(deserializer)?;
        Failure::try_new(parts.code, parts.message).map_err(serde::de::Error::custom)
    }
}

//! # Result
//!
//! The success-or-failure container. Every combinator consumes the Result
//! and returns a new one; nothing is mutated in place.

use outcome_failure::Failure;
use std::fmt;

/// Exactly one of a success value, a success without content, or a
/// [`Failure`].
///
/// Reading the value of a failed or content-less Result is a programming
/// error: [`unwrap`](Result::unwrap) and
/// [`unwrap_failure`](Result::unwrap_failure) panic on misuse. Guard them
/// with [`is_success`](Result::is_success) / [`is_failure`](Result::is_failure),
/// or borrow with [`value`](Result::value) / [`as_failure`](Result::as_failure).
#[must_use = "this `Result` may be a failure, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Result<T> {
    /// Success carrying a value
    Success(T),

    /// Success carrying no content
    Empty,

    /// Failure carrying what went wrong
    Failed(Failure),
}

impl<T> Result<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a success wrapping `value`
    pub fn success(value: T) -> Self {
        Result::Success(value)
    }

    /// Create a success without content
    pub fn empty() -> Self {
        Result::Empty
    }

    /// Create a failure wrapping `failure`
    pub fn failure(failure: Failure) -> Self {
        Result::Failed(failure)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if this is a success, with or without content
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Check if this is a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Result::Failed(_))
    }

    /// Check if this is a success without content
    pub fn is_empty(&self) -> bool {
        matches!(self, Result::Empty)
    }

    /// Borrow the success value (if any)
    pub fn value(&self) -> Option<&T> {
        match self {
            Result::Success(value) => Some(value),
            Result::Empty | Result::Failed(_) => None,
        }
    }

    /// Borrow the failure (if any)
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Result::Failed(failure) => Some(failure),
            Result::Success(_) | Result::Empty => None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure or a success without content.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Result::Success(value) => value,
            Result::Empty => panic!("called `Result::unwrap()` on a success without content"),
            Result::Failed(failure) => {
                panic!("called `Result::unwrap()` on a failure: {}", failure)
            }
        }
    }

    /// Return the failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn unwrap_failure(self) -> Failure {
        match self {
            Result::Failed(failure) => failure,
            Result::Success(_) | Result::Empty => {
                panic!("called `Result::unwrap_failure()` on a success")
            }
        }
    }

    /// Convert into a std result; a success without content becomes `Ok(None)`
    pub fn into_std(self) -> std::result::Result<Option<T>, Failure> {
        match self {
            Result::Success(value) => Ok(Some(value)),
            Result::Empty => Ok(None),
            Result::Failed(failure) => Err(failure),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transform the success value with `f`.
    ///
    /// A failure is carried over unchanged and `f` is not called. A success
    /// without content stays empty, as there is no value to give `f`.
    pub fn map<R, F>(self, f: F) -> Result<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Result::Success(value) => Result::Success(f(value)),
            Result::Empty => Result::Empty,
            Result::Failed(failure) => Result::Failed(failure),
        }
    }

    /// Chain another fallible step; its Result is returned as is.
    ///
    /// A failure is carried over unchanged and `f` is not called. A success
    /// without content stays empty.
    pub fn flat_map<R, F>(self, f: F) -> Result<R>
    where
        F: FnOnce(T) -> Result<R>,
    {
        match self {
            Result::Success(value) => f(value),
            Result::Empty => Result::Empty,
            Result::Failed(failure) => Result::Failed(failure),
        }
    }

    /// Recover from a failure by computing a fallback value from it.
    ///
    /// The returned Result is always a success.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Result::Failed(failure) => {
                tracing::trace!(code = failure.code(), "recovering from failure");
                Result::Success(f(failure))
            }
            other => other,
        }
    }

    /// Run `f` on the success value for its side effect, then return self.
    ///
    /// `f` is not called on a failure or a success without content.
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Result::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Fail-fast merge of named Results; see [`join`](crate::join::join)
    #[track_caller]
    pub fn join<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Result<V>)>,
        K: fmt::Debug,
        T: FromIterator<(K, V)>,
    {
        crate::join::join(entries)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Failure> for Result<T> {
    fn from(failure: Failure) -> Self {
        Result::Failed(failure)
    }
}

impl<T> From<std::result::Result<T, Failure>> for Result<T> {
    fn from(result: std::result::Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Result::Success(value),
            Err(failure) => Result::Failed(failure),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Success(value) => write!(f, "Success({})!!!", value),
            Result::Empty => write!(f, "Success!!!"),
            Result::Failed(failure) => write!(f, "Failure({})", failure),
        }
    }
}

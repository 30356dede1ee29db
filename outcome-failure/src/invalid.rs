//! Errors raised while building a Failure

use thiserror::Error;

/// A failure could not be built from the given parts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFailure {
    #[error("failure code must not be empty")]
    MissingCode,

    #[error("failure message must not be empty (code {code})")]
    MissingMessage { code: String },
}

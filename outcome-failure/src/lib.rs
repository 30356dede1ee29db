//! # outcome-failure
//!
//! Domain failures for outcome: what went wrong, described as a value.
//!
//! ## Design Philosophy
//!
//! - **Failure**: Know what failed (`code`) and why (`message`)
//! - **FailureKind**: Let each application define its own kinds of failure
//! - **Cause**: Keep the underlying error without leaking raw types into equality
//!
//! ## Usage
//!
//! ```rust
//! use outcome_failure::Failure;
//!
//! fn parse_port(raw: &str) -> Result<u16, Failure> {
//!     raw.parse()
//!         .map_err(|e| Failure::new("PORT", format!("'{}' is not a port", raw)).with_cause(e))
//! }
//!
//! let failure = parse_port("http").unwrap_err();
//! assert_eq!(failure.code(), "PORT");
//! assert!(failure.cause().is_some());
//! ```
//!
//! ## Principles
//!
//! - A failure always has a non-empty code and message
//! - Building one with either missing is a programming error and panics
//!   (`try_new` reports it as a value instead)
//! - Equality looks at code and message, never at the cause

mod failure;
mod invalid;
mod kind;

pub use failure::Failure;
pub use invalid::InvalidFailure;
pub use kind::FailureKind;

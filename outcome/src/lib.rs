//! # Outcome
//!
//! A success-or-failure container for pipelines that can fail.
//!
//! ## Core Concepts
//! - **Failure**: Domain error with a code, a message and an optional cause
//! - **Result**: Exactly one of a value, a success without content, or a Failure
//! - **Combinators**: `map`, `flat_map`, `on_failure`, `apply` build new Results
//! - **Join**: Fail-fast merge of named Results into one
//! - **Pair**: Plain two-element tuple value
//!
//! ```rust
//! use outcome::Result;
//!
//! let length = Result::success("x".to_string())
//!     .map(|s| s + "y")
//!     .flat_map(|s| Result::success(s.len()))
//!     .unwrap();
//!
//! assert_eq!(length, 2);
//! ```

pub mod join;
pub mod pair;
pub mod result;

pub use join::join;
pub use outcome_failure::{Failure, FailureKind, InvalidFailure};
pub use pair::Pair;
pub use result::Result;

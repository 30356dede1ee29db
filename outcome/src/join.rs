//! # Join
//!
//! Fail-fast merge of named Results.

use crate::Result;
use std::fmt;

/// Merge named Results into one.
///
/// Returns the first failure in iteration order if any entry failed.
/// Otherwise returns a success holding every `(name, value)` pair, collected
/// into whatever `C` the caller asks for. Failures are never accumulated:
/// exactly one is reported. Use an ordered input (`BTreeMap`, `Vec`) when
/// the reported failure must be deterministic.
///
/// Values of different types can be joined through a common type such as
/// an enum or `serde_json::Value`.
///
/// ```rust
/// use outcome::{join, Failure, Result};
/// use std::collections::BTreeMap;
///
/// let mut entries = BTreeMap::new();
/// entries.insert("a", Result::success(1));
/// entries.insert("b", Result::success(2));
///
/// let joined: Result<BTreeMap<_, _>> = join(entries);
/// assert_eq!(joined.unwrap(), BTreeMap::from([("a", 1), ("b", 2)]));
///
/// let failed: Result<Vec<(&str, i32)>> = join(vec![
///     ("a", Result::success(1)),
///     ("b", Result::failure(Failure::new("B", "b is broken"))),
/// ]);
/// assert_eq!(failed.unwrap_failure().code(), "B");
/// ```
///
/// # Panics
///
/// Panics if no entry failed but some entry is a success without content,
/// as it has no value to join.
#[track_caller]
pub fn join<K, V, I, C>(entries: I) -> Result<C>
where
    I: IntoIterator<Item = (K, Result<V>)>,
    K: fmt::Debug,
    C: FromIterator<(K, V)>,
{
    let mut values = Vec::new();
    let mut empty = None;

    for (name, result) in entries {
        match result {
            Result::Success(value) => values.push((name, value)),
            Result::Failed(failure) => {
                tracing::debug!(entry = ?name, code = failure.code(), "join short-circuited on failure");
                return Result::Failed(failure);
            }
            Result::Empty => {
                if empty.is_none() {
                    empty = Some(name);
                }
            }
        }
    }

    if let Some(name) = empty {
        panic!("cannot join entry {:?}: success without content", name);
    }

    Result::Success(values.into_iter().collect())
}

//! Two-element tuple value

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable ordered pair of two independently typed values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair<A, B> {
    one: A,
    two: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(one: A, two: B) -> Self {
        Self { one, two }
    }

    pub fn one(&self) -> &A {
        &self.one
    }

    pub fn two(&self) -> &B {
        &self.two
    }

    pub fn into_inner(self) -> (A, B) {
        (self.one, self.two)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((one, two): (A, B)) -> Self {
        Self::new(one, two)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair{{one={}, two={}}}", self.one, self.two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let pair = Pair::new("left", 2);
        assert_eq!(pair.one(), &"left");
        assert_eq!(pair.two(), &2);
        assert_eq!(pair.into_inner(), ("left", 2));
    }

    #[test]
    fn test_equality_and_hash() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Pair::new("a", 1)));
        assert!(!seen.insert(Pair::from(("a", 1))));
        assert!(seen.insert(Pair::new("a", 2)));
        assert_ne!(Pair::new("a", 1), Pair::new("b", 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new("x", 42).to_string(), "Pair{one=x, two=42}");
    }

    #[test]
    fn test_serde() {
        let pair = Pair::new("key".to_string(), 7);
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({ "one": "key", "two": 7 }));

        let back: Pair<String, i32> = serde_json::from_value(json).unwrap();
        assert_eq!(back, pair);
    }
}

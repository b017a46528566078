//! Tagged results for computations that can degenerate on sparse input

use serde::{Deserialize, Serialize};

/// Why a vector-space computation produced no usable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degeneracy {
    /// Every term was filtered out (empty text, or stopwords only)
    EmptyVocabulary,
    /// A document has no weight on any retained term
    ZeroVector,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Computed(T),
    Degenerate(Degeneracy),
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => Outcome::Computed(f(value)),
            Outcome::Degenerate(reason) => Outcome::Degenerate(reason),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => f(value),
            Outcome::Degenerate(reason) => Outcome::Degenerate(reason),
        }
    }

    /// The computed value, or `fallback` for a degenerate outcome
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Computed(value) => value,
            Outcome::Degenerate(_) => fallback,
        }
    }
}

impl<T: Default> Outcome<T> {
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}

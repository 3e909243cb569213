//! Filtering of entity collections by optional predicates
//!
//! Each entity type declares a filter struct whose fields are all optional.
//! A field left unset is ignored (it does not mean "match empty"); every
//! field that is set must match for an entity to be kept.

/// A set of optional predicates over `T`
pub trait Filter<T>: Send + Sync {
    /// Whether `entity` satisfies every supplied predicate
    fn matches(&self, entity: &T) -> bool;

    /// True when no predicate was supplied
    fn is_empty(&self) -> bool;
}

/// Applies a [`Filter`] to a collection, preserving input order
pub struct FilterEngine;

impl FilterEngine {
    pub fn apply<T, F>(data: Vec<T>, filter: &F) -> Vec<T>
    where
        F: Filter<T> + ?Sized,
    {
        if filter.is_empty() {
            return data;
        }

        data.into_iter().filter(|e| filter.matches(e)).collect()
    }
}

/// Case-sensitive exact match; an unset predicate passes
pub fn equals(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|e| e == actual)
}

/// Exact match against an optional field; an unset field never matches a supplied literal
pub fn equals_optional(expected: Option<&str>, actual: Option<&str>) -> bool {
    expected.is_none_or(|e| actual == Some(e))
}

/// Case-insensitive substring match; an unset predicate passes
pub fn contains_ignore_case(needle: Option<&str>, haystack: &str) -> bool {
    needle.is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

/// Exact match against any element of a nested collection
pub fn any_equals<'a, I>(expected: Option<&str>, values: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    expected.is_none_or(|e| values.into_iter().any(|v| v == e))
}

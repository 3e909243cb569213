//! Partial updates (PATCH)
//!
//! Update payloads model every field as absent or present. Nullable fields
//! use `Option<Option<T>>`:
//!
//! - `None`: the field was omitted, keep the stored value
//! - `Some(None)`: the field was sent as `null`, clear it
//! - `Some(Some(v))`: replace with `v`
//!
//! Use [`nullable`] as the serde `deserialize_with` for such fields so that a
//! JSON `null` is distinguishable from a missing key.

use crate::core::clock::Clock;
use crate::core::entity::Resource;
use crate::core::error::ServiceResult;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Replace `target` when a value was provided
pub fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Replace or clear a nullable `target` when the field was provided
pub fn set_nullable<T>(target: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Deserialize a present field (including `null`) as `Some(..)`
///
/// Combine with `#[serde(default)]` so a missing key stays `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Produces the next snapshot of an entity from a sparse update
#[derive(Clone)]
pub struct PartialUpdateMerger {
    clock: Arc<dyn Clock>,
}

impl PartialUpdateMerger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Merge `update` onto `original` and stamp the result
    ///
    /// The modification timestamp is refreshed whatever fields changed.
    pub fn merge<T: Resource>(
        &self,
        original: &T,
        update: T::Update,
        context: &T::Context,
    ) -> ServiceResult<T> {
        let mut next = original.merge(update, context)?;
        next.touch(self.clock.now());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Sparse {
        #[serde(default)]
        name: Option<String>,
        #[serde(default, deserialize_with = "nullable")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_missing_key_is_absent() {
        let sparse: Sparse = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse.name, None);
        assert_eq!(sparse.note, None);
    }

    #[test]
    fn test_null_is_present_and_empty() {
        let sparse: Sparse = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(sparse.note, Some(None));
    }

    #[test]
    fn test_value_is_present() {
        let sparse: Sparse = serde_json::from_str(r#"{"note": "hi", "name": "x"}"#).unwrap();
        assert_eq!(sparse.note, Some(Some("hi".to_string())));
        assert_eq!(sparse.name, Some("x".to_string()));
    }

    #[test]
    fn test_set_and_set_nullable() {
        let mut name = "old".to_string();
        set(&mut name, None);
        assert_eq!(name, "old");
        set(&mut name, Some("new".to_string()));
        assert_eq!(name, "new");

        let mut note = Some("keep".to_string());
        set_nullable(&mut note, None);
        assert_eq!(note.as_deref(), Some("keep"));
        set_nullable(&mut note, Some(None));
        assert_eq!(note, None);
        set_nullable(&mut note, Some(Some("back".to_string())));
        assert_eq!(note.as_deref(), Some("back"));
    }
}

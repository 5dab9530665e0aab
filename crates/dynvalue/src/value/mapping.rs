//! Mappings: insertion-ordered entries with structural key lookup
//!
//! Keys may be any value, including containers, so lookup is a linear scan
//! comparing keys with structural equality rather than a hash lookup.

use crate::error::{Result, RuntimeError};
use crate::ops::equals;

use super::{MappingRef, Value};

/// Ordered key/value pairs. No two keys compare structurally equal.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping by inserting each pair in order.
    ///
    /// Later pairs whose key equals an earlier key overwrite its value
    /// in place.
    pub fn from_entries(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut mapping = Self::new();
        for (key, value) in entries {
            mapping.set(key, value);
        }
        mapping
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry whose key equals `key`
    pub fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| equals(k, key))
    }

    /// Whether some key equals `key`
    pub fn contains(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no key equals `key`.
    pub fn get(&self, key: &Value) -> Result<Value> {
        self.position(key)
            .map(|idx| self.entries[idx].1.clone())
            .ok_or_else(|| RuntimeError::key_not_found(key))
    }

    /// Value stored under `key`, or `default` when missing
    pub fn get_or(&self, key: &Value, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    /// Update the entry for `key` in place, or append a new entry.
    pub fn set(&mut self, key: Value, value: Value) {
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Overwrite the value at a known entry position
    pub(crate) fn set_at(&mut self, idx: usize, value: Value) {
        self.entries[idx].1 = value;
    }

    /// Remove the entry at a known position, `None` if out of bounds
    pub(crate) fn remove_at(&mut self, idx: usize) -> Option<Value> {
        (idx < self.entries.len()).then(|| self.entries.remove(idx).1)
    }

    /// Append an entry whose key is known to be absent
    pub(crate) fn push_entry(&mut self, key: Value, value: Value) {
        self.entries.push((key, value));
    }

    /// Remove the entry for `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no key equals `key`.
    pub fn remove(&mut self, key: &Value) -> Result<Value> {
        let idx = self
            .position(key)
            .ok_or_else(|| RuntimeError::key_not_found(key))?;
        Ok(self.entries.remove(idx).1)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<Value> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Handle Operations
// ═══════════════════════════════════════════════════════════════════

impl MappingRef {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether some key equals `key`
    pub fn contains(&self, key: &Value) -> bool {
        self.read().contains(key)
    }

    /// Value stored under `key`
    pub fn get(&self, key: &Value) -> Result<Value> {
        self.read().get(key)
    }

    /// Value stored under `key`, or `default` when missing
    pub fn get_or(&self, key: &Value, default: Value) -> Value {
        self.read().get_or(key, default)
    }

    /// Insert or update; visible through every alias.
    ///
    /// The key scan runs under a read lock so comparing against keys that
    /// themselves hold containers never contends with the write.
    pub fn set(&self, key: Value, value: Value) {
        let found = self.read().position(&key);
        let mut mapping = self.write();
        match found {
            Some(idx) => mapping.set_at(idx, value),
            None => mapping.push_entry(key, value),
        }
    }

    /// Remove the entry for `key`, returning its value.
    ///
    /// Like [`MappingRef::set`], the key scan runs under a read lock, so a
    /// key that holds this mapping can be compared without blocking.
    pub fn remove(&self, key: &Value) -> Result<Value> {
        let found = self.read().position(key);
        let removed = found.and_then(|idx| self.write().remove_at(idx));
        removed.ok_or_else(|| RuntimeError::key_not_found(key))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<Value> {
        self.read().keys()
    }

    /// Values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.read().values()
    }

    /// Copy of the entries in insertion order
    pub fn snapshot(&self) -> Vec<(Value, Value)> {
        self.read().entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_updates_structurally_equal_key() {
        let mut mapping = Mapping::new();
        mapping.set(Value::Bool(true), Value::Float(3.14));
        mapping.set(Value::Bool(true), Value::Float(3.14159));
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get(&Value::Bool(true)).unwrap().as_float().unwrap(),
            3.14159
        );
    }

    #[test]
    fn test_container_keys() {
        let mut mapping = Mapping::new();
        let key = Value::tuple(vec![Value::Int(1), Value::text("a")]);
        mapping.set(key, Value::Int(1));
        let lookup = Value::tuple(vec![Value::Float(1.0), Value::text("a")]);
        assert!(mapping.contains(&lookup));
        assert_eq!(mapping.get(&lookup).unwrap().as_int().unwrap(), 1);
    }

    #[test]
    fn test_missing_key() {
        let mut mapping = Mapping::from_entries(vec![(Value::text("a"), Value::Int(1))]);
        assert_eq!(
            mapping.get(&Value::text("b")).unwrap_err(),
            RuntimeError::KeyNotFound { key: "b".into() }
        );
        assert!(mapping.remove(&Value::text("b")).is_err());
        assert_eq!(
            mapping
                .get_or(&Value::text("b"), Value::Int(0))
                .as_int()
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut mapping = Mapping::from_entries(vec![
            (Value::text("a"), Value::Int(1)),
            (Value::text("b"), Value::Int(2)),
            (Value::text("c"), Value::Int(3)),
        ]);
        assert_eq!(mapping.remove(&Value::text("b")).unwrap().as_int().unwrap(), 2);
        let keys: Vec<String> = mapping.keys().iter().map(|k| k.display_text()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_handle_remove_with_self_referencing_key() {
        let map = Value::mapping(vec![(Value::mapping(vec![]), Value::Int(1))]);
        let handle = map.as_mapping().unwrap();
        assert!(matches!(
            handle.remove(&map),
            Err(RuntimeError::KeyNotFound { .. })
        ));
        let wrapped = Value::tuple(vec![map.clone()]);
        assert!(handle.remove(&wrapped).is_err());
        assert_eq!(handle.remove(&Value::mapping(vec![])).unwrap().as_int().unwrap(), 1);
        assert!(handle.is_empty());
    }

    #[test]
    fn test_from_entries_dedupes() {
        let mapping = Mapping::from_entries(vec![
            (Value::Int(1), Value::text("x")),
            (Value::Float(1.0), Value::text("y")),
        ]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.values()[0].display_text(), "y");
    }
}

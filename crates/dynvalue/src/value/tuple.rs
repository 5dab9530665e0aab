//! Tuples: fixed-length sequences

use crate::error::Result;

use super::list::normalize_index;
use super::Value;

/// An ordered sequence whose length is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct Tuple {
    items: Box<[Value]>,
}

impl Tuple {
    /// Build a tuple from its elements
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tuple has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at `index` (negative counts from the end).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the normalized index is out of bounds.
    pub fn get(&self, index: i64) -> Result<Value> {
        let idx = normalize_index(index, self.items.len())?;
        Ok(self.items[idx].clone())
    }

    /// Borrow the elements in order
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Copy of the elements
    pub fn snapshot(&self) -> Vec<Value> {
        self.items.to_vec()
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuntimeError;

    #[test]
    fn test_tuple_get() {
        let tuple = Tuple::new(vec![Value::Int(65), Value::Int(97)]);
        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple.get(0).unwrap().as_int().unwrap(), 65);
        assert_eq!(tuple.get(-1).unwrap().as_int().unwrap(), 97);
        assert_eq!(
            tuple.get(2).unwrap_err(),
            RuntimeError::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_tuple_slots_alias_containers() {
        let inner = Value::list(vec![]);
        let tuple = Tuple::new(vec![inner.clone()]);
        inner.as_list().unwrap().append(Value::Int(1));
        let slot = tuple.get(0).unwrap();
        assert_eq!(slot.as_list().unwrap().len(), 1);
    }
}

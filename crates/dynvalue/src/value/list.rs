//! Lists: growable sequences with negative indexing and slicing

use crate::error::{Result, RuntimeError};

use super::{ListRef, Value};

/// An ordered, growable sequence of values.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Value>,
}

/// Map a possibly-negative index onto `[0, len)`.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if the normalized index is out of bounds.
pub(crate) fn normalize_index(index: i64, len: usize) -> Result<usize> {
    let size = len as i64;
    let normalized = if index < 0 { index + size } else { index };
    if normalized < 0 || normalized >= size {
        return Err(RuntimeError::IndexOutOfRange { index, len });
    }
    Ok(normalized as usize)
}

/// Negative-adjust a slice bound, then clamp it into `[0, len]`.
fn clamp_bound(bound: i64, len: i64) -> i64 {
    let adjusted = if bound < 0 { bound + len } else { bound };
    adjusted.clamp(0, len)
}

impl List {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements in order
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Get the element at `index` (negative counts from the end).
    pub fn get(&self, index: i64) -> Result<Value> {
        let idx = normalize_index(index, self.items.len())?;
        Ok(self.items[idx].clone())
    }

    /// Replace the element at `index` (negative counts from the end).
    pub fn set(&mut self, index: i64, value: Value) -> Result<()> {
        let idx = normalize_index(index, self.items.len())?;
        self.items[idx] = value;
        Ok(())
    }

    /// Append an element at the end
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` on an empty list.
    pub fn pop(&mut self) -> Result<Value> {
        self.items
            .pop()
            .ok_or(RuntimeError::IndexOutOfRange { index: -1, len: 0 })
    }

    /// Insert before `index`. Out-of-range positions clamp to the ends.
    pub fn insert(&mut self, index: i64, value: Value) {
        let len = self.items.len() as i64;
        let at = clamp_bound(index, len) as usize;
        self.items.insert(at, value);
    }

    /// Append every element of `values`
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.items.extend(values);
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copy of the current elements
    pub fn snapshot(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Collect `start..stop` by `step` into a new list.
    ///
    /// Both bounds are negative-adjusted then clamped into `[0, len]`.
    /// A positive step walks forward while `i < stop`; a negative step
    /// walks backward while `i > stop`, starting no later than the last
    /// element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if `step` is zero.
    pub fn slice(&self, start: i64, stop: i64, step: i64) -> Result<List> {
        if step == 0 {
            return Err(RuntimeError::InvalidStep);
        }
        let len = self.items.len() as i64;
        Ok(self.collect_slice(clamp_bound(start, len), clamp_bound(stop, len), step))
    }

    /// Slice with omitted bounds filled in from the step direction.
    ///
    /// A missing start is the first element (or the last, for a negative
    /// step); a missing stop is one past the end (or before the first
    /// element, for a negative step). `step` defaults to 1.
    pub fn slice_opt(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<List> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(RuntimeError::InvalidStep);
        }
        let len = self.items.len() as i64;
        let start = match start {
            Some(s) => clamp_bound(s, len),
            None if step > 0 => 0,
            None => len - 1,
        };
        let stop = match stop {
            Some(s) => clamp_bound(s, len),
            None if step > 0 => len,
            None => -1,
        };
        Ok(self.collect_slice(start, stop, step))
    }

    fn collect_slice(&self, start: i64, stop: i64, step: i64) -> List {
        let mut out = Vec::new();
        if step > 0 {
            let mut i = start;
            while i < stop {
                out.push(self.items[i as usize].clone());
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        } else {
            let mut i = start.min(self.items.len() as i64 - 1);
            while i > stop {
                out.push(self.items[i as usize].clone());
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        }
        List::from(out)
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Handle Operations (lock held only for the duration of each call)
// ═══════════════════════════════════════════════════════════════════

impl ListRef {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the list has no elements
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get the element at `index` (negative counts from the end)
    pub fn get(&self, index: i64) -> Result<Value> {
        self.read().get(index)
    }

    /// Replace the element at `index` (negative counts from the end)
    pub fn set(&self, index: i64, value: Value) -> Result<()> {
        self.write().set(index, value)
    }

    /// Append an element; visible through every alias
    pub fn append(&self, value: Value) {
        self.write().push(value);
    }

    /// Remove and return the last element
    pub fn pop(&self) -> Result<Value> {
        self.write().pop()
    }

    /// Insert before `index`
    pub fn insert(&self, index: i64, value: Value) {
        self.write().insert(index, value);
    }

    /// Append every element of `values`
    pub fn extend(&self, values: Vec<Value>) {
        self.write().extend(values);
    }

    /// Remove every element
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Slice into a new, unaliased list value
    pub fn slice(&self, start: i64, stop: i64, step: i64) -> Result<Value> {
        let list = self.read().slice(start, stop, step)?;
        Ok(Value::List(ListRef::new(list)))
    }

    /// Copy of the current elements
    pub fn snapshot(&self) -> Vec<Value> {
        self.read().snapshot()
    }
}

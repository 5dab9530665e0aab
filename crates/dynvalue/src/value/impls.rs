//! Value trait implementations: constructors, predicates, accessors, From traits, PartialEq

use std::sync::Arc;

use crate::error::{Result, RuntimeError};

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a text value
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(Arc::from(s.as_ref()))
    }

    /// Create a list value in a new shared cell
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(ListRef::new(List::from(items)))
    }

    /// Create a tuple value
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(TupleRef::new(Tuple::new(items)))
    }

    /// Create a mapping value by inserting `entries` in order
    pub fn mapping(entries: Vec<(Value, Value)>) -> Self {
        Value::Mapping(MappingRef::new(Mapping::from_entries(entries)))
    }

    /// Create an object value with no fields
    pub fn object(type_tag: impl Into<String>) -> Self {
        Value::Object(ObjectRef::new(Object::new(type_tag)))
    }

    /// Wrap a built object in a new shared cell
    pub fn from_object(object: Object) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is `None`
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_int() || self.is_float()
    }

    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is text
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if value is a tuple
    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Check if value is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Whether both values are handles to the same shared cell.
    ///
    /// Always false for scalars.
    pub fn is_alias_of(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.ptr_eq(b),
            (Value::Mapping(a), Value::Mapping(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// The type tag of an object value, `None` for every other kind
    pub fn object_tag(&self) -> Option<String> {
        match self {
            Value::Object(o) => Some(o.type_tag()),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Typed Accessors (fail with TypeMismatch on the wrong kind)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract an integer
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(RuntimeError::type_mismatch("int", other)),
        }
    }

    /// Extract a float, widening integers
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            other => Err(RuntimeError::type_mismatch("float", other)),
        }
    }

    /// Extract an integer for use as an index, code point, or bound.
    ///
    /// Arithmetic always yields floats, so an integral finite float is
    /// accepted alongside an integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for other kinds and for floats with a
    /// fractional part or outside the `i64` range.
    pub fn as_index(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Float(n)
                if n.is_finite()
                    && n.fract() == 0.0
                    && *n >= i64::MIN as f64
                    && *n < i64::MAX as f64 =>
            {
                Ok(*n as i64)
            }
            other => Err(RuntimeError::type_mismatch("int", other)),
        }
    }

    /// Extract a boolean
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(RuntimeError::type_mismatch("bool", other)),
        }
    }

    /// Extract a text slice
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(RuntimeError::type_mismatch("str", other)),
        }
    }

    /// Extract the list handle
    pub fn as_list(&self) -> Result<&ListRef> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(RuntimeError::type_mismatch("list", other)),
        }
    }

    /// Extract the tuple handle
    pub fn as_tuple(&self) -> Result<&TupleRef> {
        match self {
            Value::Tuple(t) => Ok(t),
            other => Err(RuntimeError::type_mismatch("tuple", other)),
        }
    }

    /// Extract the mapping handle
    pub fn as_mapping(&self) -> Result<&MappingRef> {
        match self {
            Value::Mapping(m) => Ok(m),
            other => Err(RuntimeError::type_mismatch("dict", other)),
        }
    }

    /// Extract the object handle
    pub fn as_object(&self) -> Result<&ObjectRef> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(RuntimeError::type_mismatch("object", other)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Structural equality with the source language's rules.
///
/// Not reflexive for every kind: `None` and objects never compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::equals(self, other)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Absent
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Absent, Into::into)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::from_object(object)
    }
}

//! Ad-hoc object instances

use indexmap::IndexMap;

use crate::error::{Result, RuntimeError};

use super::{ObjectRef, Value};

/// An object instance: a type tag plus named fields.
///
/// There is no type hierarchy. A "subclass" constructor builds the object
/// under its own tag and calls the "base" field initializer on it before
/// adding its own fields. The tag alone selects behaviors in the registry.
///
/// Uses IndexMap to keep fields in assignment order.
#[derive(Debug, Clone, Default)]
pub struct Object {
    /// The object's type tag (e.g. "Point", "Dog")
    pub type_tag: String,

    /// Fields in assignment order
    pub fields: IndexMap<String, Value>,
}

impl Object {
    /// Create an object with no fields
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field, creating it if needed
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}

impl ObjectRef {
    /// The object's type tag
    pub fn type_tag(&self) -> String {
        self.read().type_tag.clone()
    }

    /// Read a field.
    ///
    /// # Errors
    ///
    /// Returns `AttributeNotFound` if the field was never set.
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        let object = self.read();
        object
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::AttributeNotFound {
                type_tag: object.type_tag.clone(),
                name: name.to_string(),
            })
    }

    /// Write a field; visible through every alias
    pub fn set_attr(&self, name: impl Into<String>, value: Value) {
        self.write().set(name, value);
    }

    /// Whether the field has been set
    pub fn has_attr(&self, name: &str) -> bool {
        self.read().fields.contains_key(name)
    }

    /// Field names in assignment order
    pub fn field_names(&self) -> Vec<String> {
        self.read().fields.keys().cloned().collect()
    }
}

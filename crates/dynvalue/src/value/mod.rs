//! Value representation for runtime values

mod display;
mod impls;
pub(crate) mod list;
mod mapping;
mod object;
mod refs;
mod tuple;

pub use display::format_float;
pub use list::List;
pub use mapping::Mapping;
pub use object::Object;
pub use refs::{ListRef, MappingRef, ObjectRef, TupleRef};
pub use tuple::Tuple;

use std::sync::Arc;

/// Runtime value of the dynamic source language.
///
/// Values are organized into two tiers:
/// - Tier 1: Scalars held by value (copying yields an independent value)
/// - Tier 2: Shared handles (copying yields an alias to the same cell)
///
/// Aliasing of tier 2 values is how the source language's reference
/// semantics for mutable containers is reproduced: appending through one
/// clone of a list is visible through every other clone.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// The absent value (`None`)
    Absent,

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean: `True` or `False`
    Bool(bool),

    /// Immutable text
    Text(Arc<str>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Shared Handles
    // ═══════════════════════════════════════════════════════════════════
    /// Growable, mutable sequence
    List(ListRef),

    /// Fixed-length sequence
    Tuple(TupleRef),

    /// Insertion-ordered key/value pairs with structural key lookup
    Mapping(MappingRef),

    /// Ad-hoc object instance: a type tag plus named fields
    Object(ObjectRef),
}

/// The closed set of value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `None`
    Absent,
    /// Integer
    Int,
    /// Float
    Float,
    /// Boolean
    Bool,
    /// Text
    Text,
    /// List
    List,
    /// Tuple
    Tuple,
    /// Mapping
    Mapping,
    /// Object
    Object,
}

impl Kind {
    /// The reflection name of this kind.
    ///
    /// One of `none`, `int`, `float`, `bool`, `str`, `list`, `tuple`,
    /// `dict`, `object`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Absent => "none",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Text => "str",
            Kind::List => "list",
            Kind::Tuple => "tuple",
            Kind::Mapping => "dict",
            Kind::Object => "object",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Text(_) => Kind::Text,
            Value::List(_) => Kind::List,
            Value::Tuple(_) => Kind::Tuple,
            Value::Mapping(_) => Kind::Mapping,
            Value::Object(_) => Kind::Object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Absent.kind().name(), "none");
        assert_eq!(Value::Int(1).kind().name(), "int");
        assert_eq!(Value::Float(1.0).kind().name(), "float");
        assert_eq!(Value::Bool(true).kind().name(), "bool");
        assert_eq!(Value::text("a").kind().name(), "str");
        assert_eq!(Value::list(vec![]).kind().name(), "list");
        assert_eq!(Value::tuple(vec![]).kind().name(), "tuple");
        assert_eq!(Value::mapping(vec![]).kind().name(), "dict");
        assert_eq!(Value::object("Point").kind().name(), "object");
    }

    #[test]
    fn test_value_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}

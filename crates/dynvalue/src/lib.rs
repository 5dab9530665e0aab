//! # dynvalue
//!
//! Runtime value substrate for programs translated from a dynamically
//! typed, Python-like language.
//!
//! Translated code manipulates a single [`Value`] type whose semantics
//! reproduce the source language: reference-shared mutable containers,
//! structural equality, numeric widening, negative indexing and slicing,
//! and text conversion that dispatches to per-type behaviors at runtime.
//!
//! ## Architecture
//!
//! - **Values**: scalars held by value, containers and objects held through
//!   shared handles so that copies alias
//! - **Operators**: arithmetic, comparison, and logic over `Value`
//! - **Dispatch**: a registry of behaviors keyed by object type tag
//! - **Prelude**: builtins such as `length`, `iterate`, and `render_line`
//! - **Range**: lazy integer progressions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod range;
pub mod value;

// Re-export main types
pub use context::RuntimeContext;
pub use dispatch::{Behavior, BehaviorPtr, MethodKey, Registry, REPR, STR};
pub use error::{Result, RuntimeError};
pub use prelude::{
    append, chr, contains, get_item, iterate, join, kind_of, length, render_line, set_item, slice,
};
pub use range::{Range, RangeIter, Termination};
pub use value::{
    format_float, Kind, List, ListRef, Mapping, MappingRef, Object, ObjectRef, Tuple, TupleRef,
    Value,
};

/// dynvalue version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

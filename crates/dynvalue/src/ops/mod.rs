//! Operator layer: arithmetic, comparison, equality, and truthiness
//!
//! Every operator is a free function over [`Value`](crate::Value) encoding
//! the source language's coercion rules. Arithmetic widens numeric operands
//! to floating point; text participates only where the language allows it.

pub mod arith;
pub mod compare;
pub mod logic;

pub use arith::{add, div, floor_div, modulo, mul, neg, pow, sub};
pub use compare::{eq, equals, ge, gt, le, lt, ne};
pub use logic::{and, not, or, truthy};

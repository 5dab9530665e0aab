//! Runtime method dispatch for object values
//!
//! Objects carry no compiled vtable. Behaviors are looked up by the
//! object's type tag plus a suffix in a [`Registry`], and the text
//! conversion protocols (`stringify`, `represent`) are built on top.

mod method_key;
mod protocol;
mod registry;

pub use method_key::{MethodKey, REPR, STR};
pub use protocol::{represent, stringify};
pub use registry::{Behavior, BehaviorPtr, Registry};

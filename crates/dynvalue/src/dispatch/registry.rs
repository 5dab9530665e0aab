//! Behavior registry emulating virtual dispatch for objects.
//!
//! Behaviors are keyed by the composite `"<TypeTag><suffix>"` string and
//! resolved at call time. Adding a type means registering entries under a
//! new tag; overriding means registering a different behavior under the
//! same suffix for another tag.
//!
//! Behaviors must be registered before the first call that needs them.
//! Nothing enforces this ordering.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::error::{Result, RuntimeError};
use crate::Value;

use super::method_key::{composite, MethodKey, REPR};

/// Global registry singleton.
static GLOBAL_REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// A unary behavior taking the receiver and producing a value.
pub trait Behavior: Send + Sync {
    /// Invoke the behavior on `receiver`.
    fn call(&self, receiver: &Value) -> Result<Value>;
}

impl<F> Behavior for F
where
    F: Fn(&Value) -> Result<Value> + Send + Sync,
{
    fn call(&self, receiver: &Value) -> Result<Value> {
        self(receiver)
    }
}

/// Shared pointer to a registered behavior
pub type BehaviorPtr = Arc<dyn Behavior>;

/// Table of behaviors keyed by type tag and suffix.
#[derive(Default)]
pub struct Registry {
    behaviors: DashMap<String, BehaviorPtr>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created empty on first access.
    pub fn global() -> Arc<Registry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(Registry::new()))
            .clone()
    }

    /// Register a callable under `type_tag` + `suffix`.
    ///
    /// An existing entry for the same key is replaced.
    pub fn register<F>(&self, type_tag: &str, suffix: &str, f: F)
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.register_ptr(type_tag, suffix, Arc::new(f));
    }

    /// Register a [`Behavior`] implementor under `type_tag` + `suffix`.
    pub fn register_behavior(
        &self,
        type_tag: &str,
        suffix: &str,
        behavior: impl Behavior + 'static,
    ) {
        self.register_ptr(type_tag, suffix, Arc::new(behavior));
    }

    /// Register an already-shared behavior.
    pub fn register_ptr(&self, type_tag: &str, suffix: &str, behavior: BehaviorPtr) {
        let key = composite(type_tag, suffix);
        if self.behaviors.insert(key.clone(), behavior).is_some() {
            tracing::debug!(%key, "replaced behavior");
        } else {
            tracing::debug!(%key, "registered behavior");
        }
    }

    /// Declare an object type, installing the default representation.
    ///
    /// The default `__repr__` returns `"<TypeTag object>"`. An existing
    /// `__repr__` for the tag is left untouched.
    pub fn define_class(&self, type_tag: &str) {
        let key = composite(type_tag, REPR);
        let placeholder = Value::text(format!("<{} object>", type_tag));
        self.behaviors.entry(key).or_insert_with(|| {
            tracing::debug!(type_tag, "defined class with default repr");
            let behavior: BehaviorPtr =
                Arc::new(move |_: &Value| -> Result<Value> { Ok(placeholder.clone()) });
            behavior
        });
    }

    /// Whether a behavior exists for the exact key.
    pub fn has(&self, type_tag: &str, suffix: &str) -> bool {
        self.behaviors.contains_key(&composite(type_tag, suffix))
    }

    /// Look up a behavior by exact key.
    ///
    /// The returned pointer is detached from the table, so invoking it may
    /// itself register or look up behaviors.
    pub fn lookup(&self, type_tag: &str, suffix: &str) -> Option<BehaviorPtr> {
        self.behaviors
            .get(&composite(type_tag, suffix))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Look up a behavior by [`MethodKey`].
    pub fn lookup_key(&self, key: &MethodKey) -> Option<BehaviorPtr> {
        self.lookup(&key.type_tag, &key.suffix)
    }

    /// Invoke a behavior if one is registered.
    ///
    /// Absence is `None`, not an error; callers decide the fallback.
    pub fn invoke(
        &self,
        type_tag: &str,
        suffix: &str,
        receiver: &Value,
    ) -> Option<Result<Value>> {
        self.lookup(type_tag, suffix)
            .map(|behavior| behavior.call(receiver))
    }

    /// Call the receiver object's behavior for `suffix`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the receiver is not an object and
    /// `MethodNotFound` if its type has no behavior for `suffix`.
    pub fn dispatch(&self, receiver: &Value, suffix: &str) -> Result<Value> {
        let type_tag = receiver.as_object()?.type_tag();
        match self.invoke(&type_tag, suffix, receiver) {
            Some(result) => result,
            None => Err(RuntimeError::MethodNotFound {
                key: composite(&type_tag, suffix),
            }),
        }
    }

    /// Number of registered behaviors.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Registry({} behaviors)", self.behaviors.len())
    }
}

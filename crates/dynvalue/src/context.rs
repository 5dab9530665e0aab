//! Runtime context configuration

use std::sync::Arc;

use crate::dispatch::{self, Registry};
use crate::error::Result;
use crate::range::{Range, Termination};
use crate::Value;

/// Configuration shared by operations that consult the behavior registry
/// or build ranges.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Registry used for object text conversion and dispatch
    pub registry: Arc<Registry>,

    /// Termination predicate for ranges built through this context
    pub termination: Termination,

    /// Whether to trace conversions (for debugging)
    pub trace: bool,
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
            termination: Termination::default(),
            trace: false,
        }
    }
}

impl RuntimeContext {
    /// Create a context bound to the global registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with its own registry.
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }

    /// Use a different range termination predicate.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Human-readable text of `value`.
    ///
    /// # Errors
    ///
    /// Propagates behavior failures.
    pub fn stringify(&self, value: &Value) -> Result<String> {
        let text = dispatch::stringify(&self.registry, value)?;
        if self.trace {
            tracing::trace!(kind = %value.kind(), %text, "stringify");
        }
        Ok(text)
    }

    /// Representation text of `value`.
    ///
    /// # Errors
    ///
    /// Propagates behavior failures.
    pub fn represent(&self, value: &Value) -> Result<String> {
        let text = dispatch::represent(&self.registry, value)?;
        if self.trace {
            tracing::trace!(kind = %value.kind(), %text, "represent");
        }
        Ok(text)
    }

    /// Stringify and space-join `values`, ending with a newline.
    ///
    /// # Errors
    ///
    /// Propagates behavior failures.
    pub fn render_line(&self, values: &[Value]) -> Result<String> {
        crate::prelude::render_line_in(&self.registry, values)
    }

    /// Build a range using this context's termination predicate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if `step` is zero.
    pub fn range(&self, start: i64, stop: i64, step: i64) -> Result<Range> {
        Ok(Range::new(start, stop, step)?.with_termination(self.termination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::STR;

    #[test]
    fn test_default_context() {
        let ctx = RuntimeContext::default();
        assert_eq!(ctx.termination, Termination::Directional);
        assert!(!ctx.trace);
        assert!(Arc::ptr_eq(&ctx.registry, &Registry::global()));
    }

    #[test]
    fn test_private_registry() {
        let registry = Arc::new(Registry::new());
        registry.register("Tag", STR, |_: &Value| Ok(Value::text("tagged")));
        let ctx = RuntimeContext::with_registry(Arc::clone(&registry));
        let obj = Value::object("Tag");
        assert_eq!(ctx.stringify(&obj).unwrap(), "tagged");
        assert_eq!(ctx.represent(&obj).unwrap(), "<object>");
        assert_eq!(ctx.render_line(&[obj, Value::Int(1)]).unwrap(), "tagged 1\n");
    }

    #[test]
    fn test_range_uses_termination() {
        let ctx = RuntimeContext::new().with_termination(Termination::Ascending);
        let range = ctx.range(5, 0, -1).unwrap();
        assert_eq!(range.termination(), Termination::Ascending);
        assert!(range.is_empty());
        assert!(ctx.range(0, 1, 0).is_err());
    }
}

//! Text-conversion protocols resolved through the registry

use crate::error::Result;
use crate::Value;

use super::method_key::{REPR, STR};
use super::Registry;

/// Run a text behavior and require a text result.
fn text_behavior(
    registry: &Registry,
    type_tag: &str,
    suffix: &str,
    value: &Value,
) -> Option<Result<String>> {
    registry.invoke(type_tag, suffix, value).map(|result| {
        let out = result?;
        Ok(out.as_text()?.to_string())
    })
}

/// Representation text of `value`.
///
/// Objects use their type's `__repr__` behavior, falling back to
/// `<object>`. Every other kind uses its display text.
///
/// # Errors
///
/// Propagates the behavior's error, or `TypeMismatch` if it returned
/// something other than text.
pub fn represent(registry: &Registry, value: &Value) -> Result<String> {
    let Some(type_tag) = value.object_tag() else {
        return Ok(value.display_text());
    };
    if !type_tag.is_empty() {
        if let Some(text) = text_behavior(registry, &type_tag, REPR, value) {
            return text;
        }
    }
    tracing::trace!(%type_tag, "no __repr__ behavior, using placeholder");
    Ok(value.display_text())
}

/// Human-readable text of `value`.
///
/// Objects use their type's `__str__` behavior, then fall back to
/// [`represent`]. Every other kind uses its display text.
///
/// # Errors
///
/// Propagates the behavior's error, or `TypeMismatch` if it returned
/// something other than text.
pub fn stringify(registry: &Registry, value: &Value) -> Result<String> {
    let Some(type_tag) = value.object_tag() else {
        return Ok(value.display_text());
    };
    if !type_tag.is_empty() {
        if let Some(text) = text_behavior(registry, &type_tag, STR, value) {
            return text;
        }
    }
    tracing::trace!(%type_tag, "no __str__ behavior, falling back to repr");
    represent(registry, value)
}

impl Value {
    /// [`stringify`] against the global registry
    pub fn stringify(&self) -> Result<String> {
        stringify(&Registry::global(), self)
    }

    /// [`represent`] against the global registry
    pub fn represent(&self) -> Result<String> {
        represent(&Registry::global(), self)
    }
}

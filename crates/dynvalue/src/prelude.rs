//! Standard builtins over values
//!
//! Free functions for the container-generic operations a host language
//! exposes as builtins: reflection, length, indexing, membership,
//! iteration, and line rendering.

use crate::dispatch::{stringify, Registry};
use crate::error::{Result, RuntimeError};
use crate::value::list::normalize_index;
use crate::Value;

// ═══════════════════════════════════════════════════════════════════════
// Reflection
// ═══════════════════════════════════════════════════════════════════════

/// Kind name of `value`: one of `none`, `int`, `float`, `bool`, `str`,
/// `list`, `tuple`, `dict`, `object`.
pub fn kind_of(value: &Value) -> &'static str {
    value.kind().name()
}

// ═══════════════════════════════════════════════════════════════════════
// Container Access
// ═══════════════════════════════════════════════════════════════════════

/// Number of elements, entries, or characters.
///
/// # Errors
///
/// Returns `TypeMismatch` for scalars and objects.
pub fn length(value: &Value) -> Result<usize> {
    match value {
        Value::Text(s) => Ok(s.chars().count()),
        Value::List(l) => Ok(l.len()),
        Value::Tuple(t) => Ok(t.len()),
        Value::Mapping(m) => Ok(m.len()),
        other => Err(RuntimeError::type_mismatch("sized container", other)),
    }
}

/// `container[key]`: integer index for sequences and text, key lookup for
/// mappings.
///
/// # Errors
///
/// Returns `IndexOutOfRange`, `KeyNotFound`, or `TypeMismatch` for a
/// non-indexable container or a sequence index that is not integral.
pub fn get_item(container: &Value, key: &Value) -> Result<Value> {
    match container {
        Value::List(l) => l.get(key.as_index()?),
        Value::Tuple(t) => t.get(key.as_index()?),
        Value::Mapping(m) => m.get(key),
        Value::Text(s) => {
            let chars: Vec<char> = s.chars().collect();
            let idx = normalize_index(key.as_index()?, chars.len())?;
            Ok(Value::text(chars[idx].to_string()))
        }
        other => Err(RuntimeError::type_mismatch("subscriptable container", other)),
    }
}

/// `container[key] = value` for lists and mappings.
///
/// # Errors
///
/// Returns `IndexOutOfRange` for a list index out of bounds, and
/// `TypeMismatch` for immutable or non-container receivers.
pub fn set_item(container: &Value, key: &Value, value: Value) -> Result<()> {
    match container {
        Value::List(l) => l.set(key.as_index()?, value),
        Value::Mapping(m) => {
            m.set(key.clone(), value);
            Ok(())
        }
        other => Err(RuntimeError::type_mismatch("mutable container", other)),
    }
}

/// Append to a list through any alias.
///
/// # Errors
///
/// Returns `TypeMismatch` if `container` is not a list.
pub fn append(container: &Value, value: Value) -> Result<()> {
    container.as_list()?.append(value);
    Ok(())
}

/// Slice a list or tuple into a new value of the same kind.
///
/// # Errors
///
/// Returns `InvalidStep` for a zero step and `TypeMismatch` for other
/// kinds.
pub fn slice(container: &Value, start: i64, stop: i64, step: i64) -> Result<Value> {
    match container {
        Value::List(l) => l.slice(start, stop, step),
        Value::Tuple(t) => {
            let items = crate::value::List::from(t.snapshot()).slice(start, stop, step)?;
            Ok(Value::tuple(items.snapshot()))
        }
        other => Err(RuntimeError::type_mismatch("sequence", other)),
    }
}

/// Membership: mapping keys, sequence elements, or a text substring.
///
/// # Errors
///
/// Returns `TypeMismatch` for a non-container, or for a non-text needle
/// searched in text.
pub fn contains(container: &Value, item: &Value) -> Result<bool> {
    match container {
        Value::Mapping(m) => Ok(m.contains(item)),
        Value::List(l) => Ok(l.snapshot().iter().any(|v| v == item)),
        Value::Tuple(t) => Ok(t.iter().any(|v| v == item)),
        Value::Text(s) => Ok(s.contains(item.as_text()?)),
        other => Err(RuntimeError::type_mismatch("container", other)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Iteration
// ═══════════════════════════════════════════════════════════════════════

/// Values visited by a `for` loop over `value`.
///
/// Lists are snapshotted, so mutation during the loop does not affect it.
/// Text yields one-character texts and mappings yield their keys.
///
/// # Errors
///
/// Returns `TypeMismatch` for non-iterable kinds.
pub fn iterate(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::List(l) => Ok(l.snapshot()),
        Value::Tuple(t) => Ok(t.snapshot()),
        Value::Mapping(m) => Ok(m.keys()),
        Value::Text(s) => Ok(s.chars().map(|c| Value::text(c.to_string())).collect()),
        other => Err(RuntimeError::type_mismatch("iterable", other)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Text Builtins
// ═══════════════════════════════════════════════════════════════════════

/// Stringify each value, separate with single spaces, and end with `\n`.
///
/// Uses the global registry for objects.
///
/// # Errors
///
/// Propagates any `__str__`/`__repr__` behavior failure.
pub fn render_line(values: &[Value]) -> Result<String> {
    render_line_in(&Registry::global(), values)
}

pub(crate) fn render_line_in(registry: &Registry, values: &[Value]) -> Result<String> {
    let parts = values
        .iter()
        .map(|v| stringify(registry, v))
        .collect::<Result<Vec<_>>>()?;
    let mut line = parts.join(" ");
    line.push('\n');
    Ok(line)
}

/// Concatenate the texts of `iterable` with `separator` between them.
///
/// # Errors
///
/// Returns `TypeMismatch` if `separator` or any element is not text.
pub fn join(separator: &Value, iterable: &Value) -> Result<Value> {
    let separator = separator.as_text()?;
    let items = iterate(iterable)?;
    let parts = items
        .iter()
        .map(|v| v.as_text().map(str::to_string))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::text(parts.join(separator)))
}

/// One-character text for a Unicode code point.
///
/// # Errors
///
/// Returns `TypeMismatch` for a non-integer and `InvalidArgument` for a
/// code outside the Unicode scalar range.
pub fn chr(code: &Value) -> Result<Value> {
    let n = code.as_index()?;
    u32::try_from(n)
        .ok()
        .and_then(char::from_u32)
        .map(|c| Value::text(c.to_string()))
        .ok_or_else(|| RuntimeError::InvalidArgument(format!("chr() arg not in range: {}", n)))
}

//! Ordering comparisons and structural equality

use std::cmp::Ordering;

use crate::error::{Result, RuntimeError};
use crate::Value;

// ═══════════════════════════════════════════════════════════════════════
// Ordering
// ═══════════════════════════════════════════════════════════════════════

/// Order two numbers (mixed int/float allowed) or two texts.
fn ordering(op: &str, left: &Value, right: &Value) -> Result<Option<Ordering>> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.as_ref().cmp(b.as_ref()))),
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            Ok(left.as_float()?.partial_cmp(&right.as_float()?))
        }
        _ => Err(RuntimeError::binary(op, left, right)),
    }
}

/// `a < b`
///
/// # Errors
///
/// Returns `UnsupportedOperand` unless both operands are numeric or both
/// are text.
pub fn lt(left: &Value, right: &Value) -> Result<Value> {
    let ord = ordering("<", left, right)?;
    Ok(Value::Bool(ord == Some(Ordering::Less)))
}

/// `a <= b`
pub fn le(left: &Value, right: &Value) -> Result<Value> {
    let ord = ordering("<=", left, right)?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Less | Ordering::Equal)
    )))
}

/// `a > b`
pub fn gt(left: &Value, right: &Value) -> Result<Value> {
    let ord = ordering(">", left, right)?;
    Ok(Value::Bool(ord == Some(Ordering::Greater)))
}

/// `a >= b`
pub fn ge(left: &Value, right: &Value) -> Result<Value> {
    let ord = ordering(">=", left, right)?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

// ═══════════════════════════════════════════════════════════════════════
// Structural Equality
// ═══════════════════════════════════════════════════════════════════════

/// Structural equality as a plain boolean.
///
/// Numbers compare across int/float; sequences compare by length and
/// pointwise; mappings compare by size and per-key value regardless of
/// insertion order. Every other pairing, including any object and `None`,
/// is unequal.
pub fn equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => (*a as f64) == *b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,

        (Value::Tuple(a), Value::Tuple(b)) => seq_equals(a.as_slice(), b.as_slice()),
        (Value::List(a), Value::List(b)) => {
            let (a, b) = (a.read(), b.read());
            seq_equals(a.as_slice(), b.as_slice())
        }

        (Value::Mapping(a), Value::Mapping(b)) => {
            let (a, b) = (a.read(), b.read());
            a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.iter()
                        .find(|(other_key, _)| equals(key, other_key))
                        .is_some_and(|(_, other_value)| equals(value, other_value))
                })
        }

        _ => false,
    }
}

fn seq_equals(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
}

/// `a == b` as a boolean value
pub fn eq(left: &Value, right: &Value) -> Value {
    Value::Bool(equals(left, right))
}

/// `a != b`, the negation of [`eq`]
pub fn ne(left: &Value, right: &Value) -> Value {
    Value::Bool(!equals(left, right))
}

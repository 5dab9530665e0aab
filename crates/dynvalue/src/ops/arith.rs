//! Arithmetic operators
//!
//! Numeric operands are always widened to floating point, so `1 + 2`
//! produces the float `3` (which renders as `3`).

use crate::error::{Result, RuntimeError};
use crate::Value;

/// Widen both operands for a binary float operation.
fn widen(op: &str, left: &Value, right: &Value) -> Result<(f64, f64)> {
    match (left, right) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            Ok((left.as_float()?, right.as_float()?))
        }
        _ => Err(RuntimeError::binary(op, left, right)),
    }
}

/// Repeat `text` `count` times; non-positive counts yield empty text.
fn repeat(text: &str, count: i64) -> Result<Value> {
    let times = usize::try_from(count).unwrap_or(0);
    if text.len().checked_mul(times).is_none() {
        return Err(RuntimeError::InvalidArgument(format!(
            "repeated text too long: {} bytes * {}",
            text.len(),
            count
        )));
    }
    Ok(Value::text(text.repeat(times)))
}

// ═══════════════════════════════════════════════════════════════════════
// Binary Operations
// ═══════════════════════════════════════════════════════════════════════

/// `a + b`: text concatenation or float addition.
///
/// # Errors
///
/// Returns `UnsupportedOperand` when text meets non-text, or when either
/// operand is not numeric.
pub fn add(left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Ok(Value::text(format!("{}{}", a, b))),
        (Value::Text(_), _) | (_, Value::Text(_)) => Err(RuntimeError::binary("+", left, right)),
        _ => {
            let (a, b) = widen("+", left, right)?;
            Ok(Value::Float(a + b))
        }
    }
}

/// `a - b` in floating point
pub fn sub(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = widen("-", left, right)?;
    Ok(Value::Float(a - b))
}

/// `a * b`: text repetition for text × int, otherwise float multiply
pub fn mul(left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Text(s), Value::Int(n)) | (Value::Int(n), Value::Text(s)) => repeat(s, *n),
        _ => {
            let (a, b) = widen("*", left, right)?;
            Ok(Value::Float(a * b))
        }
    }
}

/// `a / b` in floating point. Division by zero follows IEEE 754.
pub fn div(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = widen("/", left, right)?;
    Ok(Value::Float(a / b))
}

/// `a // b`: floor toward negative infinity
pub fn floor_div(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = widen("//", left, right)?;
    Ok(Value::Float((a / b).floor()))
}

/// `a % b`: `a - floor(a / b) * b`, taking the sign of the divisor
pub fn modulo(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = widen("%", left, right)?;
    Ok(Value::Float(a - (a / b).floor() * b))
}

/// `a ** b` in floating point
pub fn pow(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = widen("**", left, right)?;
    Ok(Value::Float(a.powf(b)))
}

// ═══════════════════════════════════════════════════════════════════════
// Unary Operations
// ═══════════════════════════════════════════════════════════════════════

/// `-a` in floating point
pub fn neg(operand: &Value) -> Result<Value> {
    match operand {
        Value::Int(_) | Value::Float(_) => Ok(Value::Float(-operand.as_float()?)),
        other => Err(RuntimeError::unary("-", other)),
    }
}

//! Truthiness and boolean operators
//!
//! `and`/`or` are total functions over already-evaluated operands.
//! Short-circuiting is the caller's job.

use crate::Value;

/// Truthiness of a value.
///
/// Numbers are false only at zero, text and containers only when empty.
/// `None` and objects are always false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(n) => *n != 0.0,
        Value::Text(s) => !s.is_empty(),
        Value::List(l) => !l.is_empty(),
        Value::Tuple(t) => !t.is_empty(),
        Value::Mapping(m) => !m.is_empty(),
        Value::Absent | Value::Object(_) => false,
    }
}

/// `not a`
pub fn not(value: &Value) -> Value {
    Value::Bool(!truthy(value))
}

/// `a and b` over truthiness
pub fn and(left: &Value, right: &Value) -> Value {
    Value::Bool(truthy(left) && truthy(right))
}

/// `a or b` over truthiness
pub fn or(left: &Value, right: &Value) -> Value {
    Value::Bool(truthy(left) || truthy(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(truthy(&Value::Bool(true)));
        assert!(!truthy(&Value::Int(0)));
        assert!(truthy(&Value::Int(-1)));
        assert!(!truthy(&Value::Float(0.0)));
        assert!(truthy(&Value::Float(0.1)));
        assert!(!truthy(&Value::text("")));
        assert!(truthy(&Value::text(" ")));
        assert!(!truthy(&Value::list(vec![])));
        assert!(truthy(&Value::tuple(vec![Value::Absent])));
        assert!(!truthy(&Value::mapping(vec![])));
        assert!(!truthy(&Value::Absent));
        assert!(!truthy(&Value::object("Anything")));
    }

    #[test]
    fn test_boolean_operators() {
        assert_eq!(not(&Value::Int(0)), Value::Bool(true));
        assert_eq!(and(&Value::Int(1), &Value::text("")), Value::Bool(false));
        assert_eq!(or(&Value::Absent, &Value::text("x")), Value::Bool(true));
        assert_eq!(or(&Value::Absent, &Value::Int(0)), Value::Bool(false));
    }
}

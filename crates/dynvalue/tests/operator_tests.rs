//! Tests for arithmetic, comparison, and logic operators

use dynvalue::ops::{self, truthy};
use dynvalue::*;
use pretty_assertions::assert_eq;

fn num(result: Result<Value>) -> f64 {
    result.unwrap().as_float().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_text_concatenation() {
    let joined = ops::add(&Value::text("ab"), &Value::text("cd")).unwrap();
    assert_eq!(joined, Value::text("abcd"));
    assert_ne!(joined, Value::text("cd"));

    let err = ops::add(&Value::text("ab"), &Value::Int(3)).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnsupportedOperand {
            op: "+".into(),
            left: "str".into(),
            right: Some("int".into()),
        }
    );
    assert_eq!(
        err.to_string(),
        "TypeError: unsupported operand type(s) for +: 'str' and 'int'"
    );
}

#[test]
fn test_arithmetic_widens_to_float() {
    let sum = ops::add(&Value::Int(1), &Value::Int(2)).unwrap();
    assert!(sum.is_float());
    assert_eq!(sum.display_text(), "3");
    assert_eq!(num(ops::sub(&Value::Int(1), &Value::Float(0.5))), 0.5);
    assert_eq!(num(ops::mul(&Value::Int(3), &Value::Int(4))), 12.0);
    assert_eq!(num(ops::div(&Value::Int(7), &Value::Int(2))), 3.5);
    assert_eq!(num(ops::pow(&Value::Int(2), &Value::Int(10))), 1024.0);
    assert_eq!(num(ops::neg(&Value::Int(5))), -5.0);
}

#[test]
fn test_floor_division_and_modulo_signs() {
    assert_eq!(num(ops::floor_div(&Value::Int(7), &Value::Int(2))), 3.0);
    assert_eq!(num(ops::floor_div(&Value::Int(-7), &Value::Int(2))), -4.0);
    assert_eq!(num(ops::modulo(&Value::Int(-7), &Value::Int(2))), 1.0);
    assert_eq!(num(ops::modulo(&Value::Int(7), &Value::Int(-2))), -1.0);
    assert_eq!(num(ops::modulo(&Value::Int(6), &Value::Int(3))), 0.0);
}

#[test]
fn test_division_by_zero_is_ieee() {
    assert_eq!(num(ops::div(&Value::Int(1), &Value::Int(0))), f64::INFINITY);
    assert!(num(ops::modulo(&Value::Int(1), &Value::Int(0))).is_nan());
}

#[test]
fn test_text_repetition() {
    assert_eq!(
        ops::mul(&Value::text("ab"), &Value::Int(3)).unwrap(),
        Value::text("ababab")
    );
    assert_eq!(
        ops::mul(&Value::Int(-1), &Value::text("ab")).unwrap(),
        Value::text("")
    );
}

#[test]
fn test_bool_is_not_numeric() {
    assert!(matches!(
        ops::add(&Value::Bool(true), &Value::Int(1)),
        Err(RuntimeError::UnsupportedOperand { .. })
    ));
    assert!(matches!(
        ops::neg(&Value::Bool(true)),
        Err(RuntimeError::UnsupportedOperand { right: None, .. })
    ));
    assert!(ops::sub(&Value::Absent, &Value::Int(1)).is_err());
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_ordering() {
    assert_eq!(ops::lt(&Value::Int(1), &Value::Float(1.5)).unwrap(), Value::Bool(true));
    assert_eq!(ops::ge(&Value::Int(2), &Value::Int(2)).unwrap(), Value::Bool(true));
    assert_eq!(
        ops::gt(&Value::text("b"), &Value::text("a")).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(ops::le(&Value::Float(f64::NAN), &Value::Int(0)).unwrap(), Value::Bool(false));
    assert!(ops::lt(&Value::text("a"), &Value::Int(1)).is_err());
    assert!(ops::lt(&Value::list(vec![]), &Value::list(vec![])).is_err());
}

#[test]
fn test_eq_and_ne_values() {
    assert_eq!(ops::eq(&Value::Int(2), &Value::Float(2.0)), Value::Bool(true));
    assert_eq!(ops::ne(&Value::Absent, &Value::Absent), Value::Bool(true));
    assert_eq!(ops::eq(&Value::text("a"), &Value::Int(1)), Value::Bool(false));
}

// ═══════════════════════════════════════════════════════════════════════
// Logic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_truthiness_table() {
    assert!(!truthy(&Value::Int(0)));
    assert!(truthy(&Value::Float(-0.5)));
    assert!(!truthy(&Value::text("")));
    assert!(truthy(&Value::list(vec![Value::Absent])));
    assert!(!truthy(&Value::mapping(vec![])));
    assert!(!truthy(&Value::Absent));
    assert!(!truthy(&Value::object("T")));
}

#[test]
fn test_boolean_operators() {
    assert_eq!(ops::not(&Value::text("")), Value::Bool(true));
    assert_eq!(ops::and(&Value::Int(1), &Value::text("x")), Value::Bool(true));
    assert_eq!(ops::or(&Value::Int(0), &Value::Absent), Value::Bool(false));
}

//! Error types for value operations

use thiserror::Error;

use crate::value::Value;

/// Errors raised by value accessors, containers, operators, and dispatch.
///
/// Every error is fatal to the operation that raised it. Nothing in this
/// crate recovers from another operation's failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A typed accessor was used on a value of a different kind
    #[error("TypeError: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected kind
        expected: String,
        /// Actual kind received
        got: String,
    },

    /// An operator was applied to an incompatible kind combination
    #[error("TypeError: unsupported operand type(s) for {op}: {}", operand_list(.left, .right))]
    UnsupportedOperand {
        /// Operator symbol
        op: String,
        /// Kind of the left (or only) operand
        left: String,
        /// Kind of the right operand, absent for unary operators
        right: Option<String>,
    },

    /// Sequence index fell outside bounds after negative-index normalization
    #[error("IndexError: index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index as supplied by the caller
        index: i64,
        /// Sequence length at the time of access
        len: usize,
    },

    /// Mapping lookup or removal missed
    #[error("KeyError: {key}")]
    KeyNotFound {
        /// Display text of the missing key
        key: String,
    },

    /// Slice or range step of zero
    #[error("ValueError: step cannot be zero")]
    InvalidStep,

    /// Object field read missed
    #[error("AttributeError: '{type_tag}' object has no attribute '{name}'")]
    AttributeNotFound {
        /// Type tag of the receiver
        type_tag: String,
        /// Requested field name
        name: String,
    },

    /// No behavior registered for a dispatched method key
    #[error("AttributeError: no behavior registered for '{key}'")]
    MethodNotFound {
        /// Composite registry key
        key: String,
    },

    /// Argument outside the domain accepted by a builtin
    #[error("ValueError: {0}")]
    InvalidArgument(String),
}

fn operand_list(left: &str, right: &Option<String>) -> String {
    match right {
        Some(right) => format!("'{}' and '{}'", left, right),
        None => format!("'{}'", left),
    }
}

impl RuntimeError {
    /// Build a `TypeMismatch` for a value that is not of the `expected` kind.
    pub fn type_mismatch(expected: impl Into<String>, got: &Value) -> Self {
        RuntimeError::TypeMismatch {
            expected: expected.into(),
            got: got.kind().name().to_string(),
        }
    }

    /// Build an `UnsupportedOperand` for a binary operator.
    pub fn binary(op: &str, left: &Value, right: &Value) -> Self {
        RuntimeError::UnsupportedOperand {
            op: op.to_string(),
            left: left.kind().name().to_string(),
            right: Some(right.kind().name().to_string()),
        }
    }

    /// Build an `UnsupportedOperand` for a unary operator.
    pub fn unary(op: &str, operand: &Value) -> Self {
        RuntimeError::UnsupportedOperand {
            op: op.to_string(),
            left: operand.kind().name().to_string(),
            right: None,
        }
    }

    /// Build a `KeyNotFound` rendering the key with its display text.
    pub fn key_not_found(key: &Value) -> Self {
        RuntimeError::KeyNotFound {
            key: key.display_text(),
        }
    }
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = RuntimeError::type_mismatch("int", &Value::text("x"));
        assert_eq!(err.to_string(), "TypeError: expected int, got str");
    }

    #[test]
    fn test_binary_operand_message() {
        let err = RuntimeError::binary("+", &Value::text("ab"), &Value::Int(3));
        assert_eq!(
            err.to_string(),
            "TypeError: unsupported operand type(s) for +: 'str' and 'int'"
        );
    }

    #[test]
    fn test_unary_operand_message() {
        let err = RuntimeError::unary("-", &Value::Absent);
        assert_eq!(
            err.to_string(),
            "TypeError: unsupported operand type(s) for -: 'none'"
        );
    }

    #[test]
    fn test_key_not_found_renders_key() {
        let err = RuntimeError::key_not_found(&Value::tuple(vec![Value::Int(1)]));
        assert_eq!(err.to_string(), "KeyError: (1,)");
    }
}

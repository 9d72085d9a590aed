//! Error types for the conversion core
//!
//! Every variant is fatal: the first failure aborts the whole conversion
//! and propagates to the caller. There is no partial-output mode.

use std::fmt;

/// Errors that abort a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is not well-formed XML
    MalformedDocument(String),
    /// A `const` or `entry` name fails the identifier grammar
    InvalidIdentifier { element: String, name: String },
    /// A `const` or `entry` value fails the unsigned-integer grammar or
    /// does not fit in 64 bits
    InvalidLiteral { element: String, value: String },
    /// A required attribute is absent
    MissingAttribute { element: String, attribute: String },
    /// An expression with fewer than an operator and two operands
    MalformedExpression(String),
    /// The head token is not in the supported operator set
    UnknownOperator(String),
    /// An operand that is neither a bound identifier nor an integer
    /// literal was consumed by an operator
    UnresolvedOperand(String),
    /// Division or modulo by zero, or a result outside the 64-bit range
    Arithmetic(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MalformedDocument(msg) => {
                write!(f, "XML syntax error: {}", msg)
            }
            ConvertError::InvalidIdentifier { element, name } => {
                write!(f, "Invalid {} name: {}", element, name)
            }
            ConvertError::InvalidLiteral { element, value } => {
                write!(f, "Invalid {} value: {}", element, value)
            }
            ConvertError::MissingAttribute { element, attribute } => {
                write!(f, "Missing {} attribute on <{}>", attribute, element)
            }
            ConvertError::MalformedExpression(expr) => {
                write!(f, "Malformed expression: {}", expr)
            }
            ConvertError::UnknownOperator(op) => {
                write!(f, "Unknown operator: {}", op)
            }
            ConvertError::UnresolvedOperand(token) => {
                write!(f, "Unresolved operand: {}", token)
            }
            ConvertError::Arithmetic(msg) => {
                write!(f, "Arithmetic error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offending_input() {
        let err = ConvertError::InvalidIdentifier {
            element: "const".to_string(),
            name: "9lives".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid const name: 9lives");

        let err = ConvertError::UnknownOperator("pow".to_string());
        assert_eq!(err.to_string(), "Unknown operator: pow");
    }
}

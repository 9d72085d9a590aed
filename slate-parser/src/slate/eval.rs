//! Prefix-notation expression evaluation
//!
//! Expressions look like `|+ base 10|`: the operator comes first, so there
//! is no precedence or associativity to parse, and evaluation is a single
//! dispatch over the head token.
//!
//! Operator semantics:
//! - `+` and `max` are variadic over all operands.
//! - `-`, `*`, `/` and `mod` are binary; operands past the first two are
//!   never examined (so a bogus third operand is not an error).
//! - `/` is floor division and `mod` its matching remainder, i.e. the
//!   quotient rounds toward negative infinity and the remainder takes the
//!   sign of the divisor. Literals are non-negative, but subtraction
//!   results bound into the table can feed negatives back in.
//!
//! All arithmetic is checked; overflow and zero divisors are fatal.
//! Evaluation never mutates the symbol table.

use crate::slate::error::ConvertError;
use crate::slate::symbols::SymbolTable;

/// Delimiter stripped from both ends of the expression text.
pub const EXPRESSION_DELIMITER: char = '|';

/// The supported operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Max,
}

impl Operator {
    /// Operator for a head token, if the token is in the supported set.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "mod" => Some(Operator::Modulo),
            "max" => Some(Operator::Max),
            _ => None,
        }
    }
}

/// A resolved operand.
///
/// `Unresolved` carries a token that is neither a bound identifier nor an
/// integer literal. It only becomes an error if an operator consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Number(i64),
    Unresolved(String),
}

impl Operand {
    fn require_number(&self) -> Result<i64, ConvertError> {
        match self {
            Operand::Number(value) => Ok(*value),
            Operand::Unresolved(token) => {
                Err(ConvertError::UnresolvedOperand(token.clone()))
            }
        }
    }
}

/// Evaluate a prefix expression against the current symbol bindings.
///
/// The delimiters are optional: `|+ 2 3|` and `+ 2 3` evaluate the same.
pub fn evaluate(expression: &str, symbols: &SymbolTable) -> Result<i64, ConvertError> {
    let tokens: Vec<&str> = expression
        .trim_matches(EXPRESSION_DELIMITER)
        .split_whitespace()
        .collect();
    // An operator needs at least two operands.
    if tokens.len() < 3 {
        return Err(ConvertError::MalformedExpression(expression.to_string()));
    }

    let operator = Operator::from_token(tokens[0])
        .ok_or_else(|| ConvertError::UnknownOperator(tokens[0].to_string()))?;
    let operands = tokens[1..]
        .iter()
        .map(|token| resolve_operand(token, symbols))
        .collect::<Result<Vec<_>, _>>()?;

    apply(operator, &operands)
}

/// Resolve one operand token: symbol lookup first, then integer literal,
/// otherwise carried unresolved for the operator to reject on use.
fn resolve_operand(token: &str, symbols: &SymbolTable) -> Result<Operand, ConvertError> {
    if let Some(value) = symbols.lookup(token) {
        return Ok(Operand::Number(value));
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<i64>()
            .map(Operand::Number)
            .map_err(|_| {
                ConvertError::Arithmetic(format!("integer literal out of range: {}", token))
            });
    }
    Ok(Operand::Unresolved(token.to_string()))
}

fn apply(operator: Operator, operands: &[Operand]) -> Result<i64, ConvertError> {
    match operator {
        Operator::Add => {
            let mut sum: i64 = 0;
            for operand in operands {
                sum = sum
                    .checked_add(operand.require_number()?)
                    .ok_or_else(|| overflow("+"))?;
            }
            Ok(sum)
        }
        Operator::Subtract => {
            let (a, b) = binary_pair(operands)?;
            a.checked_sub(b).ok_or_else(|| overflow("-"))
        }
        Operator::Multiply => {
            let (a, b) = binary_pair(operands)?;
            a.checked_mul(b).ok_or_else(|| overflow("*"))
        }
        Operator::Divide => {
            let (a, b) = binary_pair(operands)?;
            floor_div(a, b)
        }
        Operator::Modulo => {
            let (a, b) = binary_pair(operands)?;
            floor_mod(a, b)
        }
        Operator::Max => {
            let mut best = operands[0].require_number()?;
            for operand in &operands[1..] {
                best = best.max(operand.require_number()?);
            }
            Ok(best)
        }
    }
}

/// First two operands of a binary operator; extras are never examined.
fn binary_pair(operands: &[Operand]) -> Result<(i64, i64), ConvertError> {
    Ok((operands[0].require_number()?, operands[1].require_number()?))
}

fn overflow(operator: &str) -> ConvertError {
    ConvertError::Arithmetic(format!("integer overflow in {}", operator))
}

fn floor_div(dividend: i64, divisor: i64) -> Result<i64, ConvertError> {
    if divisor == 0 {
        return Err(ConvertError::Arithmetic("division by zero".to_string()));
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or_else(|| overflow("/"))?;
    let remainder = dividend % divisor;
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn floor_mod(dividend: i64, divisor: i64) -> Result<i64, ConvertError> {
    if divisor == 0 {
        return Err(ConvertError::Arithmetic("modulo by zero".to_string()));
    }
    // dividend % -1 is 0, but i64::MIN % -1 overflows the hardware remainder.
    if divisor == -1 {
        return Ok(0);
    }
    let remainder = dividend % divisor;
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

//! Arithmetic expression evaluation
//!
//! A dedicated evaluator for the calculator tool: tokenizer plus
//! recursive-descent parser over numeric literals, `+ - * /`, unary minus,
//! and parentheses, with standard precedence. Anything else is rejected.
//! This deliberately replaces general-purpose expression evaluation; the
//! calculator must never be a code-execution primitive.

mod lexer;
mod parser;

pub use lexer::Token;

use crate::error::{GoferError, Result};

/// Evaluate an arithmetic expression.
///
/// Returns `GoferError::Calculation` carrying the offending expression on
/// malformed input, disallowed tokens, or division by zero.
pub fn evaluate(expression: &str) -> Result<f64> {
    let fail = |reason: String| GoferError::Calculation {
        expression: expression.to_string(),
        reason,
    };

    let tokens = lexer::tokenize(expression).map_err(&fail)?;
    parser::parse(&tokens).map_err(&fail)
}

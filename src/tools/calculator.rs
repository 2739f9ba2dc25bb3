//! calculator tool - restricted arithmetic evaluation
//!
//! Delegates to the dedicated evaluator in `calc`; numeric literals, the
//! four operators, and parentheses only.

use crate::calc;
use crate::error::{GoferError, Result};

use super::{Tool, ToolOutput};

pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn description(&self) -> &'static str {
        "Evaluate an arithmetic expression (+ - * / and parentheses)"
    }

    fn invoke(&self, args: Option<&str>) -> Result<ToolOutput> {
        let expression = args.ok_or_else(|| GoferError::ToolExecution {
            tool: "calculator".to_string(),
            message: "missing expression".to_string(),
        })?;

        let value = calc::evaluate(expression)?;
        Ok(ToolOutput::Number(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_precedence() {
        let tool = CalculatorTool;
        let out = tool.invoke(Some("2 + 2 * 3")).unwrap();
        assert_eq!(out, ToolOutput::Number(8.0));
        assert_eq!(out.to_string(), "8");
    }

    #[test]
    fn test_calculator_parentheses() {
        let tool = CalculatorTool;
        let out = tool.invoke(Some("(2 + 2) * 3")).unwrap();
        assert_eq!(out, ToolOutput::Number(12.0));
    }

    #[test]
    fn test_calculator_malformed_input() {
        let tool = CalculatorTool;
        assert!(matches!(
            tool.invoke(Some("2 + ")).unwrap_err(),
            GoferError::Calculation { .. }
        ));
        assert!(matches!(
            tool.invoke(Some("abc")).unwrap_err(),
            GoferError::Calculation { .. }
        ));
    }

    #[test]
    fn test_calculator_division_by_zero() {
        let tool = CalculatorTool;
        match tool.invoke(Some("1/0")).unwrap_err() {
            GoferError::Calculation { expression, reason } => {
                assert_eq!(expression, "1/0");
                assert_eq!(reason, "division by zero");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_calculator_requires_argument() {
        let tool = CalculatorTool;
        assert!(matches!(
            tool.invoke(None).unwrap_err(),
            GoferError::ToolExecution { .. }
        ));
    }
}

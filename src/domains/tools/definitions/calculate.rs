//! Calculator tool definition.

use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_arguments, tool_definition};
use crate::domains::tools::result::ToolResult;

/// Arithmetic operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// The operation to perform (add, subtract, multiply, divide)
    pub operation: Operation,

    /// First operand
    pub x: f64,

    /// Second operand
    pub y: f64,
}

/// Calculator tool - basic arithmetic, two decimal places.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform basic arithmetic (add, subtract, multiply, divide) on two numbers. Returns the result with two decimal places.";

    #[instrument(skip_all, fields(operation = ?params.operation))]
    pub fn execute(params: &CalculateParams) -> Result<ToolResult, ToolError> {
        let value = compute(params.operation, params.x, params.y)?;
        info!("{:?}({}, {}) = {}", params.operation, params.x, params.y, value);
        Ok(ToolResult::text(format!("{:.2}", value)))
    }
}

/// Apply `operation` to the operands.
pub fn compute(operation: Operation, x: f64, y: f64) -> Result<f64, ToolError> {
    match operation {
        Operation::Add => Ok(x + y),
        Operation::Subtract => Ok(x - y),
        Operation::Multiply => Ok(x * y),
        Operation::Divide if y == 0.0 => Err(ToolError::domain("cannot divide by zero")),
        Operation::Divide => Ok(x / y),
    }
}

impl ToolHandler for CalculateTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<CalculateParams>(Self::NAME, Self::DESCRIPTION)
    }

    fn call(&self, arguments: serde_json::Value) -> ToolResult {
        ToolResult::from_outcome(
            parse_arguments::<CalculateParams>(arguments).and_then(|params| Self::execute(&params)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(operation: &str, x: f64, y: f64) -> ToolResult {
        CalculateTool.call(json!({ "operation": operation, "x": x, "y": y }))
    }

    #[test]
    fn test_add() {
        assert_eq!(run("add", 2.0, 3.0), ToolResult::text("5.00"));
    }

    #[test]
    fn test_subtract_negative_result() {
        assert_eq!(run("subtract", 2.0, 3.5), ToolResult::text("-1.50"));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(run("multiply", 2.5, 4.0), ToolResult::text("10.00"));
    }

    #[test]
    fn test_divide() {
        assert_eq!(run("divide", 10.0, 4.0), ToolResult::text("2.50"));
        assert_eq!(run("divide", 1.0, 3.0), ToolResult::text("0.33"));
    }

    #[test]
    fn test_divide_by_zero_is_reported() {
        for x in [10.0, 0.0, -3.0] {
            let result = run("divide", x, 0.0);
            match result {
                ToolResult::Error(message) => assert!(message.contains("cannot divide by zero")),
                other => panic!("expected error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_divide_by_negative_zero_is_reported() {
        assert!(compute(Operation::Divide, 1.0, -0.0).is_err());
    }

    #[test]
    fn test_always_two_decimals() {
        for (op, x, y) in [("add", 0.1, 0.2), ("multiply", 3.0, 3.0), ("subtract", 1e6, 1.0)] {
            let ToolResult::Text(text) = run(op, x, y) else {
                panic!("expected text");
            };
            let decimals = text.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 2, "{} has wrong precision", text);
        }
    }

    #[test]
    fn test_unknown_operation_is_invalid_argument() {
        let result = CalculateTool.call(json!({ "operation": "modulo", "x": 1, "y": 2 }));
        match result {
            ToolResult::Error(message) => assert!(message.starts_with("Invalid arguments")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_operand_is_invalid_argument() {
        let result = CalculateTool.call(json!({ "operation": "add", "x": 1 }));
        assert!(result.is_error());
    }

    #[test]
    fn test_definition_lists_operations() {
        let tool = CalculateTool.definition();
        let schema = serde_json::to_string(&*tool.input_schema).unwrap();
        for op in ["add", "subtract", "multiply", "divide"] {
            assert!(schema.contains(op));
        }
    }
}

//! Host-facing tool definitions for the calculator operations
//!
//! Each operation is one row of a static registration table: a stable
//! name, a description, and a kernel function, from which the discovery
//! metadata ([`Tool`]) and the async executor are built. The table is
//! fixed at compile time; there is no runtime reflection.

use crate::error::CalcError;
use crate::registry::ToolRegistry;
use crate::service::Calculator;
use mathkit_core::{Tool, ToolError, ToolExecutorFn, ToolResult};
use serde_json::json;
use std::sync::Arc;

/// Argument shape and kernel of one operation
enum Kernel {
    /// Two required numbers
    Two {
        first: &'static str,
        second: &'static str,
        run: fn(&Calculator, f64, f64) -> Result<f64, CalcError>,
    },
    /// One required number
    One {
        arg: &'static str,
        run: fn(&Calculator, f64) -> Result<f64, CalcError>,
    },
    /// One required number plus an optional one
    WithOptional {
        arg: &'static str,
        optional: &'static str,
        run: fn(&Calculator, f64, Option<f64>) -> Result<f64, CalcError>,
    },
}

/// One row of the registration table
struct OperationDef {
    name: &'static str,
    description: &'static str,
    kernel: Kernel,
}

/// Every operation the plugin exposes, in registration order
const OPERATIONS: &[OperationDef] = &[
    OperationDef {
        name: "add",
        description: "Add two numbers",
        kernel: Kernel::Two {
            first: "a",
            second: "b",
            run: |calc, a, b| Ok(calc.add(a, b)),
        },
    },
    OperationDef {
        name: "subtract",
        description: "Subtract one number from another",
        kernel: Kernel::Two {
            first: "a",
            second: "b",
            run: |calc, a, b| Ok(calc.subtract(a, b)),
        },
    },
    OperationDef {
        name: "multiply",
        description: "Multiply two numbers",
        kernel: Kernel::Two {
            first: "a",
            second: "b",
            run: |calc, a, b| Ok(calc.multiply(a, b)),
        },
    },
    OperationDef {
        name: "divide",
        description: "Divide one number by another",
        kernel: Kernel::Two {
            first: "a",
            second: "b",
            run: Calculator::divide,
        },
    },
    OperationDef {
        name: "square",
        description: "Calculate the square of a number",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.square(a)),
        },
    },
    OperationDef {
        name: "square_root",
        description: "Calculate the square root of a number",
        kernel: Kernel::One {
            arg: "a",
            run: Calculator::square_root,
        },
    },
    OperationDef {
        name: "cube",
        description: "Calculate the cube of a number",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.cube(a)),
        },
    },
    OperationDef {
        name: "power",
        description: "Raise a base to an exponent (fractional and negative exponents allowed)",
        kernel: Kernel::Two {
            first: "base",
            second: "exponent",
            run: Calculator::power,
        },
    },
    OperationDef {
        name: "log",
        description: "Calculate the logarithm of a number (natural logarithm when no base is given)",
        kernel: Kernel::WithOptional {
            arg: "a",
            optional: "base",
            run: Calculator::log,
        },
    },
    OperationDef {
        name: "sin",
        description: "Calculate the sine of an angle in radians",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.sin(a)),
        },
    },
    OperationDef {
        name: "cos",
        description: "Calculate the cosine of an angle in radians",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.cos(a)),
        },
    },
    OperationDef {
        name: "tan",
        description: "Calculate the tangent of an angle in radians",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.tan(a)),
        },
    },
    OperationDef {
        name: "factorial",
        description: "Calculate the factorial of a non-negative integer",
        kernel: Kernel::One {
            arg: "a",
            run: Calculator::factorial,
        },
    },
    OperationDef {
        name: "absolute_value",
        description: "Calculate the absolute value of a number",
        kernel: Kernel::One {
            arg: "a",
            run: |calc, a| Ok(calc.absolute_value(a)),
        },
    },
];

fn parameter_description(name: &str) -> &'static str {
    match name {
        "a" => "The first number",
        "b" => "The second number",
        "base" => "The base number",
        "exponent" => "The exponent",
        _ => "A number",
    }
}

fn input_schema(kernel: &Kernel) -> serde_json::Value {
    match kernel {
        Kernel::Two { first, second, .. } => json!({
            "type": "object",
            "properties": {
                (*first): {
                    "type": "number",
                    "description": parameter_description(first)
                },
                (*second): {
                    "type": "number",
                    "description": parameter_description(second)
                }
            },
            "required": [first, second]
        }),
        Kernel::One { arg, .. } => json!({
            "type": "object",
            "properties": {
                (*arg): {
                    "type": "number",
                    "description": "The number to operate on"
                }
            },
            "required": [arg]
        }),
        Kernel::WithOptional { arg, optional, .. } => json!({
            "type": "object",
            "properties": {
                (*arg): {
                    "type": "number",
                    "description": "The input number"
                },
                (*optional): {
                    "type": "number",
                    "description": "Optional base; the natural logarithm is used when omitted"
                }
            },
            "required": [arg]
        }),
    }
}

fn tool_definition(def: &OperationDef) -> Tool {
    Tool {
        name: def.name.to_string(),
        description: def.description.to_string(),
        input_schema: input_schema(&def.kernel),
    }
}

fn require_number(parsed: &serde_json::Value, field: &str) -> Result<f64, ToolError> {
    parsed[field].as_f64().ok_or_else(|| ToolError {
        message: format!("Missing or non-numeric '{field}' field"),
    })
}

fn optional_number(parsed: &serde_json::Value, field: &str) -> Result<Option<f64>, ToolError> {
    match &parsed[field] {
        serde_json::Value::Null => Ok(None),
        value => match value.as_f64() {
            Some(number) => Ok(Some(number)),
            None => Err(ToolError {
                message: format!("Non-numeric '{field}' field"),
            }),
        },
    }
}

fn build_executor(calculator: Calculator, def: &'static OperationDef) -> ToolExecutorFn {
    Arc::new(move |input: String| {
        let calculator = calculator.clone();
        Box::pin(async move {
            let parsed: serde_json::Value = serde_json::from_str(&input).map_err(|e| {
                ToolError {
                    message: format!("Invalid input JSON: {e}"),
                }
            })?;

            let value = match &def.kernel {
                Kernel::Two { first, second, run } => {
                    let a = require_number(&parsed, first)?;
                    let b = require_number(&parsed, second)?;
                    run(&calculator, a, b)
                }
                Kernel::One { arg, run } => {
                    let a = require_number(&parsed, arg)?;
                    run(&calculator, a)
                }
                Kernel::WithOptional { arg, optional, run } => {
                    let a = require_number(&parsed, arg)?;
                    let base = optional_number(&parsed, optional)?;
                    run(&calculator, a, base)
                }
            }
            .map_err(ToolError::from)?;

            Ok(json!({
                "operation": def.name,
                "result": value
            })
            .to_string())
        })
            as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn
}

/// Build the host-facing tool list for `calculator`
///
/// Each entry pairs the discovery metadata with an executor closure that
/// parses the JSON argument object, dispatches the operation, and renders
/// the result as `{"operation": <name>, "result": <number>}`.
#[must_use]
pub fn calculator_tools(calculator: &Calculator) -> Vec<(Tool, ToolExecutorFn)> {
    OPERATIONS
        .iter()
        .map(|def| (tool_definition(def), build_executor(calculator.clone(), def)))
        .collect()
}

/// Register every calculator operation on `registry`
pub fn register_calculator_tools(registry: &ToolRegistry, calculator: &Calculator) {
    for (tool, executor) in calculator_tools(calculator) {
        registry.register(tool, executor);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, RecordingObserver};

    fn calculator() -> Calculator {
        Calculator::new(Arc::new(NoopObserver))
    }

    fn executor_for(calculator: &Calculator, name: &str) -> ToolExecutorFn {
        calculator_tools(calculator)
            .into_iter()
            .find(|(tool, _)| tool.name == name)
            .map(|(_, executor)| executor)
            .expect("operation should be registered")
    }

    #[test]
    fn test_table_covers_every_operation() {
        let tools = calculator_tools(&calculator());
        let names: Vec<String> = tools.iter().map(|(tool, _)| tool.name.clone()).collect();

        assert_eq!(
            names,
            vec![
                "add",
                "subtract",
                "multiply",
                "divide",
                "square",
                "square_root",
                "cube",
                "power",
                "log",
                "sin",
                "cos",
                "tan",
                "factorial",
                "absolute_value",
            ]
        );
    }

    #[test]
    fn test_schemas_declare_parameters() {
        let tools = calculator_tools(&calculator());

        let (add, _) = tools.iter().find(|(t, _)| t.name == "add").expect("add");
        assert_eq!(add.input_schema["required"], json!(["a", "b"]));
        assert_eq!(add.input_schema["properties"]["a"]["type"], "number");

        let (power, _) = tools.iter().find(|(t, _)| t.name == "power").expect("power");
        assert_eq!(power.input_schema["required"], json!(["base", "exponent"]));

        // The logarithm base is optional, so only `a` is required.
        let (log, _) = tools.iter().find(|(t, _)| t.name == "log").expect("log");
        assert_eq!(log.input_schema["required"], json!(["a"]));
        assert!(log.input_schema["properties"]["base"].is_object());
    }

    #[tokio::test]
    async fn test_execute_add() {
        let executor = executor_for(&calculator(), "add");

        let result = executor(json!({ "a": 2.0, "b": 3.0 }).to_string()).await;

        let output: serde_json::Value =
            serde_json::from_str(&result.expect("should succeed")).expect("valid JSON");
        assert_eq!(output["operation"], "add");
        assert_eq!(output["result"], 5.0);
    }

    #[tokio::test]
    async fn test_execute_divide_by_zero() {
        let executor = executor_for(&calculator(), "divide");

        let result = executor(json!({ "a": 1.0, "b": 0.0 }).to_string()).await;

        assert!(result.is_err());
        assert_eq!(result.expect_err("should fail").message, "division by zero");
    }

    #[tokio::test]
    async fn test_execute_log_natural_and_with_base() {
        let executor = executor_for(&calculator(), "log");

        let natural = executor(json!({ "a": 1.0 }).to_string()).await;
        let output: serde_json::Value =
            serde_json::from_str(&natural.expect("should succeed")).expect("valid JSON");
        assert_eq!(output["result"], 0.0);

        let with_base = executor(json!({ "a": 8.0, "base": 2.0 }).to_string()).await;
        let output: serde_json::Value =
            serde_json::from_str(&with_base.expect("should succeed")).expect("valid JSON");
        let value = output["result"].as_f64().expect("numeric result");
        assert!((value - 3.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_execute_factorial_domain_failure() {
        let executor = executor_for(&calculator(), "factorial");

        let result = executor(json!({ "a": 2.5 }).to_string()).await;

        assert!(result.is_err());
        assert!(result
            .expect_err("should fail")
            .message
            .contains("invalid domain"));
    }

    #[tokio::test]
    async fn test_execute_missing_argument() {
        let executor = executor_for(&calculator(), "add");

        let result = executor(json!({ "a": 2.0 }).to_string()).await;

        assert!(result.is_err());
        assert!(result
            .expect_err("should fail")
            .message
            .contains("'b'"));
    }

    #[tokio::test]
    async fn test_execute_non_numeric_argument() {
        let executor = executor_for(&calculator(), "square_root");

        let result = executor(json!({ "a": "sixteen" }).to_string()).await;

        assert!(result.is_err());
        assert!(result
            .expect_err("should fail")
            .message
            .contains("non-numeric"));
    }

    #[tokio::test]
    async fn test_execute_invalid_json() {
        let executor = executor_for(&calculator(), "add");

        let result = executor("not json".to_string()).await;

        assert!(result.is_err());
        assert!(result
            .expect_err("should fail")
            .message
            .contains("Invalid input JSON"));
    }

    #[tokio::test]
    async fn test_failing_invocation_emits_one_record() {
        let observer = Arc::new(RecordingObserver::new());
        let calc = Calculator::new(observer.clone());
        let executor = executor_for(&calc, "divide");

        let result = executor(json!({ "a": 1.0, "b": 0.0 }).to_string()).await;

        assert!(result.is_err());
        let records = observer.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].operation, "divide");
    }

    #[tokio::test]
    async fn test_malformed_input_never_reaches_the_service() {
        let observer = Arc::new(RecordingObserver::new());
        let calc = Calculator::new(observer.clone());
        let executor = executor_for(&calc, "add");

        let result = executor("not json".to_string()).await;

        // Argument parsing failed before any operation was invoked.
        assert!(result.is_err());
        assert_eq!(observer.count(), 0);
    }
}

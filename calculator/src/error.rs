//! Failure taxonomy for calculator operations

use mathkit_core::ToolError;
use thiserror::Error;

/// Errors produced by calculator operations
///
/// Every failure is deterministic given its input: retrying an invocation
/// with the same arguments never changes the outcome, and no failure
/// affects the service's ability to serve subsequent invocations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Input outside the operation's mathematical domain
    #[error("invalid domain: {0}")]
    InvalidDomain(&'static str),
}

impl From<CalcError> for ToolError {
    fn from(error: CalcError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::InvalidDomain("factorial of a negative number").to_string(),
            "invalid domain: factorial of a negative number"
        );
    }

    #[test]
    fn test_conversion_to_tool_error() {
        let error: ToolError = CalcError::DivisionByZero.into();
        assert_eq!(error.message, "division by zero");
    }
}

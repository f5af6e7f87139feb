//! # MathKit Core
//!
//! The tool contract shared between plugins and their host orchestrator.
//!
//! A plugin advertises each operation as a [`Tool`]: a stable name, a
//! human-readable description, and a JSON schema for its parameters. The
//! host (typically an LLM-driven agent runtime) discovers tools by their
//! definitions and invokes them by name with a JSON argument object,
//! receiving a [`ToolResult`].
//!
//! Execution is async and host-agnostic: a tool's behavior is a
//! [`ToolExecutorFn`], a cloneable closure from the raw input string to a
//! boxed future. The host decides where and when that future runs.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Tool definition advertised to the host orchestrator
///
/// The `input_schema` follows the JSON-Schema object convention
/// (`type`/`properties`/`required`) used by agent tool APIs, so an
/// external caller can construct a valid argument object without any
/// knowledge of the implementation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Stable name the host uses to invoke the tool
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: serde_json::Value,
}

/// Result of one tool invocation
///
/// Success carries the tool's output rendered as a JSON string; failure
/// carries a structured [`ToolError`]. A tool never encodes an error as a
/// successful value.
pub type ToolResult = Result<String, ToolError>;

/// Structured tool invocation failure
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolError {
    /// Error message, suitable for relaying to the caller
    pub message: String,
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Executor for a tool: raw JSON input string in, [`ToolResult`] out
///
/// Stored behind an `Arc` so registries can hand out clones without
/// re-registering, and `Send + Sync` so invocations may be served from
/// any task concurrently.
pub type ToolExecutorFn =
    Arc<dyn Fn(String) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> + Send + Sync>;

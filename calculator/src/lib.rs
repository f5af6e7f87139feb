//! # MathKit Calculator
//!
//! A calculator plugin for agent orchestration frameworks: a fixed set of
//! elementary arithmetic and math operations, each advertised with a
//! stable name, a description, and a JSON input schema so an LLM-driven
//! host can discover and invoke it by name with named arguments.
//!
//! ## Design
//!
//! - **Pure operations**: every operation is a stateless delegation to a
//!   standard math primitive. Fallible operations return a tagged
//!   `Result<f64, CalcError>` instead of smuggling an error message
//!   through the numeric result slot.
//! - **Injected observability**: the service reports every invocation to
//!   an [`InvocationObserver`] handed in at construction. Production hosts
//!   use the [`TracingObserver`] default; tests inject a
//!   [`RecordingObserver`].
//! - **Static registration**: the operation table is fixed at compile time
//!   and expanded into `(Tool, ToolExecutorFn)` pairs at startup; no
//!   runtime reflection.
//!
//! ## Example
//!
//! ```ignore
//! use mathkit_calculator::{Calculator, ToolRegistry, register_calculator_tools};
//!
//! let registry = ToolRegistry::new();
//! register_calculator_tools(&registry, &Calculator::default());
//!
//! // Hand registry.get_tools() to the orchestrator for discovery, then:
//! let result = registry.execute("divide", r#"{"a": 1, "b": 3}"#.to_string()).await;
//! ```

pub mod error;
pub mod observer;
pub mod registry;
pub mod service;
pub mod tools;

pub use error::CalcError;
pub use observer::{
    InvocationObserver, InvocationRecord, NoopObserver, RecordingObserver, TracingObserver,
};
pub use registry::ToolRegistry;
pub use service::Calculator;
pub use tools::{calculator_tools, register_calculator_tools};

// Re-export the host-facing contract types for convenience
pub use mathkit_core::{Tool, ToolError, ToolExecutorFn, ToolResult};

//! Tool system and built-in tools

pub mod base;
pub mod builtin;
pub mod registry;

pub use base::{FunctionDefinition, Tool, ToolCall, ToolDefinition, ToolExample, ToolExecutor, ToolResult};
pub use builtin::{verify_citation, verify_citation_with_config};
pub use registry::{register_tools, ToolFactory, ToolHost, ToolRegistry};

//! Invocation failures ([`ToolError`]) and JSON-RPC protocol failures
//! ([`McpError`]) are kept apart: the first becomes tool result text, the
//! second a JSON-RPC error object.

mod mcp_error;
mod tool_error;

pub use mcp_error::{ErrorCode, McpError};
pub use tool_error::{ToolError, ToolErrorKind};

// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolhive::prelude::*;` to get started quickly.

pub use crate::error::ToolError;
pub use crate::tool::{Hive, Tool, ToolResult};
pub use crate::tools::{FilesystemTool, JsonTool, NetworkTool, default_hive};

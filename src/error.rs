// ABOUTME: Defines error types for the toolhive library using thiserror.
// ABOUTME: Tool failures surface as sentinel results, so the enum stays small.

/// Errors from tool operations.
///
/// The hive itself never returns these: a failed lookup is `None` and a
/// failed tool run is an error-flagged [`ToolResult`](crate::ToolResult).
/// The variants exist so that log lines and sentinel messages share one
/// wording.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

// ABOUTME: Defines the Tool trait - a named, independently invokable capability.
// ABOUTME: Tools have a name, description, and async execute over JSON params.

use async_trait::async_trait;

use super::ToolResult;

/// A named unit of behavior that a hive can dispatch to.
///
/// Parameters arrive as a JSON value with a tool-specific shape; each tool
/// deserializes and validates its own. Multi-action tools model their shape
/// as a serde-tagged enum, keeping "one name, many actions" ergonomics with
/// typed payloads. Callers learn a tool's shape from its description, not
/// from a shared schema.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description.
    fn description(&self) -> &str;

    /// Execute the tool with the given parameters.
    ///
    /// The default body is a placeholder for implementations under
    /// construction: it logs the invocation and produces the null result.
    /// Built-in tools convert their internal failures into error-flagged
    /// results rather than returning `Err`; the contract does not forbid a
    /// custom tool from erroring.
    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        tracing::info!(tool = %self.name(), "tool invoked without behavior");
        Ok(ToolResult::null())
    }
}

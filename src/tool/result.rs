// ABOUTME: Defines the ToolResult type - a sentinel-carrying structure for
// ABOUTME: tool outcomes with a JSON payload, error flag, and metadata.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Result of a tool execution.
///
/// The payload is an unconstrained JSON value: tools return strings,
/// arrays, booleans, objects, or null. A recoverable failure inside a tool
/// becomes an error-flagged result whose payload is the failure message,
/// so "no result" and "failed" both surface as data rather than as errors
/// crossing the hive boundary.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The output payload.
    pub content: Value,

    /// Whether this result represents a failure.
    pub is_error: bool,

    /// Optional metadata about the execution.
    pub metadata: HashMap<String, Value>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Value::String(content.into()),
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create a successful result from any JSON-convertible payload.
    pub fn json(content: impl Into<Value>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create the null result.
    pub fn null() -> Self {
        Self {
            content: Value::Null,
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create a failure result carrying a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: Value::String(message.into()),
            is_error: true,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }

    /// The payload as a string slice, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        self.content.as_str()
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::null()
    }
}

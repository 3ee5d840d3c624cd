// ABOUTME: JsonTool - parse, stringify, and validate JSON text.
// ABOUTME: Parse failures become error-flagged results; validate never fails.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Tool for JSON processing.
pub struct JsonTool;

#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum JsonRequest {
    Parse { data: String },
    Stringify { data: serde_json::Value },
    Validate { data: String },
}

#[async_trait]
impl Tool for JsonTool {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON processing. Actions: parse (text to a JSON value), stringify \
         (JSON value to pretty-printed text), validate (is the text valid JSON)."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request: JsonRequest = match serde_json::from_value(params) {
            Ok(request) => request,
            Err(e) => {
                let err = ToolError::from(e);
                error!(tool = "json", error = %err, "rejected parameters");
                return Ok(ToolResult::error(err.to_string()));
            }
        };

        let result = match request {
            JsonRequest::Parse { data } => {
                info!(tool = "json", action = "parse", "parsing JSON text");
                match serde_json::from_str::<serde_json::Value>(&data) {
                    Ok(value) => ToolResult::json(value),
                    Err(e) => {
                        error!(tool = "json", error = %e, "failed to parse JSON");
                        ToolResult::error(format!("failed to parse JSON: {}", e))
                    }
                }
            }
            JsonRequest::Stringify { data } => {
                info!(tool = "json", action = "stringify", "stringifying JSON value");
                match serde_json::to_string_pretty(&data) {
                    Ok(text) => ToolResult::text(text),
                    Err(e) => {
                        error!(tool = "json", error = %e, "failed to stringify JSON");
                        ToolResult::error(format!("failed to stringify JSON: {}", e))
                    }
                }
            }
            JsonRequest::Validate { data } => {
                info!(tool = "json", action = "validate", "validating JSON text");
                let valid = serde_json::from_str::<serde::de::IgnoredAny>(&data).is_ok();
                ToolResult::json(valid)
            }
        };
        Ok(result)
    }
}

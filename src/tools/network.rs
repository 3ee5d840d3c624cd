// ABOUTME: NetworkTool - simulated reachability and fetch operations.
// ABOUTME: Deliberately non-functional stand-ins, not a real HTTP client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Tool for network operations.
///
/// Both actions are demonstration-only placeholders: `ping` always reports
/// reachable and `fetch` returns a canned string. Real HTTP belongs in a
/// purpose-built tool, not here.
pub struct NetworkTool;

#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum NetRequest {
    Ping {
        #[serde(default = "default_host")]
        host: String,
    },
    Fetch {
        url: String,
    },
}

fn default_host() -> String {
    "localhost".to_string()
}

#[async_trait]
impl Tool for NetworkTool {
    fn name(&self) -> &str {
        "network"
    }

    fn description(&self) -> &str {
        "Simulated network operations. Actions: ping (reachability check for a \
         host, defaults to localhost), fetch (placeholder content retrieval \
         for a url)."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request: NetRequest = match serde_json::from_value(params) {
            Ok(request) => request,
            Err(e) => {
                let err = ToolError::from(e);
                error!(tool = "network", error = %err, "rejected parameters");
                return Ok(ToolResult::error(err.to_string()));
            }
        };

        let result = match request {
            NetRequest::Ping { host } => {
                info!(tool = "network", action = "ping", host = %host, "simulated ping");
                ToolResult::json(true)
            }
            NetRequest::Fetch { url } => {
                info!(tool = "network", action = "fetch", url = %url, "simulated fetch");
                ToolResult::text(format!("Fetched content from {}", url))
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_defaults_to_localhost() {
        let tool = NetworkTool;
        let result = tool
            .execute(serde_json::json!({ "action": "ping" }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, serde_json::json!(true));
    }

    #[tokio::test]
    async fn test_ping_named_host() {
        let tool = NetworkTool;
        let result = tool
            .execute(serde_json::json!({ "action": "ping", "host": "example.com" }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, serde_json::json!(true));
    }

    #[tokio::test]
    async fn test_fetch_returns_placeholder() {
        let tool = NetworkTool;
        let result = tool
            .execute(serde_json::json!({ "action": "fetch", "url": "https://example.com" }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(
            result.as_str(),
            Some("Fetched content from https://example.com")
        );
    }

    #[tokio::test]
    async fn test_fetch_requires_url() {
        let tool = NetworkTool;
        let result = tool
            .execute(serde_json::json!({ "action": "fetch" }))
            .await
            .unwrap();

        assert!(result.is_error);
    }
}

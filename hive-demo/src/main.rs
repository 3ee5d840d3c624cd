// ABOUTME: Scripted demonstration of the toolhive dispatch registry.
// ABOUTME: Walks through built-in tools, a custom tool, and tool chaining.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use toolhive::prelude::*;

// ============================================================================
// Custom Tool
// ============================================================================

/// Uppercases a message and hands it back.
struct CustomTool;

#[async_trait]
impl Tool for CustomTool {
    fn name(&self) -> &str {
        "custom"
    }

    fn description(&self) -> &str {
        "Uppercases a message. Parameters: message (string)."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            #[serde(default = "default_message")]
            message: String,
        }
        fn default_message() -> String {
            "hello from the hive".to_string()
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(format!(
            "processed message: {}",
            params.message.to_uppercase()
        )))
    }
}

// ============================================================================
// Demo scenarios
// ============================================================================

async fn demo_default_tools() -> Result<()> {
    println!("\n=== default tools ===");
    let hive = default_hive();
    println!("registered tools: {:?}", hive.list());

    if let Some(result) = hive
        .execute("filesystem", json!({"action": "list", "path": "."}))
        .await
    {
        println!("current directory entries: {}", result?.content);
    }

    if let Some(result) = hive
        .execute("network", json!({"action": "ping", "host": "example.com"}))
        .await
    {
        println!("ping result: {}", result?.content);
    }

    if let Some(result) = hive
        .execute("network", json!({"action": "fetch", "url": "https://example.com"}))
        .await
    {
        println!("fetch result: {}", result?.content);
    }

    Ok(())
}

async fn demo_custom_tool() -> Result<()> {
    println!("\n=== custom tool ===");
    let hive = Hive::new();
    hive.register(CustomTool);

    if let Some(result) = hive
        .execute("custom", json!({"message": "hello, toolhive!"}))
        .await
    {
        println!("custom tool result: {}", result?.content);
    }

    // a name nobody registered resolves to nothing
    let missing = hive.execute("browser", json!({"action": "navigate"})).await;
    println!("unregistered tool result: {:?}", missing.is_none());

    Ok(())
}

/// Chains tools through their payloads: stringify a value, write it to a
/// file, read it back, parse it.
async fn demo_tool_chaining() -> Result<()> {
    println!("\n=== tool chaining ===");
    let hive = Hive::new();
    hive.register(JsonTool);
    // the filesystem tool can also be borrowed from the default hive
    if let Some(filesystem) = default_hive().get("filesystem") {
        hive.register_arc(filesystem);
    }

    let data = json!({
        "user": {"name": "Kim Younghee", "email": "kim@example.com", "roles": ["admin", "user"]},
        "settings": {"theme": "dark", "notifications": true}
    });

    let text = hive
        .execute("json", json!({"action": "stringify", "data": data}))
        .await
        .expect("json tool registered")?;

    let path = std::env::temp_dir().join("hive-demo").join("test_data.json");
    let path = path.to_string_lossy().into_owned();
    hive.execute(
        "filesystem",
        json!({"action": "write", "path": &path, "content": text.content.as_str().unwrap_or("")}),
    )
    .await
    .expect("filesystem tool registered")?;
    println!("wrote JSON file: {}", path);

    let read = hive
        .execute("filesystem", json!({"action": "read", "path": &path}))
        .await
        .expect("filesystem tool registered")?;

    let parsed = hive
        .execute("json", json!({"action": "parse", "data": read.content.as_str().unwrap_or("")}))
        .await
        .expect("json tool registered")?;
    println!("parsed user: {}", parsed.content["user"]);
    println!("theme setting: {}", parsed.content["settings"]["theme"]);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting toolhive demo");
    println!("toolhive demo");

    demo_default_tools().await?;
    demo_custom_tool().await?;
    demo_tool_chaining().await?;

    println!("\nall demos complete");
    Ok(())
}

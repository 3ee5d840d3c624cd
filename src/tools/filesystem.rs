// ABOUTME: FilesystemTool - list, read, and write files under one tool name.
// ABOUTME: Every internal failure becomes an error-flagged result, never an Err.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Tool for filesystem operations.
pub struct FilesystemTool;

#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum FsRequest {
    List {
        path: String,
        #[serde(default)]
        glob: Option<String>,
    },
    Read {
        path: String,
    },
    Write {
        path: String,
        content: String,
    },
}

impl FilesystemTool {
    fn list_directory(path: &str, pattern: Option<&str>) -> ToolResult {
        let pattern = match pattern {
            Some(raw) => match glob::Pattern::new(raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    error!(tool = "filesystem", pattern = %raw, error = %e, "bad glob pattern");
                    return ToolResult::error(format!("bad glob pattern '{}': {}", raw, e));
                }
            },
            None => None,
        };

        match std::fs::read_dir(path) {
            Ok(entries) => {
                let mut names: Vec<String> = entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .filter(|name| pattern.as_ref().is_none_or(|p| p.matches(name)))
                    .collect();
                names.sort();
                ToolResult::json(names)
            }
            Err(e) => {
                error!(tool = "filesystem", path = %path, error = %e, "failed to list directory");
                ToolResult::error(format!("failed to list {}: {}", path, e))
            }
        }
    }

    fn read_file(path: &str) -> ToolResult {
        match std::fs::read_to_string(path) {
            Ok(content) => ToolResult::text(content),
            Err(e) => {
                error!(tool = "filesystem", path = %path, error = %e, "failed to read file");
                ToolResult::error(format!("failed to read {}: {}", path, e))
            }
        }
    }

    fn write_file(path: &str, content: &str) -> ToolResult {
        // Create parent directories if needed
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    error!(tool = "filesystem", path = %path, error = %e, "failed to create parent directories");
                    return ToolResult::error(format!("failed to write {}: {}", path, e));
                }
            }
        }

        match std::fs::write(path, content) {
            Ok(()) => ToolResult::json(true).with_metadata("bytes", content.len()),
            Err(e) => {
                error!(tool = "filesystem", path = %path, error = %e, "failed to write file");
                ToolResult::error(format!("failed to write {}: {}", path, e))
            }
        }
    }
}

#[async_trait]
impl Tool for FilesystemTool {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn description(&self) -> &str {
        "Filesystem operations. Actions: list (enumerate entry names at a path, \
         optionally filtered by a glob), read (full textual content of a file), \
         write (overwrite a file with content, creating parent directories)."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request: FsRequest = match serde_json::from_value(params) {
            Ok(request) => request,
            Err(e) => {
                let err = ToolError::from(e);
                error!(tool = "filesystem", error = %err, "rejected parameters");
                return Ok(ToolResult::error(err.to_string()));
            }
        };

        let result = match request {
            FsRequest::List { path, glob } => {
                info!(tool = "filesystem", action = "list", path = %path, "listing directory");
                Self::list_directory(&path, glob.as_deref())
            }
            FsRequest::Read { path } => {
                info!(tool = "filesystem", action = "read", path = %path, "reading file");
                Self::read_file(&path)
            }
            FsRequest::Write { path, content } => {
                info!(tool = "filesystem", action = "write", path = %path, "writing file");
                Self::write_file(&path, &content)
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.txt");
        let tool = FilesystemTool;

        let written = tool
            .execute(serde_json::json!({
                "action": "write",
                "path": path.to_str().unwrap(),
                "content": "Hello, world!"
            }))
            .await
            .unwrap();
        assert!(!written.is_error);
        assert_eq!(written.content, serde_json::json!(true));
        assert_eq!(written.metadata["bytes"], 13);

        let read = tool
            .execute(serde_json::json!({
                "action": "read",
                "path": path.to_str().unwrap()
            }))
            .await
            .unwrap();
        assert!(!read.is_error);
        assert_eq!(read.as_str(), Some("Hello, world!"));
    }

    #[tokio::test]
    async fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dir").join("test.txt");

        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "write",
                "path": path.to_str().unwrap(),
                "content": "nested content"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_sentinel() {
        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "read",
                "path": "/nonexistent/file.txt"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.as_str().unwrap().contains("failed to read"));
    }

    #[tokio::test]
    async fn test_list_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();

        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "list",
                "path": dir.path().to_str().unwrap()
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, serde_json::json!(["a.txt", "b.txt"]));
    }

    #[tokio::test]
    async fn test_list_with_glob_filter() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("main.rs"), "").unwrap();

        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "list",
                "path": dir.path().to_str().unwrap(),
                "glob": "*.txt"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, serde_json::json!(["notes.txt"]));
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_sentinel() {
        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "list",
                "path": "/nonexistent/dir"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_unknown_action_is_sentinel() {
        let tool = FilesystemTool;
        let result = tool
            .execute(serde_json::json!({
                "action": "delete",
                "path": "/tmp/whatever"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.as_str().unwrap().contains("invalid parameters"));
    }
}

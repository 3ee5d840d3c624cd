// ABOUTME: Implements the Hive - a shared container mapping tool names to
// ABOUTME: tool instances, with registration, lookup, and dispatch by name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use super::{Tool, ToolResult};
use crate::error::ToolError;

#[derive(Default)]
struct Tools {
    by_name: HashMap<String, Arc<dyn Tool>>,
    // registration order of the names in by_name
    order: Vec<String>,
}

/// A shared registry of tools, dispatched by name.
///
/// Cloning a `Hive` shares its state. The inner lock is held only to
/// mutate or snapshot the map, never across an await point; a tool runs
/// outside the lock.
#[derive(Default)]
pub struct Hive {
    inner: Arc<RwLock<Tools>>,
}

impl Hive {
    /// Create a new empty hive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name.
    ///
    /// Registering a name twice silently replaces the earlier tool, last
    /// write wins. The name keeps its original position in [`list`] order.
    ///
    /// [`list`]: Hive::list
    pub fn register<T: Tool + 'static>(&self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    /// Register a tool from an Arc.
    pub fn register_arc(&self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        let mut tools = self.inner.write().expect("hive lock poisoned");
        if tools.by_name.insert(name.clone(), tool).is_none() {
            tools.order.push(name.clone());
        }
        info!(tool = %name, "tool registered");
    }

    /// Unregister a tool by name. A no-op when the name is absent.
    pub fn unregister(&self, name: &str) {
        let mut tools = self.inner.write().expect("hive lock poisoned");
        if tools.by_name.remove(name).is_some() {
            tools.order.retain(|n| n != name);
        }
    }

    /// Get a tool by name. Logs a warning and returns `None` on a miss.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.inner.read().expect("hive lock poisoned");
        let tool = tools.by_name.get(name).cloned();
        if tool.is_none() {
            warn!("{}", ToolError::NotFound(name.to_string()));
        }
        tool
    }

    /// List all registered tool names in registration order.
    pub fn list(&self) -> Vec<String> {
        let tools = self.inner.read().expect("hive lock poisoned");
        tools.order.clone()
    }

    /// Get all registered tools in registration order.
    pub fn all(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.inner.read().expect("hive lock poisoned");
        tools
            .order
            .iter()
            .filter_map(|name| tools.by_name.get(name).cloned())
            .collect()
    }

    /// Get the number of registered tools.
    pub fn count(&self) -> usize {
        let tools = self.inner.read().expect("hive lock poisoned");
        tools.by_name.len()
    }

    /// Execute a tool by name, forwarding `params` verbatim.
    ///
    /// Returns `None` when the name is not registered (logged by [`get`],
    /// never an error) and otherwise the tool's own result, untouched.
    /// A missing tool and a tool that produced nothing are distinguished
    /// only here, not in the payload.
    ///
    /// [`get`]: Hive::get
    pub async fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Option<Result<ToolResult, anyhow::Error>> {
        let tool = self.get(name)?;
        Some(tool.execute(params).await)
    }
}

impl Clone for Hive {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

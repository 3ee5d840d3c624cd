// ABOUTME: Root module for toolhive - a named-tool dispatch library.
// ABOUTME: Re-exports all public types from submodules.

pub mod error;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::ToolError;
pub use tool::{Hive, Tool, ToolResult};
pub use tools::default_hive;

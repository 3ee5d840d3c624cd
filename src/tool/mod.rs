// ABOUTME: Tool module - defines the tool contract, result type, and hive.
// ABOUTME: Core abstraction for named, independently invokable capabilities.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;

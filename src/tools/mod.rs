// ABOUTME: Built-in tools and the process-wide default hive.
// ABOUTME: Includes filesystem, simulated network, and JSON tools.

mod filesystem;
mod json;
mod network;

pub use filesystem::FilesystemTool;
pub use json::JsonTool;
pub use network::NetworkTool;

use std::sync::OnceLock;

use crate::tool::Hive;

static DEFAULT_HIVE: OnceLock<Hive> = OnceLock::new();

/// The process-wide hive, pre-populated with the built-in tools.
///
/// Built-ins are registered exactly once, before the first caller observes
/// the instance; concurrent first access is race-free. The hive stays
/// mutable for its whole lifetime, so callers may register further tools
/// into it.
pub fn default_hive() -> &'static Hive {
    DEFAULT_HIVE.get_or_init(|| {
        let hive = Hive::new();
        hive.register(FilesystemTool);
        hive.register(NetworkTool);
        hive.register(JsonTool);
        hive
    })
}

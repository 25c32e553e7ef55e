//! Server introspection tools

pub mod info;
pub mod myself;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register the server introspection tools with the registry
pub fn register_server_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(info::GetServerInfoTool::new())?;
    registry.register(myself::GetMyselfTool::new())?;
    Ok(())
}

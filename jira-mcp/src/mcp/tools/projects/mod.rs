//! Project tools for MCP operations

pub mod components;
pub mod create;
pub mod create_component;
pub mod create_version;
pub mod get;
pub mod list;
pub mod versions;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register all project-related tools with the registry
pub fn register_project_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(list::GetProjectsTool::new())?;
    registry.register(get::GetProjectTool::new())?;
    registry.register(create::CreateProjectTool::new())?;
    registry.register(components::GetProjectComponentsTool::new())?;
    registry.register(versions::GetProjectVersionsTool::new())?;
    registry.register(create_component::CreateComponentTool::new())?;
    registry.register(create_version::CreateVersionTool::new())?;
    Ok(())
}

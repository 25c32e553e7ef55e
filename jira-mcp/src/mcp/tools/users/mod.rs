//! Account and group tools

pub mod add_to_group;
pub mod get;
pub mod groups;
pub mod search;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register all account-related tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(get::GetUserTool::new())?;
    registry.register(search::SearchUsersTool::new())?;
    registry.register(groups::GetGroupsTool::new())?;
    registry.register(add_to_group::AddUserToGroupTool::new())?;
    Ok(())
}

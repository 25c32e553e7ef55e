//! Agile board and sprint tools

pub mod add_issues_to_sprint;
pub mod boards;
pub mod create_board;
pub mod create_sprint;
pub mod sprints;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register all agile tools with the registry
pub fn register_agile_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(boards::GetBoardsTool::new())?;
    registry.register(create_board::CreateBoardTool::new())?;
    registry.register(sprints::GetSprintsTool::new())?;
    registry.register(create_sprint::CreateSprintTool::new())?;
    registry.register(add_issues_to_sprint::AddIssuesToSprintTool::new())?;
    Ok(())
}

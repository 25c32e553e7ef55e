//! Static metadata and taxonomy tools
//!
//! These enumerate remote vocabularies (fields, issue types, priorities,
//! statuses, resolutions) and the caller's saved filters. All read-only.

pub mod favorite_filters;
pub mod fields;
pub mod issue_types;
pub mod priorities;
pub mod resolutions;
pub mod statuses;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register all metadata tools with the registry
pub fn register_metadata_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(favorite_filters::GetFavoriteFiltersTool::new())?;
    registry.register(fields::GetFieldsTool::new())?;
    registry.register(issue_types::GetIssueTypesTool::new())?;
    registry.register(priorities::GetPrioritiesTool::new())?;
    registry.register(statuses::GetStatusesTool::new())?;
    registry.register(resolutions::GetResolutionsTool::new())?;
    Ok(())
}

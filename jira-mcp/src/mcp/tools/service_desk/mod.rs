//! Service-desk discovery tools
//!
//! The service desk is an optional subsystem. Its absence (the remote
//! answers 404 or 501 under the service-desk root) is reported as an empty
//! result rather than an error; this is the single sanctioned place a
//! remote failure is swallowed. Any other failure still propagates.

pub mod list;
pub mod support;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register the service-desk discovery tools with the registry
pub fn register_service_desk_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(support::CheckServiceDeskSupportTool::new())?;
    registry.register(list::GetServiceDesksTool::new())?;
    Ok(())
}

//! MCP tool catalog
//!
//! Tools are grouped by the remote entity they operate on. Each domain
//! module owns its tool implementations and a registration function; the
//! full catalog is assembled by [`register_all`].

pub mod agile;
pub mod issues;
pub mod metadata;
pub mod projects;
pub mod server;
pub mod service_desk;
pub mod users;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register the complete tool catalog.
///
/// Fails on a duplicate tool name, which aborts server startup.
pub fn register_all(registry: &mut ToolRegistry) -> Result<()> {
    server::register_server_tools(registry)?;
    projects::register_project_tools(registry)?;
    issues::register_issue_tools(registry)?;
    users::register_user_tools(registry)?;
    metadata::register_metadata_tools(registry)?;
    agile::register_agile_tools(registry)?;
    service_desk::register_service_desk_tools(registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_has_no_duplicates() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry).unwrap();

        let names = registry.list_tool_names();
        assert_eq!(names.len(), registry.len());
        assert!(registry.get_tool("search_issues").is_some());
        assert!(registry.get_tool("get_issue").is_some());
        assert!(registry.get_tool("create_issue").is_some());
        assert!(registry.get_tool("transition_issue").is_some());
        assert!(registry.get_tool("get_service_desks").is_some());
        assert!(registry.get_tool("add_issues_to_sprint").is_some());
    }

    #[test]
    fn test_catalog_classifies_mutations() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry).unwrap();

        for (name, read_only) in [
            ("search_issues", true),
            ("get_projects", true),
            ("create_project", false),
            ("update_issue", false),
            ("assign_issue", false),
            ("get_issue_transitions", true),
            ("transition_issue", false),
            ("add_comment", false),
            ("get_fields", true),
            ("create_sprint", false),
            ("get_watchers", true),
            ("add_watcher", false),
            ("check_service_desk_support", true),
        ] {
            let tool = registry.get_tool(name).unwrap();
            assert_eq!(tool.read_only(), read_only, "classification of {name}");
        }
    }
}

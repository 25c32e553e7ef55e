//! Issue tools for MCP operations
//!
//! Everything that reads or mutates a single issue: search, detail,
//! creation, field updates, workflow transitions, comments, links,
//! attachments, watchers, and worklogs.

pub mod add_comment;
pub mod add_watcher;
pub mod add_worklog;
pub mod assign;
pub mod attachment;
pub mod comments;
pub mod create;
pub mod create_simple;
pub mod get;
pub mod link;
pub mod search;
pub mod transition;
pub mod transitions;
pub mod update;
pub mod watchers;
pub mod worklogs;

use crate::error::Result;
use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(search::SearchIssuesTool::new())?;
    registry.register(get::GetIssueTool::new())?;
    registry.register(create::CreateIssueTool::new())?;
    registry.register(create_simple::CreateSimpleIssueTool::new())?;
    registry.register(update::UpdateIssueTool::new())?;
    registry.register(assign::AssignIssueTool::new())?;
    registry.register(transitions::GetIssueTransitionsTool::new())?;
    registry.register(transition::TransitionIssueTool::new())?;
    registry.register(comments::GetIssueCommentsTool::new())?;
    registry.register(add_comment::AddCommentTool::new())?;
    registry.register(link::CreateIssueLinkTool::new())?;
    registry.register(attachment::AddAttachmentTool::new())?;
    registry.register(watchers::GetWatchersTool::new())?;
    registry.register(add_watcher::AddWatcherTool::new())?;
    registry.register(worklogs::GetWorklogsTool::new())?;
    registry.register(add_worklog::AddWorklogTool::new())?;
    Ok(())
}

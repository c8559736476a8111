//! JSON output formatting for quickcap.

use crate::error::QuickcapError;
use crate::task::{Task, TaskDraft};

/// Format a parsed draft as JSON
///
/// # Errors
///
/// Returns `QuickcapError::Parse` if JSON serialization fails.
pub fn format_draft_json(draft: &TaskDraft) -> Result<String, QuickcapError> {
    Ok(serde_json::to_string_pretty(draft)?)
}

/// Format a task record as JSON
///
/// # Errors
///
/// Returns `QuickcapError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, QuickcapError> {
    Ok(serde_json::to_string_pretty(task)?)
}

#[cfg(test)]
mod tests {
    use crate::task::Priority;

    use super::*;

    #[test]
    fn test_draft_json_has_camel_case_fields() {
        let draft = TaskDraft {
            name: "Buy milk".to_string(),
            assignee: None,
            due_date: None,
            priority: Priority::P1,
        };
        let json = format_draft_json(&draft).unwrap();
        assert!(json.contains("\"name\": \"Buy milk\""));
        assert!(json.contains("\"dueDate\": null"));
        assert!(json.contains("\"assignee\": null"));
        assert!(json.contains("\"priority\": \"P1\""));
    }

    #[test]
    fn test_task_json_includes_record_fields() {
        let task = Task::from_draft(TaskDraft::named("Buy milk"));
        let json = format_task_json(&task).unwrap();
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"completed\": false"));
        assert!(json.contains("\"createdAt\""));
    }
}

use chrono::Local;
use colored::Colorize;

use crate::core::{format_due, Schedulable};
use crate::task::{Priority, Task, TaskDraft};

/// Format a parsed draft as a colored field listing
#[must_use]
pub fn format_draft_pretty(draft: &TaskDraft) -> String {
    let mut output = format!("{}\n", "Parsed task".yellow().bold());
    output.push_str(&format!("  {} {}\n", "Name:".cyan().bold(), draft.name));

    if let Some(assignee) = &draft.assignee {
        output.push_str(&format!("  {} {assignee}\n", "Assignee:".magenta()));
    }
    output.push_str(&format!("  {} {}\n", "Due:".cyan(), due_label(draft)));
    output.push_str(&format!(
        "  {} {}\n",
        "Priority:".red().bold(),
        priority_label(draft.priority)
    ));

    output
}

/// Format a task record as a colored field listing
#[must_use]
pub fn format_task_pretty(task: &Task) -> String {
    let checkbox = if task.completed { "[x]".green() } else { "[ ]".white() };
    let mut output = format!("{} {}\n", checkbox, task.name.bold());
    output.push_str(&format!("  {} {}\n", "ID:".dimmed(), task.id.dimmed()));

    if let Some(assignee) = &task.assignee {
        output.push_str(&format!("  {} {assignee}\n", "Assignee:".magenta()));
    }
    output.push_str(&format!("  {} {}\n", "Due:".cyan(), due_label(task)));
    output.push_str(&format!(
        "  {} {}\n",
        "Priority:".red().bold(),
        priority_label(task.priority)
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Created:".dimmed(),
        task.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Due date colored by urgency: red when past due, yellow when due within
/// 24 hours.
fn due_label<S: Schedulable>(item: &S) -> String {
    let label = format_due(item.due(), Local::now().naive_local());
    if item.is_past_due() {
        label.red().to_string()
    } else if item.is_due_soon() {
        label.yellow().to_string()
    } else {
        label
    }
}

fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::P1 => priority.to_string().red().bold().to_string(),
        Priority::P2 => priority.to_string().yellow().to_string(),
        Priority::P3 => priority.to_string(),
        Priority::P4 => priority.to_string().dimmed().to_string(),
    }
}

//! Output formatting for quickcap.
//!
//! This module provides formatters for displaying parsed drafts and task
//! records as colored text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickcapError;
use crate::task::{Task, TaskDraft};

pub use json::{format_draft_json, format_task_json};
pub use pretty::{format_draft_pretty, format_task_pretty};

/// Format a draft based on output format.
///
/// # Errors
///
/// Returns `QuickcapError::Parse` if JSON serialization fails.
pub fn format_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String, QuickcapError> {
    match format {
        OutputFormat::Pretty => Ok(format_draft_pretty(draft)),
        OutputFormat::Json => format_draft_json(draft),
    }
}

/// Format a task record based on output format.
///
/// # Errors
///
/// Returns `QuickcapError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, QuickcapError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

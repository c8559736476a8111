//! Capture command implementation.
//!
//! Parses the input text and renders either the raw draft or a full task
//! record in the requested output format.

use crate::cli::args::OutputFormat;
use crate::error::QuickcapError;
use crate::nlp::parse;
use crate::output;
use crate::task::Task;

/// Execute the capture command.
///
/// # Errors
///
/// Returns `QuickcapError::Parse` if JSON serialization fails.
pub fn capture(text: &str, draft_only: bool, format: OutputFormat) -> Result<String, QuickcapError> {
    let draft = parse(text);

    if draft_only {
        return output::format_draft(&draft, format);
    }

    let task = Task::from_draft(draft);
    output::format_task(&task, format)
}

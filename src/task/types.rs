use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Schedulable;
use crate::error::QuickcapError;

/// Task priority levels, P1 (most urgent) through P4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent.
    P1,
    /// High.
    P2,
    /// Normal (the default when the input names none).
    #[default]
    P3,
    /// Low.
    P4,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        })
    }
}

impl FromStr for Priority {
    type Err = QuickcapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            "P4" => Ok(Self::P4),
            _ => Err(QuickcapError::InvalidPriority(s.to_string())),
        }
    }
}

/// Structured draft produced by the parser.
///
/// Serializes with camelCase field names so the JSON shape matches the
/// network parser the caller may try first: the same four logical fields,
/// absent values as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Human-readable task name; the leftover text after extraction.
    pub name: String,
    /// A single capitalized word token, if one was recognized.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Due moment with minute resolution (seconds always zero).
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    /// Defaults to `P3` when the input names none.
    #[serde(default)]
    pub priority: Priority,
}

impl TaskDraft {
    /// A draft carrying only a name, everything else at its default.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Schedulable for TaskDraft {
    fn due(&self) -> Option<NaiveDateTime> {
        self.due_date
    }
}

/// A full task record, ready for a caller to store or display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Promote a draft to a record: attach a fresh id and creation
    /// timestamp, with the completion flag cleared.
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            assignee: draft.assignee,
            due_date: draft.due_date,
            priority: draft.priority,
            completed: false,
            created_at: Local::now(),
        }
    }
}

impl Schedulable for Task {
    fn due(&self) -> Option<NaiveDateTime> {
        self.due_date
    }
}

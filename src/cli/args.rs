use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quickcap")]
#[command(about = "Deterministic natural language task capture")]
#[command(long_about = "quickcap - deterministic natural language task capture

Turns a free-form task sentence into a structured task record using layered
pattern matching - no network, no model call, same answer every time.

QUICK START:
  quickcap \"Buy milk P1\"
  quickcap Call client for Rajeev tomorrow 5pm
  quickcap -o json \"Finish landing page Aman by 11pm 20th June\"

SUPPORTED PATTERNS:
  Priority:   P1 P2 P3 P4 (defaults to P3)
  Assignee:   to/for/by + a capitalized name, or any capitalized word
  Dates:      tomorrow 5pm, today 9am, 20th June, dec 15, 6/1/24
  Times:      11pm, 7:30am, 15:00 (dates without a time due at 23:59)

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version)]
pub struct Cli {
    /// The task description in natural language
    ///
    /// Multiple arguments are joined with spaces, so quoting is optional:
    ///   quickcap Buy milk P1
    #[arg(required = true, num_args = 1.., value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output format for the captured task
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// Print the parsed draft only, without attaching an id or timestamp
    #[arg(long)]
    pub draft_only: bool,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

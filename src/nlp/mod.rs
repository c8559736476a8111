//! Natural language parsing for task capture.
//!
//! This module turns free-form task sentences into structured drafts:
//! - "Buy milk P1"
//! - "Call client for Rajeev tomorrow 5pm"
//! - "Finish landing page Aman by 11pm 20th June"

mod parser;

pub use parser::{parse, parse_at};

//! Natural language task parser.
//!
//! Parses strings like "Finish landing page Aman by 11pm 20th June" into
//! structured task data through three ordered extraction passes (priority,
//! assignee, due date). Each pass deletes its matched span from a remaining
//! text buffer; whatever survives becomes the task name.

use std::ops::Range;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::{end_of_day, month_number, parse_time_of_day, promote_year};
use crate::task::{Priority, TaskDraft};

// Compiled regex patterns

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bp[1-4]\b").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static ASSIGNEE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // preposition + capitalized name, e.g. "for Rajeev"
    Regex::new(r"\b(?i:to|for|by)\s+([A-Z][a-z]+)\b")
        .unwrap_or_else(|e| panic!("Invalid assignee regex: {e}"))
});

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+\b")
        .unwrap_or_else(|e| panic!("Invalid capitalized word regex: {e}"))
});

static TOMORROW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btomorrow\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:am|pm))")
        .unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}"))
});

static TODAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btoday\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:am|pm))")
        .unwrap_or_else(|e| panic!("Invalid today regex: {e}"))
});

// day-then-month, e.g. "20th June", "11pm 20th June", "1st feb 9:15am 2027"
static DAY_MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(\d{1,2}(?::\d{2})?\s*(?:am|pm))\s+)?(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\.?(?:\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:am|pm)?))?(?:\s+(\d{4}))?\b",
    )
    .unwrap_or_else(|e| panic!("Invalid day-month regex: {e}"))
});

// month-then-day, e.g. "dec 15", "jan 5 2027 9am"
static MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:\s+(\d{4}))?(?:\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:am|pm)?))?\b",
    )
    .unwrap_or_else(|e| panic!("Invalid month-day regex: {e}"))
});

// numeric MM/DD or MM-DD with optional year, US ordering
static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?(?:\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:am|pm)?))?\b",
    )
    .unwrap_or_else(|e| panic!("Invalid numeric date regex: {e}"))
});

static MONTH_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
        .unwrap_or_else(|e| panic!("Invalid month token regex: {e}"))
});

static BARE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\b")
        .unwrap_or_else(|e| panic!("Invalid bare time regex: {e}"))
});

/// Parse a natural language task string into a structured draft.
///
/// Total over its input: never panics, never errors. When nothing is
/// recognized (or an extracted span turns out to name no real calendar
/// moment) the draft carries the trimmed input as its name and defaults
/// everywhere else.
///
/// # Examples
///
/// ```
/// use quickcap::{parse, Priority};
///
/// let draft = parse("Buy milk P1");
/// assert_eq!(draft.name, "Buy milk");
/// assert_eq!(draft.priority, Priority::P1);
/// assert!(draft.assignee.is_none());
/// assert!(draft.due_date.is_none());
/// ```
#[must_use]
pub fn parse(input: &str) -> TaskDraft {
    parse_at(input, Local::now().naive_local())
}

/// Parse with an explicit "now", for deterministic results.
///
/// Relative dates ("tomorrow 5pm"), missing years, and the bare-time
/// fallback all resolve against `now`.
#[must_use]
pub fn parse_at(input: &str, now: NaiveDateTime) -> TaskDraft {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return TaskDraft::default();
    }
    try_extract(trimmed, now).unwrap_or_else(|_| TaskDraft::named(trimmed))
}

/// A span matched a date pattern but names no real calendar moment.
/// Aborts the whole extraction; the caller falls back to the default draft.
struct InvalidDate;

fn try_extract(trimmed: &str, now: NaiveDateTime) -> Result<TaskDraft, InvalidDate> {
    let mut remaining = trimmed.to_string();
    let mut draft = TaskDraft::named(trimmed);

    if let Some(priority) = extract_priority(&mut remaining) {
        draft.priority = priority;
    }
    draft.assignee = extract_assignee(&mut remaining);
    draft.due_date = extract_due_date(&mut remaining, now)?;

    let leftover = collapse_whitespace(&remaining);
    if !leftover.is_empty() {
        draft.name = leftover;
    }
    Ok(draft)
}

/// First whole-word P1-P4 token, uppercased; its span is deleted.
fn extract_priority(remaining: &mut String) -> Option<Priority> {
    let (span, token) = {
        let m = PRIORITY_PATTERN.find(remaining)?;
        (m.range(), m.as_str().to_ascii_uppercase())
    };
    let priority = token.parse().ok()?;
    remaining.replace_range(span, "");
    Some(priority)
}

/// Two-tier assignee extraction.
///
/// The anchored tier deletes preposition and name together; the fallback
/// deletes only the name. The fallback never takes the word that opens the
/// text - that is the task verb, not a person.
fn extract_assignee(remaining: &mut String) -> Option<String> {
    let anchored = ASSIGNEE_PATTERN.captures(remaining).and_then(|caps| {
        let span = caps.get(0)?.range();
        let name = caps.get(1)?.as_str().to_string();
        Some((span, name))
    });
    if let Some((span, name)) = anchored {
        remaining.replace_range(span, "");
        return Some(name);
    }

    let lead = remaining.len() - remaining.trim_start().len();
    let (span, name) = CAPITALIZED_WORD
        .find_iter(remaining)
        .find(|m| m.start() != lead)
        .map(|m| (m.range(), m.as_str().to_string()))?;
    remaining.replace_range(span, "");
    Some(name)
}

/// Try each date pattern in fixed order against the stage-entry text; the
/// first match wins and its whole span is deleted.
fn extract_due_date(
    remaining: &mut String,
    now: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, InvalidDate> {
    if let Some((span, due)) = find_due_date(remaining, now)? {
        remaining.replace_range(span, "");
        return Ok(Some(due));
    }
    Ok(None)
}

fn find_due_date(
    text: &str,
    now: NaiveDateTime,
) -> Result<Option<(Range<usize>, NaiveDateTime)>, InvalidDate> {
    if let Some(caps) = TOMORROW_PATTERN.captures(text) {
        let due = resolve_relative(&caps, now.date() + Duration::days(1))?;
        return Ok(Some((match_span(&caps)?, due)));
    }
    if let Some(caps) = TODAY_PATTERN.captures(text) {
        let due = resolve_relative(&caps, now.date())?;
        return Ok(Some((match_span(&caps)?, due)));
    }
    if let Some(caps) = DAY_MONTH_PATTERN.captures(text) {
        let due = resolve_day_month(&caps, now.date())?;
        return Ok(Some((match_span(&caps)?, due)));
    }
    if let Some(caps) = MONTH_DAY_PATTERN.captures(text) {
        let due = resolve_month_day(&caps, now.date())?;
        return Ok(Some((match_span(&caps)?, due)));
    }
    if let Some(caps) = NUMERIC_DATE_PATTERN.captures(text) {
        let due = resolve_numeric(&caps, now.date())?;
        return Ok(Some((match_span(&caps)?, due)));
    }

    // A stray month name plus a bare clock time reads as "today at that
    // time"; only the time span is consumed.
    if MONTH_TOKEN.is_match(text) {
        if let Some(m) = BARE_TIME_PATTERN.find(text) {
            let time = parse_time_of_day(m.as_str()).ok_or(InvalidDate)?;
            return Ok(Some((m.range(), NaiveDateTime::new(now.date(), time))));
        }
    }

    Ok(None)
}

fn match_span(caps: &Captures<'_>) -> Result<Range<usize>, InvalidDate> {
    caps.get(0).map(|m| m.range()).ok_or(InvalidDate)
}

/// tomorrow/today carry a mandatory explicit time.
fn resolve_relative(caps: &Captures<'_>, date: NaiveDate) -> Result<NaiveDateTime, InvalidDate> {
    let time_str = caps.get(1).ok_or(InvalidDate)?.as_str();
    let time = parse_time_of_day(time_str).ok_or(InvalidDate)?;
    Ok(NaiveDateTime::new(date, time))
}

/// `[<time>] <day><ord?> <month> [<time>] [<year>]`; a leading time wins
/// over a trailing one.
fn resolve_day_month(caps: &Captures<'_>, today: NaiveDate) -> Result<NaiveDateTime, InvalidDate> {
    let day: u32 = parse_group(caps, 2)?;
    let month = month_number(caps.get(3).ok_or(InvalidDate)?.as_str()).ok_or(InvalidDate)?;
    let year: i32 = match caps.get(5) {
        Some(m) => m.as_str().parse().map_err(|_| InvalidDate)?,
        None => today.year(),
    };
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDate)?;
    let time = explicit_time(caps.get(1).or_else(|| caps.get(4)).map(|m| m.as_str()))?;
    Ok(NaiveDateTime::new(date, time))
}

/// `<month> <day><ord?> [<year>] [<time>]`.
fn resolve_month_day(caps: &Captures<'_>, today: NaiveDate) -> Result<NaiveDateTime, InvalidDate> {
    let month = month_number(caps.get(1).ok_or(InvalidDate)?.as_str()).ok_or(InvalidDate)?;
    let day: u32 = parse_group(caps, 2)?;
    let year: i32 = match caps.get(3) {
        Some(m) => m.as_str().parse().map_err(|_| InvalidDate)?,
        None => today.year(),
    };
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDate)?;
    let time = explicit_time(caps.get(4).map(|m| m.as_str()))?;
    Ok(NaiveDateTime::new(date, time))
}

/// `<m>[/-]<d>[[/-]<y>] [<time>]`, US month-first ordering, 2-digit years
/// promoted into the 2000s.
fn resolve_numeric(caps: &Captures<'_>, today: NaiveDate) -> Result<NaiveDateTime, InvalidDate> {
    let month: u32 = parse_group(caps, 1)?;
    let day: u32 = parse_group(caps, 2)?;
    let year: i32 = match caps.get(3) {
        Some(m) => promote_year(m.as_str().parse().map_err(|_| InvalidDate)?),
        None => today.year(),
    };
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDate)?;
    let time = explicit_time(caps.get(4).map(|m| m.as_str()))?;
    Ok(NaiveDateTime::new(date, time))
}

/// An absent time means end of day; a present one must resolve.
fn explicit_time(text: Option<&str>) -> Result<NaiveTime, InvalidDate> {
    match text {
        Some(t) => parse_time_of_day(t).ok_or(InvalidDate),
        None => Ok(end_of_day()),
    }
}

fn parse_group<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Result<T, InvalidDate> {
    caps.get(index)
        .ok_or(InvalidDate)?
        .as_str()
        .parse()
        .map_err(|_| InvalidDate)
}

/// Collapse whitespace runs left behind by span deletion.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

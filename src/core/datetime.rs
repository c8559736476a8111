//! Date and time helpers.
//!
//! The time-of-day resolver shared by every date pattern in the parser, the
//! month-name table, and the display formatting for due dates.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// The end-of-day moment a date without an explicit time resolves to.
#[must_use]
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default()
}

/// Parse a time-of-day expression: `<hour>[:<minute>][am|pm]`.
///
/// With a meridiem, the hour is read on the 12-hour clock (`pm` below 12
/// adds 12, `12am` is midnight); without one the hour is taken as-is on the
/// 24-hour clock. Minutes default to 0. Seconds are always 0.
///
/// Returns `None` when the digits name no real clock time.
#[must_use]
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let input = input.trim().to_ascii_lowercase();

    let (digits, meridiem) = if let Some(rest) = input.strip_suffix("pm") {
        (rest.trim_end(), Some(Meridiem::Pm))
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest.trim_end(), Some(Meridiem::Am))
    } else {
        (input.as_str(), None)
    };

    let (hour_str, minute_str) = match digits.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (digits, None),
    };

    let mut hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = match minute_str {
        Some(m) => m.parse().ok()?,
        None => 0,
    };

    match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour += 12,
        Some(Meridiem::Am) if hour == 12 => hour = 0,
        _ => {},
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

enum Meridiem {
    Am,
    Pm,
}

/// Map a month name to its number, matching on the 3-letter prefix.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Promote a 2-digit year into the 2000s; pass 3- and 4-digit years through.
#[must_use]
pub const fn promote_year(year: i32) -> i32 {
    if year < 100 {
        year + 2000
    } else {
        year
    }
}

/// Format a due moment for display relative to `now`.
///
/// "No due date", "Today at 11:00 PM", "Tomorrow at 7:30 AM", or
/// "11:00 PM, 20 June" with the year appended when it differs from now's.
#[must_use]
pub fn format_due(due: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(due) = due else {
        return "No due date".to_string();
    };

    let today = now.date();
    if due.date() == today {
        return format!("Today at {}", format_clock(due.time()));
    }
    if due.date() == today + Duration::days(1) {
        return format!("Tomorrow at {}", format_clock(due.time()));
    }

    if due.year() == now.year() {
        due.format("%-I:%M %p, %-d %B").to_string()
    } else {
        due.format("%-I:%M %p, %-d %B %Y").to_string()
    }
}

/// Format a time on the 12-hour clock, e.g. "11:00 PM".
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn test_parse_time_12hour() {
        assert_eq!(parse_time_of_day("3pm"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time_of_day("3:30pm"), NaiveTime::from_hms_opt(15, 30, 0));
        assert_eq!(parse_time_of_day("11pm"), NaiveTime::from_hms_opt(23, 0, 0));
        assert_eq!(parse_time_of_day("7:30am"), NaiveTime::from_hms_opt(7, 30, 0));
    }

    #[test]
    fn test_parse_time_midnight_noon() {
        assert_eq!(parse_time_of_day("12am"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time_of_day("12pm"), NaiveTime::from_hms_opt(12, 0, 0));
    }

    #[test]
    fn test_parse_time_spaced_meridiem() {
        assert_eq!(parse_time_of_day("5 pm"), NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(parse_time_of_day("10 AM"), NaiveTime::from_hms_opt(10, 0, 0));
    }

    #[test]
    fn test_parse_time_24hour() {
        assert_eq!(parse_time_of_day("15:00"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time_of_day("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
    }

    #[test]
    fn test_parse_time_invalid() {
        assert_eq!(parse_time_of_day("99:30"), None);
        assert_eq!(parse_time_of_day("5:99pm"), None);
        assert_eq!(parse_time_of_day("noon"), None);
        assert_eq!(parse_time_of_day(""), None);
    }

    #[test]
    fn test_month_number_prefixes() {
        assert_eq!(month_number("jan"), Some(1));
        assert_eq!(month_number("June"), Some(6));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("sept"), Some(9));
        assert_eq!(month_number("foo"), None);
        assert_eq!(month_number("ja"), None);
    }

    #[test]
    fn test_promote_year() {
        assert_eq!(promote_year(24), 2024);
        assert_eq!(promote_year(99), 2099);
        assert_eq!(promote_year(123), 123);
        assert_eq!(promote_year(2026), 2026);
    }

    #[test]
    fn test_format_due_none() {
        assert_eq!(format_due(None, at(2026, 6, 15, 10, 0)), "No due date");
    }

    #[test]
    fn test_format_due_today_and_tomorrow() {
        let now = at(2026, 6, 15, 10, 0);
        assert_eq!(
            format_due(Some(at(2026, 6, 15, 23, 0)), now),
            "Today at 11:00 PM"
        );
        assert_eq!(
            format_due(Some(at(2026, 6, 16, 7, 30)), now),
            "Tomorrow at 7:30 AM"
        );
    }

    #[test]
    fn test_format_due_same_year() {
        let now = at(2026, 3, 1, 10, 0);
        assert_eq!(
            format_due(Some(at(2026, 6, 20, 23, 0)), now),
            "11:00 PM, 20 June"
        );
    }

    #[test]
    fn test_format_due_other_year() {
        let now = at(2026, 3, 1, 10, 0);
        assert_eq!(
            format_due(Some(at(2027, 1, 5, 9, 0)), now),
            "9:00 AM, 5 January 2027"
        );
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(NaiveTime::from_hms_opt(23, 59, 0).unwrap()), "11:59 PM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
    }
}

//! Shared traits for scheduled items.

use chrono::{Duration, Local, NaiveDateTime};

/// Trait for items carrying an optional due moment.
pub trait Schedulable {
    /// Get the due date/time, if any.
    fn due(&self) -> Option<NaiveDateTime>;

    /// Check if this item's due moment has already passed.
    fn is_past_due(&self) -> bool {
        let now = Local::now().naive_local();
        self.due().is_some_and(|d| d < now)
    }

    /// Check if this item is due within the next 24 hours.
    fn is_due_soon(&self) -> bool {
        let now = Local::now().naive_local();
        self.due().is_some_and(|d| d > now && d <= now + Duration::hours(24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(Option<NaiveDateTime>);

    impl Schedulable for Item {
        fn due(&self) -> Option<NaiveDateTime> {
            self.0
        }
    }

    #[test]
    fn test_no_due_date() {
        let item = Item(None);
        assert!(!item.is_past_due());
        assert!(!item.is_due_soon());
    }

    #[test]
    fn test_past_due() {
        let item = Item(Some(Local::now().naive_local() - Duration::hours(1)));
        assert!(item.is_past_due());
        assert!(!item.is_due_soon());
    }

    #[test]
    fn test_due_soon() {
        let item = Item(Some(Local::now().naive_local() + Duration::hours(3)));
        assert!(!item.is_past_due());
        assert!(item.is_due_soon());
    }

    #[test]
    fn test_due_later() {
        let item = Item(Some(Local::now().naive_local() + Duration::days(3)));
        assert!(!item.is_past_due());
        assert!(!item.is_due_soon());
    }
}

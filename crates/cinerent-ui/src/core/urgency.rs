//! Due-date urgency for reminders.

use chrono::{DateTime, Duration, Utc};

/// Notice rendered next to urgent reminders.
pub const URGENT_NOTICE: &str = "Please return immediately";

/// Remaining time at or below which a rental is urgent.
#[must_use]
pub fn urgent_window() -> Duration {
    Duration::hours(24)
}

/// Whether `due` is at most 24 hours after `now` (overdue included).
#[must_use]
pub fn is_urgent(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due - now <= urgent_window()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn exactly_one_day_left_is_urgent() {
        assert!(is_urgent(now() + Duration::hours(24), now()));
    }

    #[test]
    fn just_over_one_day_is_not_urgent() {
        assert!(!is_urgent(
            now() + Duration::hours(24) + Duration::milliseconds(1),
            now()
        ));
    }

    #[test]
    fn overdue_is_urgent() {
        assert!(is_urgent(now() - Duration::days(3), now()));
        assert!(is_urgent(now(), now()));
    }

    #[test]
    fn wall_clock_due_dates_compare_as_instants() {
        // Due 12:00 at UTC+2 is 10:00Z; at 11:00Z the day before, 23h remain.
        let due = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 2, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap();
        assert_eq!(due - now, Duration::hours(23));
        assert!(is_urgent(due, now));
    }
}

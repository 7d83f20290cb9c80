//! Clock access and timestamp rendering.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Current time from the host clock.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Short `dd.mm, HH:MM` rendering in the viewer's zone, used in rental tables.
#[must_use]
pub fn format_short(at: DateTime<Utc>) -> String {
    format_short_in(at, &Local)
}

/// [`format_short`] as seen from `zone`.
#[must_use]
pub fn format_short_in<Tz>(at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format("%d.%m, %H:%M").to_string()
}

/// [`format_short`], or a dash when absent.
#[must_use]
pub fn format_optional(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| "-".to_string(), format_short)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn renders_day_month_and_time_in_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_short_in(at, &Utc), "07.03, 09:05");
        let warsaw_summer = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_short_in(at, &warsaw_summer), "07.03, 11:05");
        let late = Utc.with_ymd_and_hms(2024, 3, 7, 23, 30, 0).unwrap();
        assert_eq!(format_short_in(late, &warsaw_summer), "08.03, 01:30");
    }

    #[test]
    fn default_rendering_uses_host_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_short(at), format_short_in(at, &Local));
        assert_eq!(format_optional(None), "-");
    }
}

//! Serde helpers for the server's timestamp formats.
//!
//! The server serialises `LocalDateTime` values without an offset
//! (`2024-05-01T10:15:30` or with fractional seconds). Those are wall-clock
//! times in the viewer's zone, the way a browser `Date` reads them; RFC 3339
//! values are honoured with their offset.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    parse_in(raw, &Local)
}

/// Parse `raw`, resolving zone-less values in `zone`.
pub(crate) fn parse_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())?;
    // Ambiguous times take the earlier instant; times skipped by a DST jump
    // move forward an hour.
    naive
        .and_local_timezone(zone.clone())
        .earliest()
        .or_else(|| {
            (naive + Duration::hours(1))
                .and_local_timezone(zone.clone())
                .earliest()
        })
        .map(|resolved| resolved.with_timezone(&Utc))
}

pub(crate) mod required {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, parse};

    pub(crate) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

pub(crate) mod optional {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, parse};

    #[allow(clippy::ref_option)]
    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_in};
    use chrono::{FixedOffset, Local, NaiveDate, TimeZone, Utc};

    #[test]
    fn offset_forms_keep_their_instant() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse("2024-01-02T03:04:05Z"), Some(expected));
        assert_eq!(parse("2024-01-02T04:04:05+01:00"), Some(expected));
        assert_eq!(parse("yesterday"), None);
    }

    #[test]
    fn zone_less_forms_are_wall_clock_in_the_given_zone() {
        let warsaw_summer = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            parse_in("2024-06-02T12:00:00", &warsaw_summer),
            Some(Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_in("2024-06-02T12:00", &warsaw_summer),
            Some(Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_in("2024-01-02T03:04:05", &Utc),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn default_zone_is_the_host_clock() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
        assert_eq!(parse("2024-03-07T09:05:00"), expected);
    }
}

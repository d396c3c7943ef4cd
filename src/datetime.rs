//! Timestamp helpers for MailAssist.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp for storage.
///
/// Always UTC with microsecond precision and a `Z` suffix, so stored values
/// have a fixed width and sort lexically in chronological order.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mailassist::datetime::to_db_timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(to_db_timestamp(&dt), "2024-01-15T10:30:00.000000Z");
/// ```
pub fn to_db_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time formatted for storage.
pub fn now_db_timestamp() -> String {
    to_db_timestamp(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_fixed_width() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = a + Duration::microseconds(123_456);
        assert_eq!(to_db_timestamp(&a).len(), to_db_timestamp(&b).len());
    }

    #[test]
    fn test_lexical_order_matches_chronological() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 9, 59, 59).unwrap()
            + Duration::microseconds(999_999);
        let later = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert!(to_db_timestamp(&earlier) < to_db_timestamp(&later));
    }

    #[test]
    fn test_round_trips_through_rfc3339() {
        let now = Utc::now();
        let parsed = DateTime::parse_from_rfc3339(&to_db_timestamp(&now))
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}

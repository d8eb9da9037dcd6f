//! Report-day window math.
//!
//! The "today" attendance view covers one calendar day in a configurable
//! reporting zone. The zone is a fixed UTC offset (e.g. `-05:00`), which
//! keeps the time handling chrono-only; DST-aware named zones were
//! deliberately left out.

use chrono::{Duration, FixedOffset, NaiveTime};

use crate::types::Timestamp;

/// Parse a reporting offset from its RFC 3339 form, e.g. `+00:00` or `-05:00`.
pub fn parse_report_offset(raw: &str) -> Result<FixedOffset, String> {
    raw.parse::<FixedOffset>()
        .map_err(|e| format!("Invalid report offset '{raw}': {e}"))
}

/// UTC bounds `[start, end)` of the calendar day containing `now` in the
/// given reporting offset. `end - start` is always exactly 24 hours.
pub fn day_window(now: Timestamp, offset: FixedOffset) -> (Timestamp, Timestamp) {
    let local_time = now.with_timezone(&offset).time();
    let since_midnight = local_time.signed_duration_since(NaiveTime::MIN);
    let start = now - since_midnight;
    (start, start + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_standard_offsets() {
        assert_eq!(parse_report_offset("+00:00").unwrap().local_minus_utc(), 0);
        assert_eq!(
            parse_report_offset("-05:00").unwrap().local_minus_utc(),
            -5 * 3600
        );
        assert!(parse_report_offset("eastern").is_err());
    }

    #[test]
    fn utc_day_window_is_midnight_to_midnight() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
        let (start, end) = day_window(now, parse_report_offset("+00:00").unwrap());
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn negative_offset_shifts_the_window() {
        // 02:00 UTC is still the previous local day at -05:00.
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 2, 0, 0).unwrap();
        let (start, end) = day_window(now, parse_report_offset("-05:00").unwrap());
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 1, 5, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 2, 5, 0, 0).unwrap());
    }

    #[test]
    fn window_contains_now() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 23, 59, 59).unwrap();
        for raw in ["+00:00", "-05:00", "+09:00", "+05:30"] {
            let (start, end) = day_window(now, parse_report_offset(raw).unwrap());
            assert!(start <= now && now < end, "offset {raw}");
            assert_eq!(end - start, Duration::days(1), "offset {raw}");
        }
    }
}

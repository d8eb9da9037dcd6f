//! Reconciliation rules for attendance capture.
//!
//! A recognition batch is inherently noisy (false matches, repeated
//! frames), so per-event conditions are *outcomes*, not errors: an event
//! that cannot yield a record is skipped without failing the batch.
//! Request-level problems (malformed timestamps, out-of-range
//! confidence, missing fields) reject the whole batch before any write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Upper bound on session id length accepted from callers.
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Attendance record status. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(format!("Unknown attendance status: {other}")),
        }
    }
}

/// Why a single recognition event did or did not produce a record.
///
/// Only `Recorded` yields output; the rest are silently-skipped outcomes
/// surfaced via debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A new PRESENT record was written.
    Recorded,
    /// The claimed external id resolves to no known student.
    UnknownStudent,
    /// The student exists but is not on the class roster.
    NotEnrolled,
    /// A record for this (student, class, session) triple already exists.
    AlreadyRecorded,
}

impl EventOutcome {
    /// Stable label for log fields.
    pub fn label(self) -> &'static str {
        match self {
            EventOutcome::Recorded => "recorded",
            EventOutcome::UnknownStudent => "unknown_student",
            EventOutcome::NotEnrolled => "not_enrolled",
            EventOutcome::AlreadyRecorded => "already_recorded",
        }
    }
}

/// Validate a recognition confidence score. Must be a real number in [0, 1].
pub fn validate_confidence(confidence: f64) -> Result<(), String> {
    if !confidence.is_finite() {
        return Err(format!("Confidence must be a finite number, got {confidence}"));
    }
    if !(0.0..=1.0).contains(&confidence) {
        return Err(format!("Confidence must be within [0, 1], got {confidence}"));
    }
    Ok(())
}

/// Validate a caller-supplied session id: non-blank, bounded length.
pub fn validate_session_id(session_id: &str) -> Result<(), String> {
    if session_id.trim().is_empty() {
        return Err("Session id must not be blank".to_string());
    }
    if session_id.len() > MAX_SESSION_ID_LEN {
        return Err(format!(
            "Session id exceeds {MAX_SESSION_ID_LEN} characters"
        ));
    }
    Ok(())
}

/// Validate a school-issued student external id: non-blank.
pub fn validate_external_id(external_id: &str) -> Result<(), String> {
    if external_id.trim().is_empty() {
        return Err("External id must not be blank".to_string());
    }
    Ok(())
}

/// Parse an optional caller-supplied session start time.
///
/// The wire format is RFC 3339 with any offset; the result is normalized
/// to UTC, the canonical zone. A missing value is fine (the write path
/// falls back to "now"); a present-but-unparseable value is a validation
/// failure for the whole request.
pub fn parse_session_started_at(raw: Option<&str>) -> Result<Option<Timestamp>, String> {
    match raw {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| format!("Invalid session_started_at '{s}': {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // -----------------------------------------------------------------------
    // Confidence
    // -----------------------------------------------------------------------

    #[test]
    fn confidence_bounds_accepted() {
        assert!(validate_confidence(0.0).is_ok());
        assert!(validate_confidence(1.0).is_ok());
        assert!(validate_confidence(0.92).is_ok());
    }

    #[test]
    fn confidence_out_of_range_rejected() {
        assert!(validate_confidence(-0.01).is_err());
        assert!(validate_confidence(1.01).is_err());
    }

    #[test]
    fn confidence_nan_and_infinity_rejected() {
        assert!(validate_confidence(f64::NAN).is_err());
        assert!(validate_confidence(f64::INFINITY).is_err());
    }

    // -----------------------------------------------------------------------
    // Session id / external id
    // -----------------------------------------------------------------------

    #[test]
    fn blank_session_id_rejected() {
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("   ").is_err());
        assert!(validate_session_id("sess-1").is_ok());
    }

    #[test]
    fn overlong_session_id_rejected() {
        let long = "s".repeat(MAX_SESSION_ID_LEN + 1);
        assert!(validate_session_id(&long).is_err());
        let max = "s".repeat(MAX_SESSION_ID_LEN);
        assert!(validate_session_id(&max).is_ok());
    }

    #[test]
    fn blank_external_id_rejected() {
        assert!(validate_external_id(" ").is_err());
        assert!(validate_external_id("STU-001").is_ok());
    }

    // -----------------------------------------------------------------------
    // Session start parsing
    // -----------------------------------------------------------------------

    #[test]
    fn missing_session_start_is_none() {
        assert_eq!(parse_session_started_at(None), Ok(None));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let parsed = parse_session_started_at(Some("2026-03-02T09:30:00-05:00"))
            .unwrap()
            .unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn garbage_session_start_rejected() {
        assert!(parse_session_started_at(Some("yesterday")).is_err());
        assert!(parse_session_started_at(Some("2026-03-02")).is_err());
    }

    // -----------------------------------------------------------------------
    // Status round-trip
    // -----------------------------------------------------------------------

    #[test]
    fn status_string_round_trip() {
        assert_eq!("present".parse::<AttendanceStatus>().unwrap().as_str(), "present");
        assert_eq!("absent".parse::<AttendanceStatus>().unwrap().as_str(), "absent");
        assert!("late".parse::<AttendanceStatus>().is_err());
    }
}

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ApiError;

/// Minimum lead time between submission and meeting for acceptance. The
/// extra five minutes over the reminder offset guarantees the reminder is
/// scheduled strictly in the future.
pub fn rejection_threshold() -> Duration {
    Duration::hours(3) + Duration::minutes(5)
}

/// Fixed interval before the meeting at which the SMS reminder is sent.
pub fn reminder_offset() -> Duration {
    Duration::hours(3)
}

pub fn parse_meeting_datetime(date: &str, time: &str) -> Result<NaiveDateTime, ApiError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("meeting_date must match YYYY-MM-DD".into()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ApiError::BadRequest("meeting_time must match HH:MM".into()))?;
    Ok(NaiveDateTime::new(date, time))
}

/// Rejection is strict `<`: a meeting exactly at the threshold is accepted.
pub fn has_enough_lead(meeting_dt: NaiveDateTime, now: NaiveDateTime) -> bool {
    !(meeting_dt - rejection_threshold() < now)
}

pub fn reminder_time(meeting_dt: NaiveDateTime) -> NaiveDateTime {
    meeting_dt - reminder_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        parse_meeting_datetime(date, time).unwrap()
    }

    #[test]
    fn test_parse_meeting_datetime() {
        let parsed = dt("2024-06-01", "15:00");
        assert_eq!(format!("{parsed}"), "2024-06-01 15:00:00");
        assert!(parse_meeting_datetime("06/01/2024", "15:00").is_err());
        assert!(parse_meeting_datetime("2024-06-01", "3pm").is_err());
        assert!(parse_meeting_datetime("2024-13-01", "15:00").is_err());
    }

    #[test]
    fn test_lead_time_accepted() {
        let now = dt("2024-06-01", "10:00");
        assert!(has_enough_lead(dt("2024-06-01", "15:00"), now));
        assert!(has_enough_lead(dt("2024-06-02", "09:00"), now));
    }

    #[test]
    fn test_lead_time_rejected_when_too_soon_or_past() {
        let now = dt("2024-06-01", "10:00");
        assert!(!has_enough_lead(dt("2024-06-01", "13:00"), now));
        assert!(!has_enough_lead(dt("2024-06-01", "09:00"), now));
        assert!(!has_enough_lead(dt("2024-05-31", "15:00"), now));
    }

    #[test]
    fn test_lead_time_boundary_exactly_threshold_is_accepted() {
        let now = dt("2024-06-01", "10:00");
        assert!(has_enough_lead(dt("2024-06-01", "13:05"), now));
        let one_second_later = now + Duration::seconds(1);
        assert!(!has_enough_lead(dt("2024-06-01", "13:05"), one_second_later));
    }

    #[test]
    fn test_reminder_time_is_three_hours_before_meeting() {
        assert_eq!(
            reminder_time(dt("2024-06-01", "15:00")),
            dt("2024-06-01", "12:00")
        );
        // Offset stays 3h even though the threshold is 3h05m
        assert_eq!(
            reminder_time(dt("2024-06-01", "13:05")),
            dt("2024-06-01", "10:05")
        );
    }
}

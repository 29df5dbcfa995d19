use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical rendering of a reminder timestamp, used both in the SMS body
/// and in the confirmation view: `2024-06-01 12:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// The submitted meeting form. Transient, never persisted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MeetingForm {
    #[schema(example = "2024-06-01")]
    pub meeting_date: String,
    #[schema(example = "15:00")]
    pub meeting_time: String,
    pub customer_name: String,
    pub meeting_name: String,
    /// Local digits only; the configured country code is prepended.
    pub phone: String,
}

/// The payload handed to the reminder queue. Frozen at enqueue time and
/// carried verbatim until execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderJob {
    pub to: String,
    pub message: String,
    #[serde(with = "naive_datetime_format")]
    pub send_at: NaiveDateTime,
}

impl ReminderJob {
    /// Builds the job for a validated submission: recipient is the country
    /// code concatenated with the submitted phone (no separator), message
    /// text carries the reminder time, and the job executes at that time.
    pub fn build(country_code: &str, form: &MeetingForm, reminder_dt: NaiveDateTime) -> Self {
        let to = format!("{}{}", country_code, form.phone);
        let message = format!(
            "{}, you have a meeting scheduled for {}",
            form.customer_name,
            format_timestamp(reminder_dt)
        );
        Self {
            to,
            message,
            send_at: reminder_dt,
        }
    }
}

/// Data echoed back on the confirmation view.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub customer_name: String,
    pub meeting_name: String,
    pub phone: String,
    pub reminder_at: String,
}

mod naive_datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn sample_form() -> MeetingForm {
        MeetingForm {
            meeting_date: "2024-01-01".to_string(),
            meeting_time: "12:00".to_string(),
            customer_name: "Alice".to_string(),
            meeting_name: "Review".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_recipient_is_plain_concatenation() {
        let reminder_dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let job = ReminderJob::build("1", &sample_form(), reminder_dt);
        assert_eq!(job.to, "15551234567");
    }

    #[test]
    fn test_message_text() {
        let reminder_dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let job = ReminderJob::build("1", &sample_form(), reminder_dt);
        assert_eq!(
            job.message,
            "Alice, you have a meeting scheduled for 2024-01-01 09:00:00"
        );
        assert_eq!(job.send_at, reminder_dt);
    }

    #[test]
    fn test_job_payload_round_trips_through_json() {
        let reminder_dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        let job = ReminderJob::build("48", &sample_form(), reminder_dt);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("2024-06-01 12:00:00"));
        let back: ReminderJob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}

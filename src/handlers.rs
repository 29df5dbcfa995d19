use axum::{Form, Json, extract::State, response::IntoResponse};
use chrono::Local;

use crate::{
    AppState,
    error::ApiError,
    models::{Confirmation, MeetingForm, ReminderJob, format_timestamp},
    validation, views,
};

const TOO_SOON_NOTICE: &str = "Meeting time must be at least 3:05 hours from now";

#[utoipa::path(get, path = "/", tag = "meetings")]
pub async fn show_form() -> impl IntoResponse {
    views::render_form(None)
}

#[utoipa::path(get, path = "/healthz/live", tag = "meetings")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "meetings")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/",
    request_body(content = MeetingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation view, or the form re-rendered with a notice when the meeting is too soon"),
        (status = 400, description = "Malformed meeting date or time"),
        (status = 500, description = "Reminder could not be scheduled")
    ),
    tag = "meetings"
)]
pub async fn submit_meeting(
    State(state): State<AppState>,
    Form(form): Form<MeetingForm>,
) -> Result<impl IntoResponse, ApiError> {
    let meeting_dt = validation::parse_meeting_datetime(&form.meeting_date, &form.meeting_time)?;
    let now = Local::now().naive_local();

    if !validation::has_enough_lead(meeting_dt, now) {
        return Ok(views::render_form(Some(TOO_SOON_NOTICE)));
    }

    let reminder_dt = validation::reminder_time(meeting_dt);
    let job = ReminderJob::build(&state.settings.country_code, &form, reminder_dt);
    state.queue.enqueue(job)?;

    Ok(views::render_confirmation(&Confirmation {
        customer_name: form.customer_name,
        meeting_name: form.meeting_name,
        phone: form.phone,
        reminder_at: format_timestamp(reminder_dt),
    }))
}

use axum::response::Html;

use crate::models::Confirmation;

/// Renders the submission form, optionally with a single-use notice shown
/// above it. The notice is request-scoped data, never session state.
pub fn render_form(notice: Option<&str>) -> Html<String> {
    let notice_block = match notice {
        Some(msg) => format!(r#"<p class="notice">{}</p>"#, escape(msg)),
        None => String::new(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Schedule a meeting</title></head>
<body>
<h1>Schedule a meeting</h1>
{notice_block}
<form method="post" action="/">
  <label>Meeting date <input type="date" name="meeting_date" required></label><br>
  <label>Meeting time <input type="time" name="meeting_time" required></label><br>
  <label>Your name <input type="text" name="customer_name" required></label><br>
  <label>Meeting name <input type="text" name="meeting_name" required></label><br>
  <label>Phone <input type="text" name="phone" required></label><br>
  <button type="submit">Schedule</button>
</form>
</body>
</html>
"#
    ))
}

/// Renders the confirmation view echoing the submitted fields and the
/// computed reminder time.
pub fn render_confirmation(confirmation: &Confirmation) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Meeting scheduled</title></head>
<body>
<h1>Meeting scheduled</h1>
<p>{name}, your meeting &quot;{meeting}&quot; is booked.</p>
<p>A reminder will be sent to {phone} at {reminder_at}.</p>
</body>
</html>
"#,
        name = escape(&confirmation.customer_name),
        meeting = escape(&confirmation.meeting_name),
        phone = escape(&confirmation.phone),
        reminder_at = escape(&confirmation.reminder_at),
    ))
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_form_without_notice() {
        let Html(body) = render_form(None);
        assert!(body.contains(r#"name="meeting_date""#));
        assert!(body.contains(r#"name="phone""#));
        assert!(!body.contains("class=\"notice\""));
    }

    #[test]
    fn test_render_form_with_notice() {
        let Html(body) = render_form(Some("Meeting time must be at least 3:05 hours from now"));
        assert!(body.contains("at least 3:05 hours from now"));
    }

    #[test]
    fn test_render_confirmation_escapes_user_input() {
        let Html(body) = render_confirmation(&Confirmation {
            customer_name: "Alice <script>".to_string(),
            meeting_name: "Q3 & beyond".to_string(),
            phone: "5551234567".to_string(),
            reminder_at: "2024-06-01 12:00:00".to_string(),
        });
        assert!(body.contains("Alice &lt;script&gt;"));
        assert!(body.contains("Q3 &amp; beyond"));
        assert!(body.contains("2024-06-01 12:00:00"));
    }
}

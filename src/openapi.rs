use utoipa::OpenApi;

use crate::models::MeetingForm;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::show_form,
        crate::handlers::submit_meeting,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready
    ),
    components(schemas(MeetingForm)),
    tags(
        (name = "meetings", description = "Meeting reminder scheduling")
    )
)]
pub struct ApiDoc;

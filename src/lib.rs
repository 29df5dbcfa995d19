pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod queue;
pub mod settings;
pub mod sms;
pub mod validation;
pub mod views;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use handlers::{healthz_live, healthz_ready, show_form, submit_meeting};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::queue::ReminderQueue;
use crate::settings::Settings;
use crate::sms::SmsClient;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub queue: ReminderQueue,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let client = SmsClient::new(
        settings.messaging_base_url.clone(),
        settings.api_key.clone(),
        settings.from_number.clone(),
    );
    let (queue, jobs) = ReminderQueue::channel();
    let _worker = queue::spawn_worker(jobs, client);

    let state = AppState {
        settings: settings.clone(),
        queue,
    };

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Meeting Reminder service on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(show_form).post(submit_meeting))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}

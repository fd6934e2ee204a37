use crate::domain::envelope::{Envelope, Status};
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Every registered dependency probe passed", body = Envelope),
        (status = 500, description = "A dependency probe failed", body = Envelope)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Response {
    for probe in &state.health_probes {
        if let Err(e) = probe.check().await {
            tracing::warn!(probe = probe.name(), error = %e, "health probe failed");
            return Envelope::bare(500, Status::Fail, e.to_string()).into_response();
        }
    }

    match state.builder.ok("health", &()) {
        Ok(envelope) => envelope.into_response(),
        Err(e) => state.responder.respond_to(&e.into()).into_response(),
    }
}

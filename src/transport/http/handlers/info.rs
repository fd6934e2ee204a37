use crate::transport::http::types::{AppState, InfoResponse};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata and the routes it exposes", body = InfoResponse)
    )
)]
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: state.service_info.as_ref().clone(),
        endpoints: state.endpoints.as_ref().clone(),
    })
}

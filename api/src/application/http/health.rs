use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

pub const SERVICE_NAME: &str = "foodsense-api";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = StatusResponse)
    )
)]
pub async fn get_status() -> Response<StatusResponse> {
    Response::OK(StatusResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(get_status))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/", root_path), get(get_status))
}

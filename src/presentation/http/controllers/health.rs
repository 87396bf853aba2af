// src/presentation/http/controllers/health.rs
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "The process is up.", body = StatusResponse)),
    security(()),
    tag = "Health"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

//! Liveness handler

use axum::Json;

use super::super::types::messages;

/// Liveness check
///
/// Answers without touching the store or the catalog.
#[utoipa::path(
    get,
    path = "/work-check",
    responses(
        (status = 200, description = "Service alive", body = String)
    ),
    tag = "System"
)]
pub async fn work_check() -> Json<&'static str> {
    Json(messages::ALIVE)
}

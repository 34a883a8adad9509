//! Catalog passthrough handler

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::super::state::AppState;

/// Body returned when the catalog cannot be reached
const UNREACHABLE_BODY: &str = "false";

/// Product list from the external catalog
///
/// The upstream body is forwarded verbatim; an unreachable catalog yields
/// the JSON literal `false`.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (
            status = 200,
            description = "Catalog products, forwarded verbatim",
            content_type = "application/json"
        )
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> Response {
    let body = match state.catalog.fetch_products().await {
        Ok(bytes) => Body::from(bytes),
        Err(e) => {
            tracing::warn!(url = state.catalog.url(), error = %e, "Catalog fetch failed");
            Body::from(UNREACHABLE_BODY)
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the HTTP router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/work-check", get(handlers::work_check))
        .route("/products", get(handlers::list_products))
        .route(
            "/order/new",
            post(handlers::create_order).get(handlers::order_quantities_at_new),
        )
        .route("/orders/status-update", put(handlers::update_statuses))
        .route("/order/delete/{orderNumber}", delete(handlers::delete_order))
        .route("/order/recreate/{orderNumber}", post(handlers::recreate_order))
        .route("/order/{orderNumber}", get(handlers::order_quantities))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(
                "Failed to bind to {}: {} (port {} may already be in use)",
                addr,
                e,
                port
            );
            return Err(e.into());
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

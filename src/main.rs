//! Order Desk - order management HTTP backend
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ OrderService │───▶│  OrderStore  │
//! │  (YAML)  │    │  (axum)  │    │              │    │ (PG/memory)  │
//! └──────────┘    └────┬─────┘    └──────────────┘    └──────────────┘
//!                      │
//!                      └────────▶ CatalogClient ────▶ external catalog
//! ```
//!
//! Usage: `order_desk [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;

use order_desk::catalog::CatalogClient;
use order_desk::config::AppConfig;
use order_desk::db::Database;
use order_desk::gateway::{self, state::AppState};
use order_desk::order::{MemoryOrderStore, OrderService, OrderStore, PgOrderStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn OrderStore>> {
    match config.postgres_url.as_deref() {
        Some(url) => {
            let db = Database::connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.init_schema()
                .await
                .context("Failed to initialize order schema")?;
            Ok(Arc::new(PgOrderStore::new(db.pool().clone())))
        }
        None => {
            tracing::warn!("No postgres_url configured, orders are kept in memory only");
            Ok(Arc::new(MemoryOrderStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = order_desk::logging::init_logging(&app_config);

    tracing::info!("Starting Order Desk in {} mode", env);

    let port = get_port_override().unwrap_or(app_config.gateway.port);

    let store = open_store(&app_config).await?;
    let catalog = CatalogClient::new(&app_config.catalog)?;
    let state = Arc::new(AppState::new(OrderService::new(store), Arc::new(catalog)));

    let result = gateway::run_server(&app_config.gateway.host, port, state).await;
    if let Err(ref e) = result {
        tracing::error!("Server error: {:#}", e);
    }
    result
}

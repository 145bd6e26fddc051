//! Staffing engine HTTP server.
//!
//! Reads `engine.yaml` from `STAFFING_CONFIG_DIR` (default
//! `./config/default`), loads the record snapshot named by
//! `store.snapshot_path` and serves the API on `server.bind_address`.

use std::env;
use std::sync::Arc;

use staffing_engine::api::{AppState, create_router};
use staffing_engine::config::ConfigLoader;
use staffing_engine::logging;
use staffing_engine::service::StaffingEngine;
use staffing_engine::store::InMemoryStore;
use tracing::info;

const CONFIG_DIR_VAR: &str = "STAFFING_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    let config = loader.config();
    info!(
        config_dir = %config_dir,
        default_hourly_wage = config.payroll.default_hourly_wage,
        "Configuration loaded"
    );

    let store = InMemoryStore::load(&config.store.snapshot_path)?;
    let snapshot = store.snapshot();
    info!(
        path = %config.store.snapshot_path,
        shifts = snapshot.shifts.len(),
        hourly_wages = snapshot.hourly_wages.len(),
        time_slots = snapshot.time_slots.len(),
        "Record snapshot loaded"
    );

    let engine = StaffingEngine::new(Arc::new(store), loader.wage_resolver());
    let router = create_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(config.server.bind_address.as_str()).await?;
    info!(address = %config.server.bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}

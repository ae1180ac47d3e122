//! Vigil
//!
//! Main entry point for the early-warning scoring service.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use vigil::api::{self, AppState};
use vigil::config;
use vigil::ews::InMemoryPredictionLog;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = config::load_config().context("failed to load configuration")?;

    // Initialize logger
    vigil::telemetry::init(&config.log);

    // Create app state
    let app_state = web::Data::new(AppState {
        aggregator: config.aggregator(),
        recorder: Arc::new(InMemoryPredictionLog::with_retention(
            config.monitoring.prediction_retention,
        )),
    });

    let bind = (config.server.host.clone(), config.server.port);
    info!(host = %bind.0, port = bind.1, "starting early-warning service");

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            // Request spans
            .wrap(TracingLogger::default())
            .configure(api::configure)
    })
    .bind(bind)
    .context("failed to bind server address")?
    .run()
    .await?;

    Ok(())
}

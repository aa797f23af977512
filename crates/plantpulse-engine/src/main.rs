//! Telemetry engine binary for the PlantPulse pipeline.
//!
//! Wires together the synthetic plant, the maintenance predictor, the
//! backend forwarder, and the carton event emitter, then runs the poll
//! loop until the configured tick bound is reached or Ctrl-C arrives.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `plantpulse-config.yaml`
//! 3. Seed the RNG and build the starting plant
//! 4. Build the predictor backend and the forwarder
//! 5. Run the poll loop
//! 6. Log the delivery summary

mod config;
mod error;
mod runner;

use std::path::Path;
use std::time::Duration;

use plantpulse_net::{Forwarder, HeuristicPredictor, PredictorBackend, RemotePredictor, RetryPolicy};
use plantpulse_sim::{CartonEmitter, starting_plant};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, PredictorKind};
use crate::error::EngineError;
use crate::runner::RunOptions;

/// Application entry point for the telemetry engine.
///
/// # Errors
///
/// Returns an error if configuration loading fails; everything after that
/// is handled inside the loop.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("plantpulse-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.simulation.seed,
        tick_interval_ms = config.simulation.tick_interval_ms,
        max_ticks = config.simulation.max_ticks,
        predictor = ?config.endpoints.predictor,
        "Configuration loaded"
    );

    // 3. Seed the RNG and build the starting plant.
    let mut rng = SmallRng::seed_from_u64(config.simulation.seed);
    let mut state = starting_plant();
    info!(
        rooms = state.rooms.len(),
        machines = state.machines.len(),
        "Starting plant built"
    );

    // 4. Build the predictor backend and the forwarder.
    let retry = RetryPolicy::new(
        config.endpoints.max_retries,
        config.endpoints.retry_backoff(),
    );
    let timeout = config.endpoints.request_timeout();

    let predictor = match config.endpoints.predictor {
        PredictorKind::Remote => PredictorBackend::Remote(RemotePredictor::new(
            config.endpoints.ai_api_base_url.clone(),
            timeout,
            retry,
        )),
        PredictorKind::Heuristic => PredictorBackend::Heuristic(HeuristicPredictor),
    };
    info!(
        backend = predictor.name(),
        ai_api_base_url = %config.endpoints.ai_api_base_url,
        "Predictor backend ready"
    );

    let forwarder = Forwarder::new(
        config.endpoints.backend_api_base_url.clone(),
        timeout,
        retry,
    );
    info!(
        backend_api_base_url = %config.endpoints.backend_api_base_url,
        timeout_ms = config.endpoints.request_timeout_ms,
        max_retries = config.endpoints.max_retries,
        "Forwarder ready"
    );

    let mut emitter = CartonEmitter::new(config.events.clone());
    info!(
        interval_ticks = config.events.interval_ticks,
        "Carton emitter ready"
    );

    // 5. Run the poll loop.
    let options = RunOptions {
        tick_interval: Duration::from_millis(config.simulation.tick_interval_ms),
        max_ticks: config.simulation.max_ticks,
    };
    let summary = runner::run_loop(
        &mut state,
        &predictor,
        &forwarder,
        &mut emitter,
        &mut rng,
        options,
    )
    .await;

    // 6. Log the delivery summary.
    info!(
        end_reason = ?summary.end_reason,
        total_ticks = summary.total_ticks,
        forwarded_ticks = summary.forwarded_ticks,
        dropped_ticks = summary.dropped_ticks,
        events_posted = summary.events_posted,
        events_failed = summary.events_failed,
        "plantpulse-engine shutdown complete"
    );

    Ok(())
}

/// Load the engine configuration from `plantpulse-config.yaml`.
///
/// Looks for the config file relative to the current working directory and
/// falls back to defaults (plus env overrides) when it is absent.
fn load_config() -> Result<EngineConfig, EngineError> {
    let config_path = Path::new("plantpulse-config.yaml");
    if config_path.exists() {
        let config = EngineConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        let mut config = EngineConfig::default();
        config.endpoints.apply_env_overrides();
        Ok(config)
    }
}

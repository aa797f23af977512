//! The poll loop.
//!
//! Drives one tick after another, forever or until a bound is hit:
//!
//! 1. Advance the plant state (bounded random walk).
//! 2. Build feature vectors in machine order and call the predictor. On
//!    failure, log, count the tick as dropped, and skip steps 3-4.
//! 3. Attach the returned labels positionally.
//! 4. Forward the sensor document to the backend; a failure drops this
//!    tick's data (logged and counted), never aborts the loop.
//! 5. Tick the carton emitter and post any fired events.
//! 6. Sleep the tick interval and go again.
//!
//! The loop ends when `max_ticks` is reached (0 = unlimited) or on Ctrl-C,
//! and returns a [`RunSummary`] so best-effort data loss is visible in the
//! shutdown log rather than silent.

use std::time::Duration;

use plantpulse_net::traits::{LabelSource, TelemetrySink};
use plantpulse_sim::{CartonEmitter, advance_plant};
use plantpulse_types::{PlantState, SensorDocument};
use rand::Rng;
use tracing::{debug, info, warn};

/// Run bounds and cadence for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Real-time pause between ticks.
    pub tick_interval: Duration,
    /// Stop after this many ticks (0 = run until interrupted).
    pub max_ticks: u64,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// The configured tick bound was reached.
    MaxTicksReached,
    /// Ctrl-C was received.
    Interrupted,
}

/// Delivery accounting for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the loop stopped.
    pub end_reason: RunEndReason,
    /// Ticks executed in total.
    pub total_ticks: u64,
    /// Ticks whose sensor document reached the backend.
    pub forwarded_ticks: u64,
    /// Ticks whose data was dropped (predictor or forward failure).
    pub dropped_ticks: u64,
    /// Carton events successfully posted.
    pub events_posted: u64,
    /// Carton events that failed to post.
    pub events_failed: u64,
}

/// Run the poll loop until a termination condition is met.
///
/// The state is owned by the caller and mutated in place each tick; the
/// predictor and sink are trait seams so tests can substitute failing
/// collaborators.
pub async fn run_loop<P, S, R>(
    state: &mut PlantState,
    predictor: &P,
    sink: &S,
    emitter: &mut CartonEmitter,
    rng: &mut R,
    options: RunOptions,
) -> RunSummary
where
    P: LabelSource,
    S: TelemetrySink,
    R: Rng,
{
    let mut total_ticks: u64 = 0;
    let mut forwarded_ticks: u64 = 0;
    let mut dropped_ticks: u64 = 0;
    let mut events_posted: u64 = 0;
    let mut events_failed: u64 = 0;

    info!(
        max_ticks = options.max_ticks,
        tick_interval_ms = u64::try_from(options.tick_interval.as_millis()).unwrap_or(u64::MAX),
        "Poll loop starting"
    );

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let end_reason = loop {
        total_ticks = total_ticks.saturating_add(1);
        let tick = total_ticks;

        // 1. Regenerate state.
        advance_plant(state, rng);

        // 2-4. Predict, attach, forward.
        let features = state.machine_features();
        match predictor.predict(&features).await {
            Ok(labels) => {
                state.attach_labels(&labels);
                let doc = SensorDocument::from(&*state);
                match sink.put_sensor_data(&doc).await {
                    Ok(()) => {
                        forwarded_ticks = forwarded_ticks.saturating_add(1);
                        debug!(tick, machines = doc.machines.len(), "sensor data forwarded");
                    }
                    Err(error) => {
                        dropped_ticks = dropped_ticks.saturating_add(1);
                        warn!(tick, error = %error, "state forward failed, tick dropped");
                    }
                }
            }
            Err(error) => {
                dropped_ticks = dropped_ticks.saturating_add(1);
                warn!(tick, error = %error, "prediction failed, skipping forward");
            }
        }

        // 5. Sporadic carton events.
        let batch = emitter.tick(rng);
        if let Some(produced) = batch.produced {
            match sink.post_cartons_produced(&produced).await {
                Ok(()) => {
                    events_posted = events_posted.saturating_add(1);
                    info!(tick, cartons = produced.cartons_produced, "production event posted");
                }
                Err(error) => {
                    events_failed = events_failed.saturating_add(1);
                    warn!(tick, error = %error, "production event post failed");
                }
            }
        }
        if let Some(sale) = batch.sale {
            match sink.post_carton_sale(&sale).await {
                Ok(()) => {
                    events_posted = events_posted.saturating_add(1);
                    info!(tick, cartons = sale.cartons_sold, buyer = %sale.buyer, "sale event posted");
                }
                Err(error) => {
                    events_failed = events_failed.saturating_add(1);
                    warn!(tick, error = %error, "sale event post failed");
                }
            }
        }

        // 6. Bounds check, then sleep until the next tick.
        if options.max_ticks > 0 && tick >= options.max_ticks {
            info!(tick, "tick bound reached");
            break RunEndReason::MaxTicksReached;
        }

        tokio::select! {
            _ = &mut ctrl_c => {
                info!(tick, "interrupt received, shutting down");
                break RunEndReason::Interrupted;
            }
            () = tokio::time::sleep(options.tick_interval) => {}
        }
    };

    RunSummary {
        end_reason,
        total_ticks,
        forwarded_ticks,
        dropped_ticks,
        events_posted,
        events_failed,
    }
}

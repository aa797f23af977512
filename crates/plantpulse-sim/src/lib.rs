//! Synthetic telemetry generation for the PlantPulse pipeline.
//!
//! This crate owns everything that happens to the plant state between
//! network calls: the bounded random walk that drifts every sensor reading
//! each tick, the seed data for the starting plant, and the countdown-gated
//! emitter for sporadic carton production/sale events.
//!
//! # Determinism
//!
//! All randomness flows through a caller-supplied [`rand::Rng`]. Seeding
//! the generator with a fixed value reproduces identical snapshot and
//! event sequences, which is what the reproducibility tests rely on.
//!
//! # Modules
//!
//! - [`walk`] -- Per-field bounds table and the clamped random-walk step
//! - [`generator`] -- One-tick state transition over the whole plant
//! - [`plant`] -- Starting rooms and machines
//! - [`events`] -- Sporadic carton event emitter

pub mod events;
pub mod generator;
pub mod plant;
pub mod walk;

pub use events::{CartonBatch, CartonEmitter, EmitterSettings};
pub use generator::advance_plant;
pub use plant::starting_plant;

//! Shared type definitions for the PlantPulse telemetry pipeline.
//!
//! This crate is the single source of truth for the data model used across
//! the PlantPulse workspace: the in-memory plant state mutated each tick,
//! the maintenance label vocabulary returned by the predictor, and the
//! wire documents sent to the backend ingestion endpoints.
//!
//! # Modules
//!
//! - [`labels`] -- The maintenance label enum and its wire strings
//! - [`state`] -- In-memory plant state (rooms, machines, feature vectors)
//! - [`wire`] -- Serialized documents for the backend (sensor data, carton events)

pub mod labels;
pub mod state;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use labels::{MaintenanceLabel, ParseLabelError};
pub use state::{Machine, MachineFeatures, PlantState, Room};
pub use wire::{CartonSale, CartonsProduced, MachineReading, RoomReading, SensorDocument};

//! Seams between the tick loop and its remote collaborators.
//!
//! The runner is generic over these traits so tests can substitute stub or
//! failing collaborators and assert on the loop's behavior (e.g. "a
//! predictor failure must suppress the state PUT for that tick") without
//! any network in the picture.

use plantpulse_types::{
    CartonSale, CartonsProduced, MachineFeatures, MaintenanceLabel, SensorDocument,
};

use crate::error::{ForwardError, PredictError};

/// A source of maintenance labels for machine feature vectors.
///
/// Implementations must return one label per input row, positionally
/// aligned with the input order.
pub trait LabelSource {
    /// Classify the given feature vectors.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] on any transport, status, or payload
    /// failure; the caller treats all of them as a skipped tick.
    fn predict(
        &self,
        features: &[MachineFeatures],
    ) -> impl Future<Output = Result<Vec<MaintenanceLabel>, PredictError>> + Send;
}

/// The backend ingestion surface the loop forwards to.
pub trait TelemetrySink {
    /// Replace the backend's sensor state document.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] on transport or status failure.
    fn put_sensor_data(
        &self,
        doc: &SensorDocument,
    ) -> impl Future<Output = Result<(), ForwardError>> + Send;

    /// Post a cartons-produced event.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] on transport or status failure.
    fn post_cartons_produced(
        &self,
        event: &CartonsProduced,
    ) -> impl Future<Output = Result<(), ForwardError>> + Send;

    /// Post a carton sale event.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] on transport or status failure.
    fn post_carton_sale(
        &self,
        event: &CartonSale,
    ) -> impl Future<Output = Result<(), ForwardError>> + Send;
}

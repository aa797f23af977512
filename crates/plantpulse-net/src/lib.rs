//! Outbound HTTP collaborators for the PlantPulse pipeline.
//!
//! Two remote parties sit on the other side of this crate: the maintenance
//! prediction endpoint and the backend ingestion API. Both are treated as
//! opaque, unreliable collaborators -- every call carries an explicit
//! timeout and runs under a bounded retry policy, and every failure is a
//! typed error the tick loop can log and move past.
//!
//! # Modules
//!
//! - [`error`] -- Typed errors for predictor and forwarder calls
//! - [`traits`] -- Seams the tick loop is generic over
//! - [`retry`] -- Bounded retry with linear backoff
//! - [`predictor`] -- Remote and heuristic maintenance predictors
//! - [`forwarder`] -- Backend state PUT and carton event POSTs

pub mod error;
pub mod forwarder;
pub mod predictor;
pub mod retry;
pub mod traits;

pub use error::{ForwardError, PredictError};
pub use forwarder::Forwarder;
pub use predictor::{HeuristicPredictor, PredictorBackend, RemotePredictor};
pub use retry::RetryPolicy;
pub use traits::{LabelSource, TelemetrySink};

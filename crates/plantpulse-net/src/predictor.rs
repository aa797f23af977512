//! Maintenance predictor backends.
//!
//! Enum-based dispatch over the two ways machine health gets classified:
//! the deployed prediction endpoint, or a built-in heuristic for running
//! the pipeline with no model deployment at all. Enum dispatch avoids the
//! dyn-compatibility issues with async trait methods.
//!
//! The remote contract: `POST {base}/predict` with a JSON array of feature
//! objects; success is HTTP 200 with a JSON array of label strings of the
//! same length, positionally aligned with the input. Anything else -- a
//! non-2xx status, a timeout, a body that is not a string array, an
//! unknown label, a length mismatch -- is a [`PredictError`], which the
//! tick loop treats as "skip this tick's forward and try again next tick".

use std::time::Duration;

use plantpulse_types::{MachineFeatures, MaintenanceLabel};

use crate::error::PredictError;
use crate::retry::RetryPolicy;
use crate::traits::LabelSource;

// ---------------------------------------------------------------------------
// Unified backend enum
// ---------------------------------------------------------------------------

/// A maintenance predictor that can classify machine feature vectors.
pub enum PredictorBackend {
    /// The deployed prediction endpoint.
    Remote(RemotePredictor),
    /// Built-in threshold rules, no network.
    Heuristic(HeuristicPredictor),
}

impl PredictorBackend {
    /// Classify the given feature vectors, dispatching to the concrete
    /// backend.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] if the remote call fails or its payload is
    /// invalid. The heuristic backend never fails.
    pub async fn predict(
        &self,
        features: &[MachineFeatures],
    ) -> Result<Vec<MaintenanceLabel>, PredictError> {
        match self {
            Self::Remote(backend) => backend.predict(features).await,
            Self::Heuristic(backend) => Ok(backend.predict(features)),
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Remote(_) => "remote",
            Self::Heuristic(_) => "heuristic",
        }
    }
}

impl LabelSource for PredictorBackend {
    async fn predict(
        &self,
        features: &[MachineFeatures],
    ) -> Result<Vec<MaintenanceLabel>, PredictError> {
        Self::predict(self, features).await
    }
}

// ---------------------------------------------------------------------------
// Remote predictor
// ---------------------------------------------------------------------------

/// Client for the deployed prediction endpoint.
pub struct RemotePredictor {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl RemotePredictor {
    /// Create a client for the endpoint at `base_url`.
    pub fn new(base_url: String, timeout: Duration, retry: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
            retry,
        }
    }

    /// Submit the feature vectors and return positionally aligned labels.
    async fn predict(
        &self,
        features: &[MachineFeatures],
    ) -> Result<Vec<MaintenanceLabel>, PredictError> {
        self.retry.run(|| self.predict_once(features)).await
    }

    /// One attempt against the endpoint.
    async fn predict_once(
        &self,
        features: &[MachineFeatures],
    ) -> Result<Vec<MaintenanceLabel>, PredictError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(features)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Vec<String> = response.json().await.map_err(|e| PredictError::Payload {
            message: format!("body is not a JSON array of strings: {e}"),
        })?;

        parse_labels(&raw, features.len())
    }
}

/// Validate and parse a raw label array against the submitted row count.
fn parse_labels(raw: &[String], expected: usize) -> Result<Vec<MaintenanceLabel>, PredictError> {
    if raw.len() != expected {
        return Err(PredictError::LengthMismatch {
            expected,
            actual: raw.len(),
        });
    }
    raw.iter()
        .map(|s| {
            s.parse().map_err(|_err| PredictError::Payload {
                message: format!("unknown maintenance label: {s:?}"),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Heuristic predictor
// ---------------------------------------------------------------------------

/// Threshold-rule predictor, for running without a deployed model.
///
/// Rules mirror the training-data generation patterns, rescaled to the
/// simulator's clamped field ranges. Highest-priority rule wins, so the
/// classification is deterministic for a given feature vector:
///
/// 1. temperature above 60 => Overheating Motor
/// 2. power usage above 7.5 => Clogged Filter
/// 3. vibration above 2 => Bearing Wear
/// 4. noise level above 2 => Unbalanced Load
/// 5. otherwise => Normal Operation
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPredictor;

/// Temperature threshold for the overheating rule.
const HOT_TEMPERATURE: f64 = 60.0;
/// Power draw threshold for the clogged-filter rule.
const HIGH_POWER: f64 = 7.5;
/// Vibration threshold for the bearing-wear rule.
const HIGH_VIBRATION: f64 = 2.0;
/// Noise threshold for the unbalanced-load rule.
const HIGH_NOISE: f64 = 2.0;

impl HeuristicPredictor {
    /// Classify every feature vector, in input order.
    pub fn predict(&self, features: &[MachineFeatures]) -> Vec<MaintenanceLabel> {
        features.iter().map(|f| Self::label(*f)).collect()
    }

    /// Apply the threshold rules to one feature vector.
    fn label(f: MachineFeatures) -> MaintenanceLabel {
        if f.temperature > HOT_TEMPERATURE {
            MaintenanceLabel::OverheatingMotor
        } else if f.power_usage > HIGH_POWER {
            MaintenanceLabel::CloggedFilter
        } else if f.vibration > HIGH_VIBRATION {
            MaintenanceLabel::BearingWear
        } else if f.noise_level > HIGH_NOISE {
            MaintenanceLabel::UnbalancedLoad
        } else {
            MaintenanceLabel::NormalOperation
        }
    }
}

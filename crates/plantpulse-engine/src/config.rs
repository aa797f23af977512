//! Configuration loading and typed config structures for the engine.
//!
//! The canonical configuration lives in `plantpulse-config.yaml` next to
//! the binary's working directory. Every field has a default, so a missing
//! file or a partial file is fine. The two endpoint base URLs can be
//! overridden by the `AI_API_BASE_URL` and `BACKEND_API_BASE_URL`
//! environment variables, which take precedence over the YAML values.

use std::path::Path;
use std::time::Duration;

use plantpulse_sim::EmitterSettings;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Tick cadence, seed, and run bounds.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Sporadic carton event parameters.
    #[serde(default)]
    pub events: EmitterSettings,

    /// Outbound endpoint settings.
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.endpoints.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.endpoints.apply_env_overrides();
        Ok(config)
    }
}

/// Tick cadence, seed, and run bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for reproducible telemetry.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Real-time milliseconds per tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Maximum number of ticks before the engine exits (0 = run forever).
    #[serde(default)]
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
        }
    }
}

/// Outbound endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL of the maintenance prediction endpoint.
    #[serde(default = "default_ai_api_base_url")]
    pub ai_api_base_url: String,

    /// Base URL of the backend ingestion API.
    #[serde(default = "default_backend_api_base_url")]
    pub backend_api_base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Retries after the initial attempt for every outbound call.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Linear backoff step between retries, in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Which predictor backend to use.
    #[serde(default)]
    pub predictor: PredictorKind,
}

impl EndpointsConfig {
    /// Override endpoint URLs with environment variables when set.
    ///
    /// These two variables are the pipeline's original configuration
    /// surface, so they win over the YAML file.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("AI_API_BASE_URL").ok(),
            std::env::var("BACKEND_API_BASE_URL").ok(),
        );
    }

    /// Apply URL overrides; `None` keeps the configured value.
    fn apply_overrides(
        &mut self,
        ai_api_base_url: Option<String>,
        backend_api_base_url: Option<String>,
    ) {
        if let Some(val) = ai_api_base_url {
            self.ai_api_base_url = val;
        }
        if let Some(val) = backend_api_base_url {
            self.backend_api_base_url = val;
        }
    }

    /// Per-request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Retry backoff step as a [`Duration`].
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            ai_api_base_url: default_ai_api_base_url(),
            backend_api_base_url: default_backend_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            predictor: PredictorKind::default(),
        }
    }
}

/// Selects the maintenance predictor backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorKind {
    /// The deployed prediction endpoint.
    #[default]
    Remote,
    /// Built-in threshold rules, no model deployment needed.
    Heuristic,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_tick_interval_ms() -> u64 {
    5_000
}

fn default_ai_api_base_url() -> String {
    "http://localhost:8000".to_owned()
}

fn default_backend_api_base_url() -> String {
    "http://localhost:5000".to_owned()
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.simulation.tick_interval_ms, 5_000);
        assert_eq!(config.simulation.max_ticks, 0);
        assert_eq!(config.events.interval_ticks, 50);
        assert_eq!(config.endpoints.predictor, PredictorKind::Remote);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
simulation:
  seed: 123
  tick_interval_ms: 1000
  max_ticks: 500

events:
  interval_ticks: 25
  production_probability: 0.7
  sale_probability: 0.3

endpoints:
  ai_api_base_url: "http://predictor:8000"
  backend_api_base_url: "http://backend:5000"
  request_timeout_ms: 3000
  max_retries: 1
  retry_backoff_ms: 250
  predictor: heuristic
"#;
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.simulation.seed, 123);
        assert_eq!(config.simulation.max_ticks, 500);
        assert_eq!(config.events.interval_ticks, 25);
        // Unspecified event fields keep their defaults.
        assert_eq!(config.events.production_min, 10);
        assert_eq!(config.events.buyers.len(), 7);
        assert_eq!(config.endpoints.max_retries, 1);
        assert_eq!(config.endpoints.predictor, PredictorKind::Heuristic);
        assert_eq!(
            config.endpoints.request_timeout(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "simulation:\n  seed: 7\n";
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.tick_interval_ms, 5_000);
        assert_eq!(config.events.interval_ticks, 50);
    }

    #[test]
    fn parse_empty_mapping_uses_all_defaults() {
        let config = EngineConfig::parse("{}").unwrap();
        assert_eq!(config.simulation, SimulationConfig::default());
        assert_eq!(config.events, EmitterSettings::default());
    }

    #[test]
    fn env_overrides_win_over_yaml_urls() {
        let yaml = r#"
endpoints:
  ai_api_base_url: "http://yaml-predictor:8000"
  backend_api_base_url: "http://yaml-backend:5000"
"#;
        let mut config = EngineConfig::parse(yaml).unwrap();
        config.endpoints.apply_overrides(
            Some("http://env-predictor:8000".to_owned()),
            Some("http://env-backend:5000".to_owned()),
        );
        assert_eq!(config.endpoints.ai_api_base_url, "http://env-predictor:8000");
        assert_eq!(config.endpoints.backend_api_base_url, "http://env-backend:5000");
    }

    #[test]
    fn unset_env_keeps_yaml_urls() {
        let yaml = "endpoints:\n  ai_api_base_url: \"http://yaml-predictor:8000\"\n";
        let mut config = EngineConfig::parse(yaml).unwrap();
        config
            .endpoints
            .apply_overrides(None, Some("http://env-backend:5000".to_owned()));
        assert_eq!(config.endpoints.ai_api_base_url, "http://yaml-predictor:8000");
        assert_eq!(config.endpoints.backend_api_base_url, "http://env-backend:5000");
    }

    #[test]
    fn unknown_predictor_kind_is_rejected() {
        let yaml = "endpoints:\n  predictor: oracle\n";
        let config = EngineConfig::parse(yaml);
        assert!(config.is_err());
    }
}

//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps the failure modes
//! during engine startup. Once the loop is running, failures are handled
//! inside it (logged and counted), so nothing after startup propagates here.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },
}

//! Typed errors for outbound calls.
//!
//! The loop's failure policy makes no distinction between transient and
//! permanent failures: every error here is handled the same way (log the
//! tick, drop its data, continue). The variants exist so logs say what
//! actually went wrong -- transport versus status versus payload shape.

/// Errors from the maintenance predictor.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The HTTP request failed (connect error, timeout, etc.).
    #[error("predictor request failed: {source}")]
    Request {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The predictor answered with a non-success status.
    #[error("predictor returned {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, for the log line.
        body: String,
    },

    /// The response body was not a valid label array.
    #[error("predictor payload invalid: {message}")]
    Payload {
        /// What was wrong with the payload.
        message: String,
    },

    /// The label array length did not match the submitted feature count.
    #[error("predictor returned {actual} labels for {expected} machines")]
    LengthMismatch {
        /// Number of feature vectors submitted.
        expected: usize,
        /// Number of labels returned.
        actual: usize,
    },
}

/// Errors from the backend forwarder.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The HTTP request failed (connect error, timeout, etc.).
    #[error("backend request failed: {source}")]
    Request {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, for the log line.
        body: String,
    },
}

//! Backend forwarder.
//!
//! Pushes the per-tick sensor document and the sporadic carton events to
//! the backend ingestion API:
//!
//! - `PUT {base}/sensorData/` with the full `{rooms, machines}` document
//! - `POST {base}/tx/cartons` with a cartons-produced event
//! - `POST {base}/tx/sale` with a carton sale event
//!
//! Delivery is best-effort: each call runs under the bounded retry policy,
//! and an exhausted budget surfaces the last error for the loop to log and
//! count. Nothing is queued or replayed across ticks. Retrying the state
//! PUT is safe (a full replace is idempotent), so its delivery is
//! effectively at-most-once per tick; the event POSTs are not idempotent,
//! so a response lost after the backend processed the write means a retry
//! can double-post -- event delivery is at-least-once.

use std::time::Duration;

use plantpulse_types::{CartonSale, CartonsProduced, SensorDocument};
use serde::Serialize;

use crate::error::ForwardError;
use crate::retry::RetryPolicy;
use crate::traits::TelemetrySink;

/// Client for the backend ingestion API.
pub struct Forwarder {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Forwarder {
    /// Create a forwarder for the backend at `base_url`.
    pub fn new(base_url: String, timeout: Duration, retry: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
            retry,
        }
    }

    /// Replace the backend's sensor state document.
    async fn put_sensor_data(&self, doc: &SensorDocument) -> Result<(), ForwardError> {
        let url = format!("{}/sensorData/", self.base_url);
        self.retry
            .run(|| self.send_once(self.client.put(&url), doc))
            .await
    }

    /// Post a cartons-produced event.
    async fn post_cartons_produced(&self, event: &CartonsProduced) -> Result<(), ForwardError> {
        let url = format!("{}/tx/cartons", self.base_url);
        self.retry
            .run(|| self.send_once(self.client.post(&url), event))
            .await
    }

    /// Post a carton sale event.
    async fn post_carton_sale(&self, event: &CartonSale) -> Result<(), ForwardError> {
        let url = format!("{}/tx/sale", self.base_url);
        self.retry
            .run(|| self.send_once(self.client.post(&url), event))
            .await
    }

    /// One attempt: send `body` on the prepared request and check status.
    async fn send_once<T: Serialize + ?Sized>(
        &self,
        request: reqwest::RequestBuilder,
        body: &T,
    ) -> Result<(), ForwardError> {
        let response = request.timeout(self.timeout).json(body).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_owned());
        Err(ForwardError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl TelemetrySink for Forwarder {
    async fn put_sensor_data(&self, doc: &SensorDocument) -> Result<(), ForwardError> {
        Self::put_sensor_data(self, doc).await
    }

    async fn post_cartons_produced(&self, event: &CartonsProduced) -> Result<(), ForwardError> {
        Self::post_cartons_produced(self, event).await
    }

    async fn post_carton_sale(&self, event: &CartonSale) -> Result<(), ForwardError> {
        Self::post_carton_sale(self, event).await
    }
}

//! Sporadic carton event emitter.
//!
//! Business events (cartons produced, cartons sold) are decoupled from the
//! regular telemetry cadence: a countdown counter seeded at N ticks is
//! decremented once per loop iteration, and on the tick it reaches zero the
//! emitter fires and the counter resets to N. On each firing, the two event
//! kinds roll independently -- production with probability `p1`, sale with
//! probability `p2` -- so a firing can yield zero, one, or two events.

use plantpulse_types::{CartonSale, CartonsProduced};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable emitter parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterSettings {
    /// Ticks between firings (the countdown seed N).
    pub interval_ticks: u32,
    /// Probability of a production event per firing.
    pub production_probability: f64,
    /// Probability of a sale event per firing.
    pub sale_probability: f64,
    /// Inclusive lower bound for cartons produced.
    pub production_min: u32,
    /// Inclusive upper bound for cartons produced.
    pub production_max: u32,
    /// Inclusive lower bound for cartons sold.
    pub sale_min: u32,
    /// Inclusive upper bound for cartons sold.
    pub sale_max: u32,
    /// Fixed buyer roster for sale events.
    pub buyers: Vec<String>,
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self {
            interval_ticks: 50,
            production_probability: 0.5,
            sale_probability: 0.2,
            production_min: 10,
            production_max: 100,
            sale_min: 5,
            sale_max: 50,
            buyers: default_buyers(),
        }
    }
}

/// The canonical distributor roster.
fn default_buyers() -> Vec<String> {
    [
        "AquaPure Distributors",
        "HydroWave Retailers",
        "CrystalClear Beverages",
        "EcoSip Packaging",
        "UrbanSpring Bottling Co.",
        "BlueDrop Traders",
        "FreshFlow Retail Pvt Ltd",
    ]
    .iter()
    .map(|&s| s.to_owned())
    .collect()
}

/// Events produced by one emitter invocation.
///
/// Both fields are `None` on every tick the countdown has not expired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartonBatch {
    /// Production event, if the production roll succeeded.
    pub produced: Option<CartonsProduced>,
    /// Sale event, if the sale roll succeeded.
    pub sale: Option<CartonSale>,
}

impl CartonBatch {
    /// True if neither event fired.
    pub const fn is_empty(&self) -> bool {
        self.produced.is_none() && self.sale.is_none()
    }
}

/// Countdown-gated emitter for sporadic carton events.
#[derive(Debug, Clone)]
pub struct CartonEmitter {
    settings: EmitterSettings,
    countdown: u32,
}

impl CartonEmitter {
    /// Create an emitter with the countdown seeded at `interval_ticks`.
    pub const fn new(settings: EmitterSettings) -> Self {
        let countdown = settings.interval_ticks;
        Self {
            settings,
            countdown,
        }
    }

    /// Remaining ticks until the next firing.
    pub const fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Advance the countdown by one tick; fire when it reaches zero.
    ///
    /// Returns the (possibly empty) batch of events. The countdown resets
    /// to the configured interval on the same tick it expires, so the
    /// emitter fires exactly once per `interval_ticks` ticks.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> CartonBatch {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return CartonBatch::default();
        }
        self.countdown = self.settings.interval_ticks;
        self.fire(rng)
    }

    /// Roll both event kinds independently.
    pub fn fire<R: Rng>(&self, rng: &mut R) -> CartonBatch {
        let produced = if rng.random::<f64>() < self.settings.production_probability {
            let hi = self.settings.production_max.max(self.settings.production_min);
            let count = rng.random_range(self.settings.production_min..=hi);
            Some(CartonsProduced::new(count))
        } else {
            None
        };

        let sale = if rng.random::<f64>() < self.settings.sale_probability {
            self.pick_buyer(rng).map(|buyer| {
                let hi = self.settings.sale_max.max(self.settings.sale_min);
                let count = rng.random_range(self.settings.sale_min..=hi);
                CartonSale::new(count, buyer)
            })
        } else {
            None
        };

        CartonBatch { produced, sale }
    }

    /// Draw a buyer uniformly from the roster; `None` if the roster is empty.
    fn pick_buyer<R: Rng>(&self, rng: &mut R) -> Option<String> {
        if self.settings.buyers.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.settings.buyers.len());
        self.settings.buyers.get(idx).cloned()
    }
}

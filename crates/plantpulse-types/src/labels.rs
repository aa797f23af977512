//! Maintenance label vocabulary.
//!
//! The predictor classifies every machine into exactly one of five
//! maintenance states per tick. The wire representation is the human-readable
//! string (e.g. `"Overheating Motor"`), which is what the remote endpoint
//! returns and what the backend document carries, so serde round-trips
//! through those exact strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A machine's inferred health state for one tick.
///
/// Assigned positionally from the predictor response and overwritten on the
/// next successful prediction. Never persisted across ticks in any other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceLabel {
    /// Motor running hot, typically high temperature plus high power draw.
    #[serde(rename = "Overheating Motor")]
    OverheatingMotor,
    /// Worn bearings, typically elevated vibration and noise.
    #[serde(rename = "Bearing Wear")]
    BearingWear,
    /// Mechanical imbalance in the rotating load.
    #[serde(rename = "Unbalanced Load")]
    UnbalancedLoad,
    /// Restricted airflow or coolant flow.
    #[serde(rename = "Clogged Filter")]
    CloggedFilter,
    /// No maintenance needed.
    #[serde(rename = "Normal Operation")]
    NormalOperation,
}

impl MaintenanceLabel {
    /// All labels the predictor can return, in a fixed order.
    pub const ALL: [Self; 5] = [
        Self::OverheatingMotor,
        Self::BearingWear,
        Self::UnbalancedLoad,
        Self::CloggedFilter,
        Self::NormalOperation,
    ];

    /// The exact wire string for this label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverheatingMotor => "Overheating Motor",
            Self::BearingWear => "Bearing Wear",
            Self::UnbalancedLoad => "Unbalanced Load",
            Self::CloggedFilter => "Clogged Filter",
            Self::NormalOperation => "Normal Operation",
        }
    }
}

impl fmt::Display for MaintenanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known maintenance label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maintenance label: {label:?}")]
pub struct ParseLabelError {
    /// The string that failed to parse.
    pub label: String,
}

impl FromStr for MaintenanceLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Overheating Motor" => Ok(Self::OverheatingMotor),
            "Bearing Wear" => Ok(Self::BearingWear),
            "Unbalanced Load" => Ok(Self::UnbalancedLoad),
            "Clogged Filter" => Ok(Self::CloggedFilter),
            "Normal Operation" => Ok(Self::NormalOperation),
            other => Err(ParseLabelError {
                label: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for label in MaintenanceLabel::ALL {
            let parsed: MaintenanceLabel = label.as_str().parse().unwrap();
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&MaintenanceLabel::OverheatingMotor).unwrap();
        assert_eq!(json, "\"Overheating Motor\"");

        let back: MaintenanceLabel = serde_json::from_str("\"Normal Operation\"").unwrap();
        assert_eq!(back, MaintenanceLabel::NormalOperation);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let result = "Flux Capacitor Drift".parse::<MaintenanceLabel>();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.label.contains("Flux"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            MaintenanceLabel::BearingWear.to_string(),
            MaintenanceLabel::BearingWear.as_str()
        );
    }
}

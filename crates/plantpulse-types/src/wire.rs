//! Wire documents for the backend ingestion endpoints.
//!
//! The backend consumes three payload shapes:
//!
//! - [`SensorDocument`] -- the full `{rooms, machines}` state, sent as a PUT
//!   once per tick. Machine entries carry the maintenance label but omit
//!   `production_speed`, matching the ingestion contract.
//! - [`CartonsProduced`] / [`CartonSale`] -- sporadic business events posted
//!   to the transaction endpoints. Ephemeral: constructed, sent, discarded.
//!
//! Field names and key casing (`DateTime`, `Buyer`) are part of the wire
//! contract and must not change.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::labels::MaintenanceLabel;
use crate::state::{Machine, PlantState, Room};

// ---------------------------------------------------------------------------
// Sensor document
// ---------------------------------------------------------------------------

/// One room entry in the forwarded sensor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReading {
    /// Room identity.
    pub name: String,
    /// Ambient temperature.
    pub temperature: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Smoke sensor reading.
    pub smoke: f64,
    /// Noise level.
    pub noise_level: f64,
}

impl From<&Room> for RoomReading {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            temperature: room.temperature,
            humidity: room.humidity,
            smoke: room.smoke,
            noise_level: room.noise_level,
        }
    }
}

/// One machine entry in the forwarded sensor document.
///
/// `production_speed` is a predictor feature only and is not part of the
/// ingestion contract, so it is deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineReading {
    /// Machine identity.
    pub name: String,
    /// Operating temperature.
    pub temperature: f64,
    /// Vibration reading.
    pub vibration: f64,
    /// Power draw.
    pub power_usage: f64,
    /// Noise level.
    pub noise_level: f64,
    /// Latest maintenance prediction, `null` before the first prediction.
    pub maintenance: Option<MaintenanceLabel>,
}

impl From<&Machine> for MachineReading {
    fn from(machine: &Machine) -> Self {
        Self {
            name: machine.name.clone(),
            temperature: machine.temperature,
            vibration: machine.vibration,
            power_usage: machine.power_usage,
            noise_level: machine.noise_level,
            maintenance: machine.maintenance,
        }
    }
}

/// The full state document sent to `PUT {backend}/sensorData/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDocument {
    /// All room readings, in roster order.
    pub rooms: Vec<RoomReading>,
    /// All machine readings, in roster order.
    pub machines: Vec<MachineReading>,
}

impl From<&PlantState> for SensorDocument {
    fn from(state: &PlantState) -> Self {
        Self {
            rooms: state.rooms.iter().map(RoomReading::from).collect(),
            machines: state.machines.iter().map(MachineReading::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Carton events
// ---------------------------------------------------------------------------

/// A "cartons produced" business event for `POST {backend}/tx/cartons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartonsProduced {
    /// Number of cartons produced in this batch.
    pub cartons_produced: u32,
    /// ISO-8601 timestamp of the event.
    #[serde(rename = "DateTime")]
    pub date_time: String,
}

impl CartonsProduced {
    /// Create a production event stamped with the current UTC time.
    pub fn new(count: u32) -> Self {
        Self {
            cartons_produced: count,
            date_time: Utc::now().to_rfc3339(),
        }
    }
}

/// A "cartons sold" business event for `POST {backend}/tx/sale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartonSale {
    /// Number of cartons sold.
    pub cartons_sold: u32,
    /// ISO-8601 timestamp of the event.
    #[serde(rename = "DateTime")]
    pub date_time: String,
    /// The purchasing company, drawn from a fixed roster.
    #[serde(rename = "Buyer")]
    pub buyer: String,
}

impl CartonSale {
    /// Create a sale event stamped with the current UTC time.
    pub fn new(count: u32, buyer: String) -> Self {
        Self {
            cartons_sold: count,
            date_time: Utc::now().to_rfc3339(),
            buyer,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sensor_document_omits_production_speed() {
        let state = PlantState {
            rooms: vec![Room {
                name: "Warehouse".to_owned(),
                temperature: 14.0,
                humidity: 4.0,
                smoke: 1.5,
                noise_level: 3.5,
            }],
            machines: vec![Machine {
                name: "Furnace".to_owned(),
                temperature: 70.0,
                vibration: 3.0,
                power_usage: 7.0,
                production_speed: 300.0,
                noise_level: 3.0,
                maintenance: Some(MaintenanceLabel::OverheatingMotor),
            }],
        };

        let doc = SensorDocument::from(&state);
        let json = serde_json::to_value(&doc).unwrap();

        let machine = json
            .get("machines")
            .and_then(|m| m.get(0))
            .unwrap();
        assert!(machine.get("production_speed").is_none());
        assert_eq!(
            machine.get("maintenance").and_then(|v| v.as_str()),
            Some("Overheating Motor")
        );

        let room = json.get("rooms").and_then(|r| r.get(0)).unwrap();
        assert_eq!(room.get("name").and_then(|v| v.as_str()), Some("Warehouse"));
        assert!(room.get("smoke").is_some());
    }

    #[test]
    fn unlabeled_machine_serializes_null_maintenance() {
        let machine = Machine {
            name: "Cooler".to_owned(),
            temperature: 40.0,
            vibration: 0.5,
            power_usage: 2.5,
            production_speed: 150.0,
            noise_level: 0.5,
            maintenance: None,
        };
        let reading = MachineReading::from(&machine);
        let json = serde_json::to_value(&reading).unwrap();
        assert!(json.get("maintenance").unwrap().is_null());
    }

    #[test]
    fn carton_events_use_contract_key_casing() {
        let produced = CartonsProduced {
            cartons_produced: 42,
            date_time: "2026-01-01T00:00:00Z".to_owned(),
        };
        let json = serde_json::to_value(&produced).unwrap();
        assert_eq!(
            json.get("cartons_produced").and_then(serde_json::Value::as_u64),
            Some(42)
        );
        assert!(json.get("DateTime").is_some());

        let sale = CartonSale {
            cartons_sold: 7,
            date_time: "2026-01-01T00:00:00Z".to_owned(),
            buyer: "BlueDrop Traders".to_owned(),
        };
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(
            json.get("Buyer").and_then(|v| v.as_str()),
            Some("BlueDrop Traders")
        );
        assert!(json.get("DateTime").is_some());
    }

    #[test]
    fn new_events_carry_a_timestamp() {
        let produced = CartonsProduced::new(10);
        assert!(!produced.date_time.is_empty());
        let sale = CartonSale::new(5, "AquaPure Distributors".to_owned());
        assert!(!sale.date_time.is_empty());
        assert_eq!(sale.cartons_sold, 5);
    }
}

//! In-memory plant state.
//!
//! [`PlantState`] is the single snapshot the tick loop owns and mutates in
//! place: a fixed roster of rooms and machines whose numeric readings drift
//! each tick. Entity identity (the name) is stable for the process lifetime;
//! no entity is created or destroyed mid-run.
//!
//! The original pipeline kept this as a shared mutable dictionary. Here it
//! is an owned struct passed `&mut` through the loop so the contract is
//! testable without hidden aliasing.

use serde::{Deserialize, Serialize};

use crate::labels::MaintenanceLabel;

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// Sensor readings for one monitored room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable room identity.
    pub name: String,
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity reading.
    pub humidity: f64,
    /// Smoke sensor reading.
    pub smoke: f64,
    /// Noise level on a 0-5 scale.
    pub noise_level: f64,
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// Sensor readings and predicted health state for one production machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Stable machine identity.
    pub name: String,
    /// Operating temperature in degrees Celsius.
    pub temperature: f64,
    /// Vibration reading on a 0-5 scale.
    pub vibration: f64,
    /// Power draw in kilowatts.
    pub power_usage: f64,
    /// Cartons-per-hour production rate.
    pub production_speed: f64,
    /// Noise level on a 0-5 scale.
    pub noise_level: f64,
    /// Latest maintenance prediction. `None` until the first successful
    /// predictor call; overwritten on every subsequent success.
    pub maintenance: Option<MaintenanceLabel>,
}

impl Machine {
    /// Extract the feature vector submitted to the predictor.
    pub const fn features(&self) -> MachineFeatures {
        MachineFeatures {
            temperature: self.temperature,
            vibration: self.vibration,
            power_usage: self.power_usage,
            production_speed: self.production_speed,
            noise_level: self.noise_level,
        }
    }
}

/// One predictor input row, in the field order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineFeatures {
    /// Operating temperature in degrees Celsius.
    pub temperature: f64,
    /// Vibration reading on a 0-5 scale.
    pub vibration: f64,
    /// Power draw in kilowatts.
    pub power_usage: f64,
    /// Cartons-per-hour production rate.
    pub production_speed: f64,
    /// Noise level on a 0-5 scale.
    pub noise_level: f64,
}

// ---------------------------------------------------------------------------
// PlantState
// ---------------------------------------------------------------------------

/// The full plant snapshot mutated once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    /// Monitored rooms, in a fixed order.
    pub rooms: Vec<Room>,
    /// Production machines, in a fixed order. Predictor labels are attached
    /// positionally, so this order must match the submitted feature vectors.
    pub machines: Vec<Machine>,
}

impl PlantState {
    /// Build the feature vectors for all machines, in machine order.
    pub fn machine_features(&self) -> Vec<MachineFeatures> {
        self.machines.iter().map(Machine::features).collect()
    }

    /// Attach predictor labels to machines in strict positional order.
    ///
    /// The caller is responsible for ensuring `labels` has the same length
    /// as the machine roster (the predictor validates this); any surplus on
    /// either side is ignored by the zip.
    pub fn attach_labels(&mut self, labels: &[MaintenanceLabel]) {
        for (machine, label) in self.machines.iter_mut().zip(labels) {
            machine.maintenance = Some(*label);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn machine(name: &str, temperature: f64) -> Machine {
        Machine {
            name: name.to_owned(),
            temperature,
            vibration: 1.0,
            power_usage: 4.0,
            production_speed: 250.0,
            noise_level: 1.5,
            maintenance: None,
        }
    }

    #[test]
    fn features_follow_machine_order() {
        let state = PlantState {
            rooms: vec![],
            machines: vec![machine("Furnace", 70.0), machine("Cooler", 40.0)],
        };
        let features = state.machine_features();
        assert_eq!(features.len(), 2);
        let first = features.first().unwrap();
        let second = features.get(1).unwrap();
        assert!((first.temperature - 70.0).abs() < f64::EPSILON);
        assert!((second.temperature - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn labels_attach_positionally() {
        let mut state = PlantState {
            rooms: vec![],
            machines: vec![machine("Furnace", 70.0), machine("Cooler", 40.0)],
        };
        state.attach_labels(&[
            MaintenanceLabel::OverheatingMotor,
            MaintenanceLabel::NormalOperation,
        ]);
        let labels: Vec<_> = state
            .machines
            .iter()
            .map(|m| m.maintenance)
            .collect();
        assert_eq!(
            labels,
            vec![
                Some(MaintenanceLabel::OverheatingMotor),
                Some(MaintenanceLabel::NormalOperation)
            ]
        );
    }

    #[test]
    fn reattaching_overwrites_previous_labels() {
        let mut state = PlantState {
            rooms: vec![],
            machines: vec![machine("Furnace", 70.0)],
        };
        state.attach_labels(&[MaintenanceLabel::CloggedFilter]);
        state.attach_labels(&[MaintenanceLabel::NormalOperation]);
        assert_eq!(
            state.machines.first().unwrap().maintenance,
            Some(MaintenanceLabel::NormalOperation)
        );
    }
}

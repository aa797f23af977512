//! Starting plant roster.
//!
//! Three monitored rooms and eight production machines for the bottling
//! line, with the canonical initial readings. The roster is fixed for the
//! process lifetime; the walk only ever mutates readings in place.

use plantpulse_types::{Machine, PlantState, Room};

/// Build the starting plant state.
pub fn starting_plant() -> PlantState {
    PlantState {
        rooms: vec![
            room("Machine Room", 15.0, 2.5, 2.0, 4.0),
            room("Security Room", 12.0, 3.0, 1.0, 4.5),
            room("Warehouse", 14.0, 4.0, 1.5, 3.5),
        ],
        machines: vec![
            machine("Furnace", 70.0, 3.0, 7.0, 300.0, 3.0),
            machine("Cylinder Creator", 50.0, 1.5, 4.0, 250.0, 1.5),
            machine("Bottle Shaper", 45.0, 1.0, 3.5, 200.0, 1.0),
            machine("Cooler", 40.0, 0.5, 2.5, 150.0, 0.5),
            machine("Cleaner", 35.0, 1.0, 3.0, 180.0, 1.0),
            machine("Encapsulator", 55.0, 2.0, 5.0, 220.0, 2.0),
            machine("Labeller", 50.0, 1.5, 4.5, 230.0, 1.5),
            machine("Packager", 60.0, 2.5, 6.0, 280.0, 2.5),
        ],
    }
}

fn room(name: &str, temperature: f64, humidity: f64, smoke: f64, noise_level: f64) -> Room {
    Room {
        name: name.to_owned(),
        temperature,
        humidity,
        smoke,
        noise_level,
    }
}

fn machine(
    name: &str,
    temperature: f64,
    vibration: f64,
    power_usage: f64,
    production_speed: f64,
    noise_level: f64,
) -> Machine {
    Machine {
        name: name.to_owned(),
        temperature,
        vibration,
        power_usage,
        production_speed,
        noise_level,
        maintenance: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::walk::{
        MACHINE_POWER_USAGE, MACHINE_PRODUCTION_SPEED, MACHINE_TEMPERATURE, MACHINE_VIBRATION,
    };

    #[test]
    fn roster_has_three_rooms_and_eight_machines() {
        let state = starting_plant();
        assert_eq!(state.rooms.len(), 3);
        assert_eq!(state.machines.len(), 8);
    }

    #[test]
    fn initial_readings_are_inside_the_clamp_table() {
        let state = starting_plant();
        for machine in &state.machines {
            assert!(machine.temperature >= MACHINE_TEMPERATURE.min);
            assert!(machine.temperature <= MACHINE_TEMPERATURE.max);
            assert!(machine.vibration >= MACHINE_VIBRATION.min);
            assert!(machine.vibration <= MACHINE_VIBRATION.max);
            assert!(machine.power_usage >= MACHINE_POWER_USAGE.min);
            assert!(machine.power_usage <= MACHINE_POWER_USAGE.max);
            assert!(machine.production_speed >= MACHINE_PRODUCTION_SPEED.min);
            assert!(machine.production_speed <= MACHINE_PRODUCTION_SPEED.max);
        }
    }

    #[test]
    fn no_machine_starts_with_a_label() {
        let state = starting_plant();
        assert!(state.machines.iter().all(|m| m.maintenance.is_none()));
    }

    #[test]
    fn names_are_unique() {
        let state = starting_plant();
        let mut names: Vec<&str> = state.machines.iter().map(|m| m.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}

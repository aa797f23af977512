//! One-tick state transition over the whole plant.
//!
//! [`advance_plant`] is the synthetic state generator: given the current
//! snapshot and nothing else, it drifts every numeric field by a bounded
//! random-walk step. Pure transformation over in-memory state, no I/O, no
//! error conditions. Maintenance labels are left untouched; only the
//! predictor assigns those.

use plantpulse_types::PlantState;
use rand::Rng;

use crate::walk::{
    self, MACHINE_NOISE_LEVEL, MACHINE_POWER_USAGE, MACHINE_PRODUCTION_SPEED, MACHINE_TEMPERATURE,
    MACHINE_VIBRATION, ROOM_HUMIDITY, ROOM_NOISE_LEVEL, ROOM_SMOKE, ROOM_TEMPERATURE,
};

/// Advance every sensor reading in the plant by one tick.
///
/// Each field gets an independent uniform delta, is clamped to its
/// documented range, and is rounded to two decimals (see [`crate::walk`]
/// for the table). Field order is fixed, so a fixed RNG seed reproduces
/// identical snapshot sequences.
pub fn advance_plant<R: Rng>(state: &mut PlantState, rng: &mut R) {
    for room in &mut state.rooms {
        room.temperature = walk::step(room.temperature, ROOM_TEMPERATURE, rng);
        room.humidity = walk::step(room.humidity, ROOM_HUMIDITY, rng);
        room.smoke = walk::step(room.smoke, ROOM_SMOKE, rng);
        room.noise_level = walk::step(room.noise_level, ROOM_NOISE_LEVEL, rng);
    }
    for machine in &mut state.machines {
        machine.temperature = walk::step(machine.temperature, MACHINE_TEMPERATURE, rng);
        machine.vibration = walk::step(machine.vibration, MACHINE_VIBRATION, rng);
        machine.power_usage = walk::step(machine.power_usage, MACHINE_POWER_USAGE, rng);
        machine.production_speed =
            walk::step(machine.production_speed, MACHINE_PRODUCTION_SPEED, rng);
        machine.noise_level = walk::step(machine.noise_level, MACHINE_NOISE_LEVEL, rng);
    }
}

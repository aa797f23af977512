//! Bounded random-walk primitives.
//!
//! Every sensor field drifts by a uniform delta from a small symmetric
//! interval, is clamped into a fixed physical range, and is rounded to two
//! decimal digits. The per-field table below is the single authoritative
//! bound set for the whole pipeline (the original had two inconsistent
//! variants; this table follows the stricter one and completes the fields
//! it left unclamped).
//!
//! | field                    | delta  | clamp      |
//! |--------------------------|--------|------------|
//! | room temperature         | ±1.0   | [-10, 40]  |
//! | room humidity            | ±0.5   | [0, 10]    |
//! | room smoke               | ±0.5   | [0, 10]    |
//! | room noise level         | ±0.5   | [0, 5]     |
//! | machine temperature      | ±5.0   | [30, 89]   |
//! | machine vibration        | ±0.5   | [0, 5]     |
//! | machine power usage      | ±1.0   | [1, 10]    |
//! | machine production speed | ±50.0  | [50, 500]  |
//! | machine noise level      | ±0.5   | [0, 5]     |

use rand::Rng;

/// Walk parameters for a single sensor field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Half-width of the symmetric uniform perturbation interval.
    pub delta: f64,
    /// Lower clamp bound.
    pub min: f64,
    /// Upper clamp bound.
    pub max: f64,
}

/// Room ambient temperature bounds.
pub const ROOM_TEMPERATURE: FieldBounds = FieldBounds {
    delta: 1.0,
    min: -10.0,
    max: 40.0,
};

/// Room humidity bounds.
pub const ROOM_HUMIDITY: FieldBounds = FieldBounds {
    delta: 0.5,
    min: 0.0,
    max: 10.0,
};

/// Room smoke sensor bounds.
pub const ROOM_SMOKE: FieldBounds = FieldBounds {
    delta: 0.5,
    min: 0.0,
    max: 10.0,
};

/// Room noise level bounds.
pub const ROOM_NOISE_LEVEL: FieldBounds = FieldBounds {
    delta: 0.5,
    min: 0.0,
    max: 5.0,
};

/// Machine operating temperature bounds.
pub const MACHINE_TEMPERATURE: FieldBounds = FieldBounds {
    delta: 5.0,
    min: 30.0,
    max: 89.0,
};

/// Machine vibration bounds.
pub const MACHINE_VIBRATION: FieldBounds = FieldBounds {
    delta: 0.5,
    min: 0.0,
    max: 5.0,
};

/// Machine power draw bounds.
pub const MACHINE_POWER_USAGE: FieldBounds = FieldBounds {
    delta: 1.0,
    min: 1.0,
    max: 10.0,
};

/// Machine production speed bounds.
pub const MACHINE_PRODUCTION_SPEED: FieldBounds = FieldBounds {
    delta: 50.0,
    min: 50.0,
    max: 500.0,
};

/// Machine noise level bounds.
pub const MACHINE_NOISE_LEVEL: FieldBounds = FieldBounds {
    delta: 0.5,
    min: 0.0,
    max: 5.0,
};

/// Advance one field by a bounded random-walk step.
///
/// Draws a delta uniformly from `[-bounds.delta, bounds.delta]`, clamps the
/// result into `[bounds.min, bounds.max]`, and rounds to two decimals.
pub fn step<R: Rng>(value: f64, bounds: FieldBounds, rng: &mut R) -> f64 {
    let drifted = value + rng.random_range(-bounds.delta..=bounds.delta);
    round2(drifted.clamp(bounds.min, bounds.max))
}

/// Round a reading to two decimal digits, the precision the backend stores.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn round2_rounds_to_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(9.876), 9.88);
        assert_eq!(round2(-0.456), -0.46);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn step_stays_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut value = 70.0;
        for _ in 0..10_000 {
            value = step(value, MACHINE_TEMPERATURE, &mut rng);
            assert!(value >= MACHINE_TEMPERATURE.min);
            assert!(value <= MACHINE_TEMPERATURE.max);
        }
    }

    #[test]
    fn step_moves_at_most_delta_plus_rounding() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut value = 2.5;
        for _ in 0..1000 {
            let next = step(value, ROOM_NOISE_LEVEL, &mut rng);
            assert!((next - value).abs() <= ROOM_NOISE_LEVEL.delta + 0.01);
            value = next;
        }
    }

    #[test]
    fn step_is_deterministic_for_a_fixed_seed() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                step(15.0, ROOM_TEMPERATURE, &mut a),
                step(15.0, ROOM_TEMPERATURE, &mut b)
            );
        }
    }

    #[test]
    fn step_clamps_runaway_values() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Start far above the bound: the first step must clamp back in.
        let value = step(500.0, MACHINE_TEMPERATURE, &mut rng);
        assert_eq!(value, MACHINE_TEMPERATURE.max);
    }
}

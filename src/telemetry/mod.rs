//! Simulated sensor state: seeding, drift, and the per-device store.

use rand::Rng;

use crate::ReadingVector;

pub mod drift;
pub mod profile;
mod store;

pub use store::TelemetryStore;

use drift::{draw_step, drift};
use profile::{FieldProfile, CO2_PPM, EC_MS_CM, HUMIDITY, LIGHT_PPFD, PH, TEMP_C};

// ---

/// Fresh reading vector with every field drawn from its seed range.
pub fn seed<R: Rng + ?Sized>(rng: &mut R) -> ReadingVector {
    // ---
    ReadingVector {
        ph: PH.seed_value(rng),
        ec_ms_cm: EC_MS_CM.seed_value(rng),
        temp_c: TEMP_C.seed_value(rng),
        humidity: HUMIDITY.seed_value(rng),
        co2_ppm: CO2_PPM.seed_value(rng),
        light_ppfd: LIGHT_PPFD.seed_value(rng),
    }
}

/// One random-walk step applied independently to every field.
pub fn step<R: Rng + ?Sized>(current: &ReadingVector, rng: &mut R) -> ReadingVector {
    // ---
    let mut walk = |value: f64, p: &FieldProfile| {
        drift(value, draw_step(&mut *rng, p.max_step), p)
    };

    ReadingVector {
        ph: walk(current.ph, &PH),
        ec_ms_cm: walk(current.ec_ms_cm, &EC_MS_CM),
        temp_c: walk(current.temp_c, &TEMP_C),
        humidity: walk(current.humidity, &HUMIDITY),
        co2_ppm: walk(current.co2_ppm, &CO2_PPM),
        light_ppfd: walk(current.light_ppfd, &LIGHT_PPFD),
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_moves_each_field_by_at_most_its_max_step() {
        // ---
        let mut rng = StdRng::seed_from_u64(3);
        let start = seed(&mut rng);
        for _ in 0..200 {
            let next = step(&start, &mut rng);
            let pairs = start.values().into_iter().zip(next.values());
            for (p, (a, b)) in profile::ALL.iter().zip(pairs) {
                // Half a display unit of slack for rounding.
                let slack = 0.5 / 10f64.powi(p.decimals as i32) + 1e-9;
                assert!(
                    (b - a).abs() <= p.max_step + slack,
                    "{}: {} -> {}",
                    p.name,
                    a,
                    b
                );
            }
        }
    }
}

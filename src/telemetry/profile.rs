//! Per-field simulation parameters for the six reading channels.

use rand::Rng;

use super::drift::round_to;

/// Seeding and drift parameters for one sensor channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldProfile {
    // ---
    pub name: &'static str,
    /// Initial values are drawn uniformly from `[seed_lo, seed_hi]`.
    pub seed_lo: f64,
    pub seed_hi: f64,
    /// Operating range; drift reflects at these bounds.
    pub lo: f64,
    pub hi: f64,
    /// Largest perturbation applied in a single drift step.
    pub max_step: f64,
    /// Decimal places kept after every update.
    pub decimals: u32,
}

impl FieldProfile {
    // ---
    /// Draw a rounded initial value from the seed range.
    pub fn seed_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round_to(rng.gen_range(self.seed_lo..=self.seed_hi), self.decimals)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    pub fn seed_contains(&self, value: f64) -> bool {
        (self.seed_lo..=self.seed_hi).contains(&value)
    }
}

pub const PH: FieldProfile = FieldProfile {
    name: "ph",
    seed_lo: 5.7,
    seed_hi: 6.3,
    lo: 5.2,
    hi: 6.8,
    max_step: 0.06,
    decimals: 2,
};

pub const EC_MS_CM: FieldProfile = FieldProfile {
    name: "ec_ms_cm",
    seed_lo: 1.6,
    seed_hi: 2.6,
    lo: 1.0,
    hi: 3.2,
    max_step: 0.08,
    decimals: 2,
};

pub const TEMP_C: FieldProfile = FieldProfile {
    name: "temp_c",
    seed_lo: 20.0,
    seed_hi: 26.0,
    lo: 18.0,
    hi: 30.0,
    max_step: 0.3,
    decimals: 1,
};

pub const HUMIDITY: FieldProfile = FieldProfile {
    name: "humidity",
    seed_lo: 55.0,
    seed_hi: 75.0,
    lo: 40.0,
    hi: 90.0,
    max_step: 1.2,
    decimals: 0,
};

pub const CO2_PPM: FieldProfile = FieldProfile {
    name: "co2_ppm",
    seed_lo: 800.0,
    seed_hi: 1100.0,
    lo: 600.0,
    hi: 1400.0,
    max_step: 25.0,
    decimals: 0,
};

pub const LIGHT_PPFD: FieldProfile = FieldProfile {
    name: "light_ppfd",
    seed_lo: 200.0,
    seed_hi: 500.0,
    lo: 100.0,
    hi: 800.0,
    max_step: 15.0,
    decimals: 0,
};

/// All channels, in reading-vector field order.
pub const ALL: [FieldProfile; 6] = [PH, EC_MS_CM, TEMP_C, HUMIDITY, CO2_PPM, LIGHT_PPFD];

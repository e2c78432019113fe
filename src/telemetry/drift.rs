//! Bounded random walk with single-pass reflection at the range edges.
//!
//! The arithmetic is kept free of randomness: callers draw the step and pass
//! it in, so every function here can be tested with fixed inputs.

use rand::Rng;

use super::profile::FieldProfile;

/// Fold `v` back into `[lo, hi]` by mirroring across the bound it crossed.
///
/// One pass only: the lower bound is checked first, then the upper bound.
/// A value further out than the range width can still end up outside.
pub fn reflect(v: f64, lo: f64, hi: f64) -> f64 {
    // ---
    let mut v = v;
    if v < lo {
        v = lo + (lo - v);
    }
    if v > hi {
        v = hi - (v - hi);
    }
    v
}

/// Round to `decimals` places.
///
/// Exact ties round half away from zero (`f64::round`), not half to even.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Draw a perturbation uniformly from `[-max_step, +max_step]`.
pub fn draw_step<R: Rng + ?Sized>(rng: &mut R, max_step: f64) -> f64 {
    rng.gen_range(-max_step..=max_step)
}

/// Apply an already-drawn `step` to `value` under `profile`.
pub fn drift(value: f64, step: f64, profile: &FieldProfile) -> f64 {
    round_to(reflect(value + step, profile.lo, profile.hi), profile.decimals)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::telemetry::profile::{ALL, CO2_PPM, PH, TEMP_C};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_in_range_step_is_untouched() {
        // ---
        assert_eq!(reflect(6.0, 5.2, 6.8), 6.0);
        assert_eq!(reflect(5.2, 5.2, 6.8), 5.2);
        assert_eq!(reflect(6.8, 5.2, 6.8), 6.8);
    }

    #[test]
    fn test_reflects_below_lower_bound() {
        // ---
        let v = reflect(595.0, 600.0, 1400.0);
        assert_eq!(v, 605.0);
    }

    #[test]
    fn test_reflects_above_upper_bound() {
        // ---
        let v = reflect(1410.0, 600.0, 1400.0);
        assert_eq!(v, 1390.0);
    }

    #[test]
    fn test_single_pass_can_leave_range() {
        // ---
        // Overshoot by more than the width: 10 above hi mirrors to 10 below lo.
        let v = reflect(15.0, 0.0, 5.0);
        assert_eq!(v, -5.0);
    }

    #[test]
    fn test_undershoot_past_upper_is_folded_twice() {
        // ---
        // lo + (lo - v) = 12 > hi, so the upper check still fires.
        let v = reflect(-12.0, 0.0, 10.0);
        assert_eq!(v, 8.0);
    }

    #[test]
    fn test_rounding_precision() {
        // ---
        assert_eq!(round_to(6.0349, 2), 6.03);
        assert_eq!(round_to(22.46, 1), 22.5);
        assert_eq!(round_to(64.6, 0), 65.0);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // ---
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(62.5, 0), 63.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
    }

    #[test]
    fn test_drift_applies_step_and_rounds() {
        // ---
        assert_eq!(drift(6.0, 0.0412, &PH), 6.04);
        assert_eq!(drift(29.9, 0.3, &TEMP_C), 29.8);
        assert_eq!(drift(610.0, -24.6, &CO2_PPM), 615.0);
    }

    #[test]
    fn test_any_step_up_to_range_width_stays_in_range() {
        // ---
        let mut rng = StdRng::seed_from_u64(0xD21F7);
        for p in ALL {
            let width = p.hi - p.lo;
            for _ in 0..2_000 {
                let v = rng.gen_range(p.lo..=p.hi);
                let m = rng.gen_range(0.0..=width);
                let out = reflect(v + draw_step(&mut rng, m), p.lo, p.hi);
                assert!(
                    out >= p.lo - 1e-9 && out <= p.hi + 1e-9,
                    "{}: v={} m={} -> {}",
                    p.name,
                    v,
                    m,
                    out
                );
            }
        }
    }

    #[test]
    fn test_repeated_drift_from_edges_stays_in_range() {
        // ---
        let mut rng = StdRng::seed_from_u64(11);
        for p in ALL {
            for start in [p.lo, p.hi] {
                let mut v = start;
                for _ in 0..5_000 {
                    v = drift(v, draw_step(&mut rng, p.max_step), &p);
                    assert!(p.contains(v), "{} drifted to {}", p.name, v);
                }
            }
        }
    }
}

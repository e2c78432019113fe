use std::collections::HashMap;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::ReadingVector;

// ---

/// Last-known reading per device, lazily seeded on first read.
///
/// The map and the RNG share one lock so each read-modify-write of a
/// vector happens as a unit.
pub struct TelemetryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    readings: HashMap<String, ReadingVector>,
    rng: StdRng,
}

impl TelemetryStore {
    // ---
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Store with a deterministic RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(Inner {
                readings: HashMap::new(),
                rng,
            }),
        }
    }

    /// Advance `device_id` by one step and return the new vector.
    ///
    /// The first call for a device seeds it and returns the seed; later calls
    /// drift the stored vector. Registry membership is the caller's concern.
    pub fn next_reading(&self, device_id: &str) -> ReadingVector {
        // ---
        let mut guard = self.inner.lock();
        let Inner { readings, rng } = &mut *guard;

        match readings.get_mut(device_id) {
            Some(current) => {
                *current = super::step(current, rng);
                *current
            }
            None => {
                let seeded = super::seed(rng);
                debug!("Seeded telemetry for {}: {:?}", device_id, seeded);
                readings.insert(device_id.to_string(), seeded);
                seeded
            }
        }
    }

    /// Number of devices that have been seeded so far.
    pub fn seeded_count(&self) -> usize {
        self.inner.lock().readings.len()
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

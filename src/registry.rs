//! Fixed, ordered set of simulated devices known to the service.

use tracing::warn;

/// Ordered list of device identifiers, immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    ids: Vec<String>,
}

impl DeviceRegistry {
    // ---
    /// Build a registry from a comma-delimited list.
    ///
    /// Entries are trimmed, empty entries are discarded, and repeated
    /// identifiers keep only their first position.
    pub fn from_delimited(raw: &str) -> Self {
        // ---
        let mut ids: Vec<String> = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            if ids.iter().any(|id| id == entry) {
                warn!("Ignoring duplicate device id '{}'", entry);
                continue;
            }
            ids.push(entry.to_string());
        }

        if ids.is_empty() {
            warn!("Device registry is empty; every device request will be rejected");
        }

        Self { ids }
    }

    /// Identifiers in configured order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, device_id: &str) -> bool {
        self.ids.iter().any(|id| id == device_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

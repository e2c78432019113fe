//! Data models for the mock plant backend.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---

/// Six-channel snapshot of a device's simulated sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingVector {
    // ---
    pub ph: f64,
    pub ec_ms_cm: f64,
    pub temp_c: f64,
    pub humidity: f64,
    pub co2_ppm: f64,
    pub light_ppfd: f64,
}

impl ReadingVector {
    /// Field values in declaration order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.ph,
            self.ec_ms_cm,
            self.temp_c,
            self.humidity,
            self.co2_ppm,
            self.light_ppfd,
        ]
    }
}

/// An optional request field that remembers how it was supplied.
///
/// `Omitted` means the key was absent; `Null` means it was sent as `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Setpoint<T> {
    #[default]
    Omitted,
    Null,
    Value(T),
}

impl<T> Setpoint<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Setpoint::Omitted)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Setpoint::Value(v) => Some(v),
            _ => None,
        }
    }
}

// Only reached when the key is present; absent keys take `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Setpoint<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Setpoint::Value(v),
            None => Setpoint::Null,
        })
    }
}

impl<T: Serialize> Serialize for Setpoint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Setpoint::Value(v) => serializer.serialize_some(v),
            Setpoint::Null | Setpoint::Omitted => serializer.serialize_none(),
        }
    }
}

/// Body of `POST /control/setpoints`. Accepted and echoed, never applied.
///
/// Numeric targets are `f64`, so an integer target such as `60` is echoed
/// back as `60.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetpointsRequest {
    // ---
    pub device_id: String,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_temp_c: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_humidity: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_co2_ppm: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_ph: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_ec_ms_cm: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub target_light_ppfd: Setpoint<f64>,

    #[serde(default, skip_serializing_if = "Setpoint::is_omitted")]
    pub comment: Setpoint<String>,
}

impl SetpointsRequest {
    /// How many numeric targets carry an actual value.
    pub fn target_count(&self) -> usize {
        [
            &self.target_temp_c,
            &self.target_humidity,
            &self.target_co2_ppm,
            &self.target_ph,
            &self.target_ec_ms_cm,
            &self.target_light_ppfd,
        ]
        .iter()
        .filter(|t| t.value().is_some())
        .count()
    }
}

#[derive(Debug, Serialize)]
pub struct DeviceEntry {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DevicesResponse {
    pub devices: Vec<DeviceEntry>,
}

#[derive(Debug, Serialize)]
pub struct TelemetryResponse {
    pub latest: ReadingVector,
    pub device_id: String,
}

#[derive(Debug, Serialize)]
pub struct SetpointsAck {
    pub status: &'static str,
    pub applied: bool,
    pub echo: SetpointsRequest,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub devices: Vec<String>,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omitted_null_and_value_are_distinct() {
        // ---
        let req: SetpointsRequest = serde_json::from_value(json!({
            "device_id": "container-001",
            "target_temp_c": 23.5,
            "target_ph": null
        }))
        .unwrap();

        assert_eq!(req.target_temp_c, Setpoint::Value(23.5));
        assert_eq!(req.target_ph, Setpoint::Null);
        assert_eq!(req.target_humidity, Setpoint::Omitted);
        assert_eq!(req.comment, Setpoint::Omitted);
    }

    #[test]
    fn test_serialization_echoes_only_supplied_keys() {
        // ---
        let body = json!({
            "device_id": "container-002",
            "target_co2_ppm": 950.0,
            "target_ec_ms_cm": null,
            "comment": "night mode"
        });
        let req: SetpointsRequest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), body);
    }

    #[test]
    fn test_integer_targets_echo_as_floats() {
        // ---
        let req: SetpointsRequest = serde_json::from_value(json!({
            "device_id": "d",
            "target_humidity": 60
        }))
        .unwrap();
        assert_eq!(req.target_humidity, Setpoint::Value(60.0));

        let echo = serde_json::to_value(&req).unwrap();
        assert_eq!(echo["target_humidity"], json!(60.0));
        assert_ne!(echo["target_humidity"], json!(60));
    }

    #[test]
    fn test_target_count_ignores_null_and_comment() {
        // ---
        let req: SetpointsRequest = serde_json::from_value(json!({
            "device_id": "d",
            "target_temp_c": 22.0,
            "target_humidity": 60.0,
            "target_ph": null,
            "comment": "x"
        }))
        .unwrap();
        assert_eq!(req.target_count(), 2);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        // ---
        let res = serde_json::from_value::<SetpointsRequest>(json!({
            "device_id": "d",
            "target_temp_c": "warm"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_reading_vector_shape() {
        // ---
        let r = ReadingVector {
            ph: 6.01,
            ec_ms_cm: 2.2,
            temp_c: 23.4,
            humidity: 61.0,
            co2_ppm: 900.0,
            light_ppfd: 350.0,
        };
        let v = serde_json::to_value(r).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        for k in ["ph", "ec_ms_cm", "temp_c", "humidity", "co2_ppm", "light_ppfd"] {
            assert!(keys.contains(&k), "missing {}", k);
        }
    }
}

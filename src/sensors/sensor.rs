use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{round_to, Coordinate, LayoutVersion, SensorId, SensorReading};

#[derive(Debug, Error)]
pub enum SensorSetError {
    #[error("Sensor set must contain at least one sensor")]
    Empty,
}

/// A virtual sensor placed near the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSensor {
    pub id: SensorId,
    pub name: String,
    pub position: Coordinate,
    /// °C, rounded to 2 decimals.
    pub temperature: f64,
}

impl SyntheticSensor {
    pub fn to_reading(&self, center: &Coordinate) -> SensorReading {
        SensorReading {
            id: self.id.as_str().to_string(),
            name: self.name.clone(),
            lat: self.position.lat,
            lon: self.position.lon,
            temperature: self.temperature,
            distance_km: round_to(center.distance_km(&self.position), 3),
        }
    }
}

/// Ordered, non-empty set of sensors produced by one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SensorSet {
    sensors: Vec<SyntheticSensor>,
}

impl SensorSet {
    pub fn new(sensors: Vec<SyntheticSensor>) -> Result<Self, SensorSetError> {
        if sensors.is_empty() {
            return Err(SensorSetError::Empty);
        }
        Ok(Self { sensors })
    }

    // count is NonZero at every generator call site
    pub(crate) fn from_generated(sensors: Vec<SyntheticSensor>) -> Self {
        debug_assert!(!sensors.is_empty());
        Self { sensors }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    // Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyntheticSensor> {
        self.sensors.iter()
    }

    pub fn as_slice(&self) -> &[SyntheticSensor] {
        &self.sensors
    }

    pub fn mean_temperature(&self) -> f64 {
        let sum: f64 = self.sensors.iter().map(|s| s.temperature).sum();
        sum / self.sensors.len() as f64
    }

    /// Content hash over the canonical JSON of the layout.
    pub fn fingerprint(&self) -> Result<LayoutVersion, serde_json::Error> {
        let bytes = serde_json::to_vec(&self.sensors)?;
        Ok(LayoutVersion::from_content(&bytes))
    }
}

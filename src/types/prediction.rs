use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::coordinate::Coordinate;

/// Reference model output for a single point, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceReading {
    pub baseline_temperature: f64,
    pub traffic_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    pub const HIGH_THRESHOLD: f64 = 0.65;
    pub const MEDIUM_THRESHOLD: f64 = 0.45;

    pub fn classify(traffic_index: f64) -> Self {
        if traffic_index > Self::HIGH_THRESHOLD {
            TrafficLevel::High
        } else if traffic_index > Self::MEDIUM_THRESHOLD {
            TrafficLevel::Medium
        } else {
            TrafficLevel::Low
        }
    }
}

/// A sensor as it appears in the output payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature: f64,
    pub distance_km: f64,
}

/// The complete outcome of one prediction. Never returned partially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub center: Coordinate,
    pub reference_temperature: f64,
    pub traffic_index: f64,
    pub traffic_level: TrafficLevel,
    pub sensors: Vec<SensorReading>,
    pub sensor_average_temperature: f64,
    pub fused_temperature: f64,
    pub forecast_temperature: f64,
    pub forecast_horizon_minutes: u32,
    pub timestamp: DateTime<Utc>,
}

/// Loosely-typed input as a collaborator would receive it (query string, JSON body).
/// Every field is optional; the engine substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// RFC 3339 / ISO-8601 timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl PredictionRequest {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

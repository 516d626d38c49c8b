use serde::{Deserialize, Serialize};

use crate::sensors::SensorSet;
use crate::types::round2;

/// Fixed linear blend weights.
///
/// `sensor + reference + correction` must sum to 1.0; the correction term is
/// anchored on the reference value and shifted by `traffic_gain * traffic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub sensor: f64,
    pub reference: f64,
    pub correction: f64,
    pub traffic_gain: f64,
}

impl FusionWeights {
    pub fn v0() -> Self {
        Self {
            sensor: 0.68,
            reference: 0.25,
            correction: 0.07,
            traffic_gain: 2.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.sensor + self.reference + self.correction
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionEstimate {
    pub sensor_average: f64,
    pub fused_temperature: f64,
}

/// Blend sensor readings with the reference model.
///
/// The fused value uses the unrounded sensor mean; both outputs are rounded
/// to 2 decimals afterwards.
pub fn fuse(
    sensors: &SensorSet,
    reference_temperature: f64,
    traffic_index: f64,
    weights: &FusionWeights,
) -> FusionEstimate {
    let sensor_average = sensors.mean_temperature();

    let fused = weights.sensor * sensor_average
        + weights.reference * reference_temperature
        + weights.correction * (reference_temperature + traffic_index * weights.traffic_gain);

    FusionEstimate {
        sensor_average: round2(sensor_average),
        fused_temperature: round2(fused),
    }
}

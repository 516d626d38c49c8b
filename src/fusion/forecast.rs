use serde::{Deserialize, Serialize};

use crate::types::round2;

/// Exponential-smoothing style projection with a traffic-dependent drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastModel {
    pub horizon_minutes: u32,
    /// Weight on the current value.
    pub retain: f64,
    /// Weight on `now + drift`; `retain + advance` must be 1.0.
    pub advance: f64,
    pub drift_base: f64,
    pub drift_per_traffic: f64,
}

impl ForecastModel {
    pub fn v0() -> Self {
        Self {
            horizon_minutes: 30,
            retain: 0.92,
            advance: 0.08,
            drift_base: 0.15,
            drift_per_traffic: 0.25,
        }
    }

    pub fn drift(&self, traffic_index: f64) -> f64 {
        self.drift_base + traffic_index * self.drift_per_traffic
    }
}

impl Default for ForecastModel {
    fn default() -> Self {
        Self::v0()
    }
}

/// Project `fused_now` one horizon ahead, rounded to 2 decimals.
pub fn project(fused_now: f64, traffic_index: f64, model: &ForecastModel) -> f64 {
    let drift = model.drift(traffic_index);
    let predicted = fused_now * model.retain + (fused_now + drift) * model.advance;
    round2(predicted)
}

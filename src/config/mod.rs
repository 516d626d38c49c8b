pub mod loading;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fusion::{FusionWeights, ForecastModel};
use crate::sensors::SensorModelConfig;
use crate::types::Coordinate;

/// Sensors placed per request.
pub const DEFAULT_SENSOR_COUNT: usize = 5;

/// Upper bound on `sensor_count`; the generator allocates this many per request.
pub const MAX_SENSOR_COUNT: usize = 64;

/// Fallback location used when a request carries no usable coordinate
/// (CUHK, Ma Liu Shui).
pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(22.4180, 114.2106);

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Sensor count must be positive")]
    ZeroSensorCount,
    #[error("Sensor count {0} exceeds the maximum of {max}", max = MAX_SENSOR_COUNT)]
    SensorCountTooLarge(usize),
    #[error("Fallback coordinate ({lat}, {lon}) is outside the valid range")]
    InvalidFallback { lat: f64, lon: f64 },
    #[error("Fusion weights must be finite and sum to 1.0, got {0}")]
    InvalidWeights(f64),
    #[error("Invalid forecast model: {0}")]
    InvalidForecast(String),
    #[error("Invalid sensor model: {0}")]
    InvalidSensorModel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the engine needs, passed in explicitly at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fallback: Coordinate,
    pub sensor_count: usize,
    pub sensors: SensorModelConfig,
    pub fusion: FusionWeights,
    pub forecast: ForecastModel,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK,
            sensor_count: DEFAULT_SENSOR_COUNT,
            sensors: SensorModelConfig::v0(),
            fusion: FusionWeights::v0(),
            forecast: ForecastModel::v0(),
        }
    }

    /// Check every invariant the engine relies on.
    /// Called once at construction so that prediction never fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensor_count == 0 {
            return Err(ConfigError::ZeroSensorCount);
        }
        if self.sensor_count > MAX_SENSOR_COUNT {
            return Err(ConfigError::SensorCountTooLarge(self.sensor_count));
        }

        let fallback = self.fallback;
        if !fallback.is_finite() || !fallback.is_in_range() {
            return Err(ConfigError::InvalidFallback {
                lat: fallback.lat,
                lon: fallback.lon,
            });
        }

        let sensors = &self.sensors;
        if !(sensors.jitter_span.is_finite() && sensors.jitter_span >= 0.0) {
            return Err(ConfigError::InvalidSensorModel(format!(
                "jitter_span must be finite and non-negative, got {}",
                sensors.jitter_span
            )));
        }
        if !(sensors.noise_span.is_finite() && sensors.noise_span >= 0.0) {
            return Err(ConfigError::InvalidSensorModel(format!(
                "noise_span must be finite and non-negative, got {}",
                sensors.noise_span
            )));
        }
        if !(sensors.urban_heat_offset.is_finite() && sensors.traffic_weight.is_finite()) {
            return Err(ConfigError::InvalidSensorModel(
                "urban_heat_offset and traffic_weight must be finite".into(),
            ));
        }

        let fusion = &self.fusion;
        let total = fusion.total();
        if !total.is_finite()
            || !fusion.traffic_gain.is_finite()
            || (total - 1.0).abs() > WEIGHT_TOLERANCE
        {
            return Err(ConfigError::InvalidWeights(total));
        }

        let forecast = &self.forecast;
        if forecast.horizon_minutes == 0 {
            return Err(ConfigError::InvalidForecast("horizon must be positive".into()));
        }
        if !(forecast.drift_base.is_finite() && forecast.drift_per_traffic.is_finite()) {
            return Err(ConfigError::InvalidForecast("drift terms must be finite".into()));
        }
        let split = forecast.retain + forecast.advance;
        if !split.is_finite() || (split - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::InvalidForecast(format!(
                "retain + advance must sum to 1.0, got {split}"
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

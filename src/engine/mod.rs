use std::num::NonZeroUsize;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::config::{ConfigError, EngineConfig};
use crate::fusion::{fuse, project};
use crate::reference::{ModelReference, ReferenceProvider};
use crate::sensors::{SensorGenerator, SensorSet};
use crate::types::coordinate::{LAT_RANGE, LON_RANGE};
use crate::types::{Coordinate, FusionResult, PredictionRequest, TrafficLevel};

/// The estimation pipeline: seeding, sensor synthesis, fusion, forecast.
///
/// Immutable after construction. Every call owns its random stream, so one
/// engine can serve concurrent callers without coordination.
#[derive(Debug, Clone)]
pub struct FusionEngine<P = ModelReference> {
	config: EngineConfig,
	generator: SensorGenerator,
	provider: P,
}

impl FusionEngine<ModelReference> {
	pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
		Self::with_provider(config, ModelReference)
	}
}

impl<P> FusionEngine<P>
where
	P: ReferenceProvider,
{
	/// Validate `config` and build an engine reading reference data from `provider`.
	/// All configuration defects surface here, never at prediction time.
	pub fn with_provider(config: EngineConfig, provider: P) -> Result<Self, ConfigError> {
		config.validate()?;
		let count = NonZeroUsize::new(config.sensor_count).ok_or(ConfigError::ZeroSensorCount)?;
		let generator = SensorGenerator::new(config.sensors.clone(), count);

		tracing::info!(
			sensor_count = count.get(),
			fallback_lat = config.fallback.lat,
			fallback_lon = config.fallback.lon,
			"fusion engine ready"
		);

		Ok(Self {
			config,
			generator,
			provider,
		})
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	/// Predict for raw coordinates. Missing time means now.
	pub fn predict(&self, lat: f64, lon: f64, at: Option<DateTime<Utc>>) -> FusionResult {
		self.predict_at(Coordinate::new(lat, lon), at.unwrap_or_else(Utc::now))
	}

	/// Predict for a loosely-typed request as received by a collaborator.
	pub fn predict_request(&self, request: &PredictionRequest) -> FusionResult {
		let center = self.resolve_center(request.lat, request.lon);
		let at = resolve_timestamp(request.timestamp.as_deref());
		self.predict_at(center, at)
	}

	/// Core pipeline. `center` goes through the same substitution as raw input.
	pub fn predict_at(&self, center: Coordinate, at: DateTime<Utc>) -> FusionResult {
		let center = self.resolve_center(Some(center.lat), Some(center.lon));

		// 1. Reference reading at the exact query point
		let reference = self.provider.reading(center, at);

		// 2. Sensors around it
		let sensors = self.sensors_for(center, at);

		// 3. Fusion
		let estimate = fuse(
			&sensors,
			reference.baseline_temperature,
			reference.traffic_index,
			&self.config.fusion,
		);

		// 4. Forecast from the rounded fused value
		let forecast = project(
			estimate.fused_temperature,
			reference.traffic_index,
			&self.config.forecast,
		);

		tracing::debug!(
			lat = center.lat,
			lon = center.lon,
			fused = estimate.fused_temperature,
			forecast,
			"prediction computed"
		);

		FusionResult {
			center,
			reference_temperature: reference.baseline_temperature,
			traffic_index: reference.traffic_index,
			traffic_level: TrafficLevel::classify(reference.traffic_index),
			sensors: sensors.iter().map(|s| s.to_reading(&center)).collect(),
			sensor_average_temperature: estimate.sensor_average,
			fused_temperature: estimate.fused_temperature,
			forecast_temperature: forecast,
			forecast_horizon_minutes: self.config.forecast.horizon_minutes,
			timestamp: at,
		}
	}

	pub fn sensors_for(&self, center: Coordinate, at: DateTime<Utc>) -> SensorSet {
		self.generator.generate(center, at, &self.provider)
	}

	/// Substitute the fallback for missing or non-finite axes and clamp the rest.
	pub fn resolve_center(&self, lat: Option<f64>, lon: Option<f64>) -> Coordinate {
		let fallback = self.config.fallback;
		Coordinate::new(
			resolve_axis("lat", lat, fallback.lat, LAT_RANGE),
			resolve_axis("lon", lon, fallback.lon, LON_RANGE),
		)
	}
}

fn resolve_axis(axis: &'static str, value: Option<f64>, fallback: f64, range: (f64, f64)) -> f64 {
	match value {
		Some(v) if v.is_finite() => {
			let clamped = v.clamp(range.0, range.1);
			if clamped != v {
				tracing::warn!(axis, value = v, clamped, "coordinate out of range, clamping");
			}
			clamped
		}
		Some(v) => {
			tracing::warn!(axis, value = v, fallback, "non-finite coordinate, using fallback");
			fallback
		}
		None => fallback,
	}
}

/// Parse an ISO-8601 timestamp. Offset-less values are read as UTC.
/// Unparseable input falls back to the current time.
pub fn resolve_timestamp(raw: Option<&str>) -> DateTime<Utc> {
	let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
		return Utc::now();
	};

	if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
		return parsed.with_timezone(&Utc);
	}
	if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
		return Utc.from_utc_datetime(&naive);
	}

	tracing::warn!(timestamp = raw, "unparseable timestamp, using current time");
	Utc::now()
}

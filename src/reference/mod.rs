pub mod models;

use chrono::{DateTime, Utc};

use crate::types::{round2, Coordinate, ReferenceReading};
pub use models::{baseline_temperature, rush_factor, traffic_index, TEMPERATURE_RANGE, TRAFFIC_RANGE};

/// A source of reference readings.
///
/// The engine only talks to reference data through this trait, so the fusion
/// and forecast math can run against a stub instead of a live feed.
pub trait ReferenceProvider {
    fn baseline_temperature(&self, point: Coordinate, at: DateTime<Utc>) -> f64;

    fn traffic_index(&self, point: Coordinate, at: DateTime<Utc>) -> f64;

    /// Rounded and range-clamped reading for the query point.
    fn reading(&self, point: Coordinate, at: DateTime<Utc>) -> ReferenceReading {
        let baseline = self
            .baseline_temperature(point, at)
            .clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1);
        let traffic = self
            .traffic_index(point, at)
            .clamp(TRAFFIC_RANGE.0, TRAFFIC_RANGE.1);

        ReferenceReading {
            baseline_temperature: round2(baseline),
            traffic_index: round2(traffic),
        }
    }
}

/// The built-in formula models.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelReference;

impl ReferenceProvider for ModelReference {
    fn baseline_temperature(&self, point: Coordinate, at: DateTime<Utc>) -> f64 {
        models::baseline_temperature(point, at)
    }

    fn traffic_index(&self, point: Coordinate, at: DateTime<Utc>) -> f64 {
        models::traffic_index(point, at)
    }
}

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};

use crate::random::{seed_for, RandomStream};
use crate::reference::ReferenceProvider;
use crate::sensors::sensor::{SensorSet, SyntheticSensor};
use crate::types::{round2, Coordinate, SensorId};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SensorModelConfig {
    /// Full width of the positional jitter per axis, in degrees.
    pub jitter_span: f64,
    /// Local urban heat excess added to every reading, °C.
    pub urban_heat_offset: f64,
    /// °C added per unit of traffic index.
    pub traffic_weight: f64,
    /// Full width of the reading noise, °C.
    pub noise_span: f64,
}

impl SensorModelConfig {
    pub fn v0() -> Self {
        Self {
            jitter_span: 0.015,
            urban_heat_offset: 1.2,
            traffic_weight: 1.1,
            noise_span: 0.9,
        }
    }
}

impl Default for SensorModelConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Places a fixed number of virtual sensors around a point.
///
/// Generation is a pure function of the discretized centre and the
/// timestamp: a fresh [`RandomStream`] is seeded from the location on every
/// call, so repeated calls yield identical layouts.
#[derive(Debug, Clone)]
pub struct SensorGenerator {
    config: SensorModelConfig,
    count: NonZeroUsize,
}

impl SensorGenerator {
    pub fn new(config: SensorModelConfig, count: NonZeroUsize) -> Self {
        Self { config, count }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn generate<P>(&self, center: Coordinate, at: DateTime<Utc>, provider: &P) -> SensorSet
    where
        P: ReferenceProvider + ?Sized,
    {
        let seed = seed_for(center.lat, center.lon);
        tracing::debug!(
            lat = center.lat,
            lon = center.lon,
            seed = seed.value(),
            "seeded sensor stream"
        );

        let mut stream = RandomStream::new(seed);
        let mut sensors = Vec::with_capacity(self.count.get());

        for index in 0..self.count.get() {
            // Draw order is part of the reproducibility contract: lat, lon, noise.
            let d_lat = stream.next_centered(self.config.jitter_span);
            let d_lon = stream.next_centered(self.config.jitter_span);
            let position = center.offset(d_lat, d_lon);

            let baseline = provider.baseline_temperature(position, at);
            let traffic = provider.traffic_index(position, at);
            let noise = stream.next_centered(self.config.noise_span);

            let temperature = round2(
                baseline
                    + self.config.urban_heat_offset
                    + traffic * self.config.traffic_weight
                    + noise,
            );

            let id = SensorId::from_index(index);
            tracing::trace!(
                sensor = id.as_str(),
                lat = position.lat,
                lon = position.lon,
                temperature,
                "generated sensor"
            );

            sensors.push(SyntheticSensor {
                id,
                name: format!("Sensor {}", index + 1),
                position,
                temperature,
            });
        }

        SensorSet::from_generated(sensors)
    }
}

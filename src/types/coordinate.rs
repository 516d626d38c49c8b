use serde::{Deserialize, Serialize};

pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Clamp each axis into its physical range.
    /// Non-finite axes are passed through unchanged; callers substitute them first.
    pub fn clamped(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.clamp(LAT_RANGE.0, LAT_RANGE.1),
            lon: lon.clamp(LON_RANGE.0, LON_RANGE.1),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn is_in_range(&self) -> bool {
        (LAT_RANGE.0..=LAT_RANGE.1).contains(&self.lat)
            && (LON_RANGE.0..=LON_RANGE.1).contains(&self.lon)
    }

    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::clamped(self.lat + d_lat, self.lon + d_lon)
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

//! Reference environmental models.
//!
//! Smooth periodic and spatial formulas anchored on a reference point near
//! Sha Tin, Hong Kong. Both functions are pure and clamp their output.

use std::f64::consts::PI;

use chrono::{DateTime, Timelike, Utc};

use crate::types::Coordinate;

pub const TEMPERATURE_RANGE: (f64, f64) = (18.0, 33.0);
pub const TRAFFIC_RANGE: (f64, f64) = (0.0, 1.0);

const BASE_TEMPERATURE: f64 = 23.5;
const DIURNAL_SWING: f64 = 2.2;
const DIURNAL_PHASE_HOURS: f64 = 6.0;

const GRADIENT_ORIGIN: Coordinate = Coordinate::new(22.5, 114.2);
const LAT_GRADIENT: f64 = 1.2;
const LON_GRADIENT: f64 = 0.6;

const CORRIDOR_LON: f64 = 114.18;
const CORRIDOR_DECAY: f64 = 20.0;
const TRAFFIC_BASE: f64 = 0.15;
const CORRIDOR_WEIGHT: f64 = 0.55;
const RUSH_WEIGHT: f64 = 0.3;

/// Baseline air temperature in °C, clamped to [`TEMPERATURE_RANGE`].
pub fn baseline_temperature(point: Coordinate, at: DateTime<Utc>) -> f64 {
    let hour = at.hour() as f64;

    // 0..1, period 24h
    let daily = 0.5 + 0.5 * (((hour - DIURNAL_PHASE_HOURS) / 24.0) * PI * 2.0).sin();
    let gradient = (GRADIENT_ORIGIN.lat - point.lat) * LAT_GRADIENT
        + (point.lon - GRADIENT_ORIGIN.lon) * LON_GRADIENT;

    let value = BASE_TEMPERATURE + daily * DIURNAL_SWING - gradient;
    value.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1)
}

/// Congestion index in [`TRAFFIC_RANGE`].
pub fn traffic_index(point: Coordinate, at: DateTime<Utc>) -> f64 {
    let rush = rush_factor(at.hour());
    let corridor = (-(point.lon - CORRIDOR_LON).abs() * CORRIDOR_DECAY).exp();

    let value = TRAFFIC_BASE + CORRIDOR_WEIGHT * corridor + RUSH_WEIGHT * rush;
    value.clamp(TRAFFIC_RANGE.0, TRAFFIC_RANGE.1)
}

/// Hour-of-day regime (UTC): quiet overnight, peak mid-morning, medium otherwise.
pub fn rush_factor(hour: u32) -> f64 {
    match hour {
        0..=3 => 0.2,
        10..=13 => 0.8,
        _ => 0.5,
    }
}

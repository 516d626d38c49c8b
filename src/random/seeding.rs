use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Grid cells per degree used when discretizing a coordinate.
pub const SEED_RESOLUTION: f64 = 10_000.0;

const LAT_PRIME: u32 = 73_856_093;
const LON_PRIME: u32 = 19_349_663;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u32);

impl Seed {
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Derive a stable seed from a location.
///
/// Both axes are clamped, offset to be non-negative and floored onto a
/// 1/10_000 degree grid, so sub-grid noise in the input never changes the
/// seed. The two cell indices are mixed with distinct primes and XOR-ed
/// using 32-bit wraparound.
pub fn seed_for(lat: f64, lon: f64) -> Seed {
    let point = Coordinate::clamped(finite_or_zero(lat), finite_or_zero(lon));

    let a = grid_cell(point.lat + 90.0);
    let b = grid_cell(point.lon + 180.0);

    Seed(a.wrapping_mul(LAT_PRIME) ^ b.wrapping_mul(LON_PRIME))
}

// Offsets are within [0, 360] after clamping, so the cell index fits in u32.
fn grid_cell(offset: f64) -> u32 {
    (offset * SEED_RESOLUTION).floor() as u32
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

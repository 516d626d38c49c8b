use rust_decimal::{Decimal, RoundingStrategy};

pub mod coordinate;
pub mod identifiers;
pub mod prediction;

pub use coordinate::Coordinate;
pub use identifiers::{LayoutVersion, SensorId};
pub use prediction::{
    FusionResult, PredictionRequest, ReferenceReading, SensorReading, TrafficLevel,
};

/// Round to `decimals` places from the exact binary value, ties away from zero.
///
/// `1.115` is stored as `1.11499999...`, so it rounds to `1.11`; scaling by
/// 100 first would give `1.12`. Non-finite input is returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    exact
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

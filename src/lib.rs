//! Deterministic environmental estimation and short-horizon forecasting.
//!
//! `geofusion-core` synthesizes a reproducible set of virtual sensors around
//! a geographic point, blends their readings with a reference temperature
//! model and a traffic-congestion model, and projects the fused value 30
//! minutes ahead. Identical (coordinate, timestamp) inputs always produce
//! identical outputs, byte-for-byte.
//!
//! ```
//! use geofusion_core::{EngineConfig, FusionEngine};
//!
//! let engine = FusionEngine::new(EngineConfig::v0()).unwrap();
//! let result = engine.predict(22.4180, 114.2106, None);
//! assert_eq!(result.sensors.len(), 5);
//! ```

pub mod config;
pub mod engine;
pub mod fusion;
pub mod random;
pub mod reference;
pub mod sensors;
pub mod types;

pub use config::{ConfigError, EngineConfig};
pub use engine::FusionEngine;
pub use reference::{ModelReference, ReferenceProvider};
pub use types::{Coordinate, FusionResult, PredictionRequest};

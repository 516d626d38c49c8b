pub mod generator;
pub mod sensor;

pub use generator::{SensorGenerator, SensorModelConfig};
pub use sensor::{SensorSet, SensorSetError, SyntheticSensor};

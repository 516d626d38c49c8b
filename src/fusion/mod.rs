pub mod blend;
pub mod forecast;

pub use blend::{fuse, FusionEstimate, FusionWeights};
pub use forecast::{project, ForecastModel};

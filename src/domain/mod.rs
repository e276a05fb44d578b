// Domain layer: survey models and ports. The HTTP adapters live under src/adapters.

pub mod model;
pub mod ports;

// Domain layer: wire models and ports. No HTTP or timer dependencies here.

pub mod model;
pub mod ports;

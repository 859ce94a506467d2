// Domain layer: core models and ports (interfaces). No rendering dependencies here.

pub mod model;
pub mod ports;

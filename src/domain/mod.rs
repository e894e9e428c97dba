// Domain layer: lookup result types and the environment port.

pub mod model;
pub mod ports;

// Domain layer: data shapes and ports. No HTTP or CLI concerns here.

pub mod model;
pub mod ports;
pub mod responses;

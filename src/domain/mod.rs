// Domain layer: participant/tally models and the randomness port.

pub mod model;
pub mod ports;

// Domain layer: donation models and the fragment-source port.

pub mod model;
pub mod ports;

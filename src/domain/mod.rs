// Domain layer: the greeting request and the clock port.

pub mod model;
pub mod ports;

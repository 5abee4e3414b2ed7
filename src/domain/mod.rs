// Domain layer: value types and the ports the calculator reads from and writes to.

pub mod model;
pub mod ports;

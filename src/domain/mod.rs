// Domain layer: the check result and the port the engine reads its input through.

pub mod model;
pub mod ports;

// Domain layer: solution/project models and the ports the generator is built on.

pub mod model;
pub mod ports;

// Domain layer: flag models and the source port. Only std/serde here.

pub mod model;
pub mod ports;

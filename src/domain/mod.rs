// Domain layer: deployment models and the ports the core drives. No AWS types here.

pub mod model;
pub mod ports;

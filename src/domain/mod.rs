// Domain layer: models and ports. Nothing here talks to AWS.

pub mod model;
pub mod ports;

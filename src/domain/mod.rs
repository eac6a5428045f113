// Domain layer: league models and the ports the pipeline is assembled from.

pub mod model;
pub mod ports;

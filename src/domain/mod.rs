// Domain layer: course data, query parameters and the ports adapters implement.

pub mod model;
pub mod ports;
pub mod query;

// Domain layer: records, log entries and the seams (clock, config) the core depends on.

pub mod model;
pub mod ports;

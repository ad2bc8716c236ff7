// Domain layer: currency data, conversion records and the config port.

pub mod model;
pub mod ports;
pub mod registry;

// Domain layer: entities and the capability traits everything else is written against.

pub mod model;
pub mod ports;

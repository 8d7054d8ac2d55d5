// Domain layer: core model and ports. No dependencies beyond std and the
// crate's own validation/error utilities.

pub mod model;
pub mod ports;

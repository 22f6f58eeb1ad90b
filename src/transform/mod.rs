//! Domain mapping between pixel indices, evaluation space and 8-bit intensities.

pub mod remap;

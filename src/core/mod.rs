//! Core building blocks: tolerant number parsing, the argument scanner,
//! area computation and result formatting. Consumed by the high-level `api`
//! module.
pub mod area;
pub mod numeric;
pub mod report;
pub mod scan;

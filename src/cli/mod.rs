//! Command line layer for rect-area.
//!
//! `args` turns the raw OS arguments into strings, `errors` holds the
//! binary's error type and exit statuses, and `runner` wires logging,
//! stdout and the library together.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

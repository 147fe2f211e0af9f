//! rect-area CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: read the process arguments, run,
//! and exit with the resulting status. For programmatic use, prefer the
//! library API (`rect_area::compute_area`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run(std::env::args_os())
}

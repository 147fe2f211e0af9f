use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use rect_area::{AreaReport, Error, compute_area, usage};

use super::CliArgs;
use super::errors::AppError;

/// Install a stderr subscriber driven by `RUST_LOG`; silent when unset.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // Fails only if a global subscriber is already installed, which is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn execute<W: Write>(args: &CliArgs, out: &mut W) -> Result<AreaReport, AppError> {
    debug!(program = %args.program, count = args.args.len(), "scanning arguments");
    let report = compute_area(&args.args, out)?;
    out.flush()?;
    Ok(report)
}

/// Write what the user sees for a fatal error.
fn render_failure<W: Write>(program: &str, err: &AppError, out: &mut W) -> io::Result<()> {
    if let AppError::Area(Error::MissingValue { .. }) = err {
        writeln!(out, "{err}")?;
    }
    if err.wants_usage() {
        writeln!(out, "{}", usage(program))?;
    }
    out.flush()
}

pub fn run<I>(os_args: I) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
{
    init_logging();

    let args = CliArgs::from_os_args(os_args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(&args, &mut out) {
        Ok(report) => {
            info!(area = report.area, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            // stdout itself may be the thing that failed; nothing left to report to.
            let _ = render_failure(&args.program, &err, &mut out);
            err.exit_code()
        }
    }
}

//! High-level entry points.
//!
//! [`compute_area`] runs the whole pipeline (scan, compute, report) against
//! any writer. The binary passes stdout; tests pass a `Vec<u8>`.
use std::io::Write;

use tracing::info;

use crate::core::report::AreaReport;
use crate::core::scan::scan_args;
use crate::error::Result;

/// Program name used in the usage line when the OS supplies no argv[0].
pub const DEFAULT_PROGRAM_NAME: &str = "rect-area";

/// The usage line, without a trailing newline.
pub fn usage(program: &str) -> String {
    format!("usage: {program} --height H --width W")
}

/// Scan `args` (program name excluded), compute the area and write the
/// output lines to `out`.
///
/// Each unknown token produces an `Unknown parameter: <token>` line as it is
/// encountered, followed by the result line on success. Fatal errors are
/// returned without writing anything for them; see [`usage`] for the text a
/// caller should print.
pub fn compute_area<S, W>(args: &[S], out: &mut W) -> Result<AreaReport>
where
    S: AsRef<str>,
    W: Write,
{
    let dimensions = scan_args(args, |token| {
        writeln!(out, "Unknown parameter: {token}")?;
        Ok(())
    })?;

    let report = AreaReport::new(dimensions);
    info!(
        height = report.dimensions.height,
        width = report.dimensions.width,
        area = report.area,
        "computed area"
    );
    writeln!(out, "{report}")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Flag;

    fn run(args: &[&str]) -> (Result<AreaReport>, String) {
        let mut out = Vec::new();
        let result = compute_area(args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_result_line() {
        let (result, out) = run(&["--height", "3", "--width", "4"]);
        assert_eq!(result.unwrap().area, 12.0);
        assert_eq!(out, "Area(h=3, w=4) = 12\n");
    }

    #[test]
    fn unknown_tokens_come_before_the_result() {
        let (result, out) = run(&["--height", "3", "--bar", "4"]);
        assert_eq!(result.unwrap().area, 0.0);
        assert_eq!(
            out,
            "Unknown parameter: --bar\nUnknown parameter: 4\nArea(h=3, w=0) = 0\n"
        );
    }

    #[test]
    fn usage_error_writes_nothing() {
        let (result, out) = run(&["--height", "3"]);
        assert!(matches!(result, Err(Error::Usage { got: 2, .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_value_keeps_earlier_diagnostics() {
        let (result, out) = run(&["--x", "--y", "--z", "--height"]);
        assert!(matches!(
            result,
            Err(Error::MissingValue { flag: Flag::Height })
        ));
        assert_eq!(
            out,
            "Unknown parameter: --x\nUnknown parameter: --y\nUnknown parameter: --z\n"
        );
    }

    #[test]
    fn usage_line() {
        assert_eq!(
            usage(DEFAULT_PROGRAM_NAME),
            "usage: rect-area --height H --width W"
        );
    }
}

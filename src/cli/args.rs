use std::ffi::OsString;

use rect_area::DEFAULT_PROGRAM_NAME;

/// Process arguments split into argv[0] and the rest.
///
/// Non-UTF-8 arguments are converted lossily; the scanner only compares
/// against ASCII flag names and parses ASCII numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub program: String,
    pub args: Vec<String>,
}

impl CliArgs {
    pub fn from_os_args<I>(os_args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut iter = os_args
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned());
        let program = iter
            .next()
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
        Self {
            program,
            args: iter.collect(),
        }
    }
}

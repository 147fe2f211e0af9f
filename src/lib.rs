#![doc = r#"
rect-area — compute the area of a rectangle from command-line arguments.

The binary takes exactly two flag/value pairs, in either order:

```text
rect-area --height 3 --width 4
Area(h=3, w=4) = 12
```

This crate exposes the pieces behind it so they can be driven and tested
without spawning a process.

Quick start
-----------
```rust
use rect_area::compute_area;

fn main() -> rect_area::Result<()> {
    let mut out = Vec::new();
    let report = compute_area(&["--width", "4", "--height", "3"], &mut out)?;

    assert_eq!(report.area, 12.0);
    assert_eq!(String::from_utf8_lossy(&out), "Area(h=3, w=4) = 12\n");
    Ok(())
}
```

Input handling
--------------
- The argument list (program name excluded) must have exactly
  [`EXPECTED_ARG_COUNT`] entries, otherwise [`Error::Usage`] is returned before
  anything is parsed.
- Values are parsed like C `strtof`: the longest numeric prefix is used and
  text with no numeric prefix is `0.0`. See [`parse_float_prefix`].
- Unknown tokens are reported and skipped. A flag with no value after it is
  [`Error::MissingValue`].

```rust
use rect_area::{compute_area, Error};

let mut out = Vec::new();
match compute_area(&["--height", "3"], &mut out) {
    Err(Error::Usage { expected, got }) => assert_eq!((expected, got), (4, 2)),
    other => panic!("unexpected: {other:?}"),
}
```

Output
------
Values are shown with zero fractional digits, ties to even, as `printf("%.f")`
does. The stored values are not rounded. See [`fixed0`].

Useful modules
--------------
- [`api`] — `compute_area` and the usage line.
- [`core`] — number parsing, scanning, area and report formatting.
- [`types`] — `Dimensions` and `Flag`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use api::{DEFAULT_PROGRAM_NAME, compute_area, usage};
pub use crate::core::area::area;
pub use crate::core::numeric::parse_float_prefix;
pub use crate::core::report::{AreaReport, fixed0};
pub use crate::core::scan::{EXPECTED_ARG_COUNT, scan_args};
pub use error::{Error, Result};
pub use types::{Dimensions, Flag};

//! Build complex numbers from Cartesian or polar components and print them in polar
//! notation, `M∠A°`.
//!
//! Two positional operands select the form:
//!
//! | `a`     | `b`     | form                                       |
//! |---------|---------|--------------------------------------------|
//! | any     | absent  | Cartesian polynomial, `2 + 3i`             |
//! | real    | complex | Cartesian coordinates, `2` and `3i`        |
//! | real    | real    | polar, magnitude and angle in `AngleUnit`  |
//!
//! ```
//! use polar_notation::{pol, cnum};
//!
//! let z = cnum!(10, 180)?;
//! assert!((z.re + 10.0).abs() < 1e-12);
//! assert_eq!(pol!(10, 180)?, "10∠180°");
//! # Ok::<_, polar_notation::Error>(())
//! ```

pub mod complex;
pub mod construct;
pub mod error;
pub mod format;
pub mod input;
mod macros;
pub mod unit;

pub use complex::Complex;
pub use construct::construct;
pub use error::{Error, Result, TypeError, ValueError};
pub use format::{
    format, format_components, format_polynomial, format_with, print, print_to, FormatOptions,
    Polar,
};
pub use input::{Input, Operand, MAX_DECIMALS};
pub use unit::{AngleUnit, UnitArg};

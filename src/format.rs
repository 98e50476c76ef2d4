//! Polar notation: `M∠A°`.
//!
//! Magnitude and angle are printed with the same number of fixed-point decimals. The angle is
//! always in degrees, in the range (-180, 180], whatever unit a polar input was given in.

use std::{
    f64::consts::PI,
    fmt,
    io::{self, Write},
};

use crate::{
    complex::Complex,
    error::Result,
    input::{self, Input, Operand},
    unit::{AngleUnit, UnitArg},
};

const ANGLE: char = '\u{2220}';
const DEGREE: char = '\u{00B0}';

/// Magnitude and angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar {
    pub magnitude: f64,
    pub angle: f64,
}

impl Polar {
    /// Renders with `decimals` fractional digits. Fails above [`MAX_DECIMALS`](crate::MAX_DECIMALS).
    pub fn render(&self, decimals: usize) -> Result<String> {
        let decimals = input::checked_decimals(decimals)?;
        tracing::trace!(polar = ?self, decimals, "rendering polar notation");
        Ok(format!("{self:.decimals$}"))
    }
}

impl From<Complex<f64>> for Polar {
    fn from(z: Complex<f64>) -> Self {
        Self {
            magnitude: z.abs(),
            angle: z.arg() * (180.0 / PI),
        }
    }
}

/// `{}` renders with no decimals, `{:.2}` with two.
impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(0);
        write!(f, "{:.p$}{ANGLE}{:.p$}{DEGREE}", self.magnitude, self.angle)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    pub decimals: usize,
    pub unit: AngleUnit,
}

impl FormatOptions {
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// Resolves the operands to a polar value. When the second slot was taken over as a decimal
/// count it is handed back for the caller to validate.
fn resolve(a: Operand, b: Option<Operand>, unit: AngleUnit) -> Result<(Polar, Option<Operand>)> {
    match (a, b) {
        // WARNING: a complex first argument is already a whole value, so the second slot is
        // the decimal count, not an imaginary part or angle. `format(2 + 3i, Some(1), 0, ..)`
        // renders with one decimal. Use `format_polynomial` to avoid the ambiguity.
        (Operand::Complex(z), Some(shifted)) => {
            tracing::debug!(?z, ?shifted, "reading second argument as the decimal count");
            Ok((Polar::from(z), Some(shifted)))
        }
        (a, b) => Ok((Polar::from(Input::classify(a, b, unit)?.value()), None)),
    }
}

/// Formats one or two operands in polar notation.
///
/// The operands are read the same way as [`construct`](crate::construct()), except that a
/// complex `a` combined with a present `b` uses `b` as the decimal count in place of
/// `decimals`.
///
/// ```
/// use polar_notation::{format, AngleUnit, Complex};
///
/// let i3 = Complex::new(0.0, 3.0);
/// assert_eq!(format(2, Some(i3.into()), 0, AngleUnit::Degrees)?, "4∠56°");
/// assert_eq!(format(Complex::new(2.0, 3.0), Some(1.into()), 0, "deg")?, "3.6∠56.3°");
/// assert_eq!(format(10, Some(180.into()), 1, "deg")?, "10.0∠180.0°");
/// # Ok::<_, polar_notation::Error>(())
/// ```
pub fn format(
    a: impl Into<Operand>,
    b: Option<Operand>,
    decimals: i64,
    unit: impl UnitArg,
) -> Result<String> {
    let unit = unit.into_unit()?;
    let (polar, shifted) = resolve(a.into(), b, unit)?;
    let decimals = match shifted {
        Some(operand) => operand.into_decimals()?,
        None => input::decimals(decimals)?,
    };
    polar.render(decimals)
}

/// [`format`] with typed settings.
pub fn format_with(
    a: impl Into<Operand>,
    b: Option<Operand>,
    options: &FormatOptions,
) -> Result<String> {
    let (polar, shifted) = resolve(a.into(), b, options.unit)?;
    let decimals = match shifted {
        Some(operand) => operand.into_decimals()?,
        None => options.decimals,
    };
    polar.render(decimals)
}

/// Formats a value given as one Cartesian polynomial.
pub fn format_polynomial(z: Complex<f64>, decimals: usize) -> Result<String> {
    Polar::from(z).render(decimals)
}

/// Formats Cartesian coordinates (`b` complex) or a polar magnitude and angle (`b` real).
pub fn format_components(
    a: f64,
    b: impl Into<Operand>,
    decimals: usize,
    unit: impl UnitArg,
) -> Result<String> {
    let unit = unit.into_unit()?;
    let input = Input::classify(Operand::Real(a), Some(b.into()), unit)?;
    input.polar_with(&FormatOptions { decimals, unit })
}

/// Writes [`format`]'s output and a newline to `writer`.
pub fn print_to<W: Write>(
    mut writer: W,
    a: impl Into<Operand>,
    b: Option<Operand>,
    decimals: i64,
    unit: impl UnitArg,
) -> Result<()> {
    let line = format(a, b, decimals, unit)?;
    writeln!(writer, "{line}")?;
    Ok(())
}

/// Prints [`format`]'s output to standard output.
pub fn print(
    a: impl Into<Operand>,
    b: Option<Operand>,
    decimals: i64,
    unit: impl UnitArg,
) -> Result<()> {
    print_to(io::stdout().lock(), a, b, decimals, unit)
}

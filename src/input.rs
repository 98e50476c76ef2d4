//! Classification of loosely typed argument pairs.
//!
//! The public entry points take two positional slots whose meaning depends on what is
//! passed in them: a lone value is a Cartesian polynomial, a real followed by a complex
//! value is a pair of Cartesian coordinates, and two reals are a polar magnitude and angle.
//! [`Input::classify`] is the only place that decision is made. Everything downstream works
//! on the resolved [`Input`].

use crate::{
    complex::Complex,
    error::{Error, Result, TypeError, ValueError},
    format::{FormatOptions, Polar},
    unit::AngleUnit,
};

type FL = f64;

/// One raw argument, as a caller would write it.
///
/// Integers and reals behave the same when building a complex value. The difference only
/// matters when an operand is reused as a decimal count, which must be an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Int(i64),
    Real(FL),
    Complex(Complex<FL>),
}

impl Operand {
    /// The operand as a real number, or `None` for complex values.
    pub fn as_real(self) -> Option<FL> {
        match self {
            Self::Int(n) => Some(n as FL),
            Self::Real(x) => Some(x),
            Self::Complex(_) => None,
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(self, Self::Complex(_))
    }

    pub fn into_complex(self) -> Complex<FL> {
        match self {
            Self::Int(n) => Complex::from(n as FL),
            Self::Real(x) => Complex::from(x),
            Self::Complex(z) => z,
        }
    }

    /// Reads the operand as a number of decimal places.
    pub(crate) fn into_decimals(self) -> Result<usize> {
        match self {
            Self::Int(n) => decimals(n),
            Self::Real(_) | Self::Complex(_) => Err(TypeError::NonIntegerDecimals.into()),
        }
    }
}

/// Largest decimal count the formatter accepts. Bounded by the precision `std::fmt` can carry.
pub const MAX_DECIMALS: usize = u16::MAX as usize;

pub(crate) fn decimals(n: i64) -> Result<usize> {
    let n = usize::try_from(n).map_err(|_| ValueError::NegativeDecimals(n))?;
    checked_decimals(n)
}

pub(crate) fn checked_decimals(n: usize) -> Result<usize> {
    if n > MAX_DECIMALS {
        return Err(ValueError::DecimalsTooLarge(n).into());
    }
    Ok(n)
}

macro_rules! operand_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Operand {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

operand_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
operand_from!(Real as FL: f32, f64);

macro_rules! operand_try_from {
    ($($source:ty),+) => {
        $(
            impl TryFrom<$source> for Operand {
                type Error = Error;

                fn try_from(value: $source) -> Result<Self> {
                    i64::try_from(value)
                        .map(Self::Int)
                        .map_err(|_| ValueError::IntegerOutOfRange(value as u64).into())
                }
            }
        )+
    };
}

operand_try_from!(u64, usize, isize);

impl From<Complex<FL>> for Operand {
    fn from(z: Complex<FL>) -> Self {
        Self::Complex(z)
    }
}

/// A fully resolved constructor input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// One value holding both parts, `2 + 3i`.
    Polynomial(Complex<FL>),
    /// A real part plus a complex value supplying the imaginary part, `2, 3i`. Any real part
    /// the second value carries is added to the first.
    Cartesian(FL, Complex<FL>),
    /// A magnitude and an angle measured in `unit`.
    Polar {
        magnitude: FL,
        angle: FL,
        unit: AngleUnit,
    },
}

impl Input {
    /// Decides which form the caller meant from the variants of `a` and `b`.
    ///
    /// `unit` is only carried into the polar form; the other forms have no angle.
    pub fn classify(a: Operand, b: Option<Operand>, unit: AngleUnit) -> Result<Self> {
        let input = match b {
            None => Self::Polynomial(a.into_complex()),
            Some(b) => {
                let re = a.as_real().ok_or(TypeError::ComplexMagnitude)?;
                match b {
                    Operand::Complex(im) => Self::Cartesian(re, im),
                    Operand::Int(n) => Self::polar_form(re, n as FL, unit),
                    Operand::Real(angle) => Self::polar_form(re, angle, unit),
                }
            }
        };

        tracing::trace!(?a, ?b, ?input, "classified operands");
        Ok(input)
    }

    fn polar_form(magnitude: FL, angle: FL, unit: AngleUnit) -> Self {
        Self::Polar {
            magnitude,
            angle,
            unit,
        }
    }

    pub fn polar(self) -> Polar {
        Polar::from(self.value())
    }

    /// Renders the input in polar notation with `options.decimals`. The unit was already
    /// applied when the input was classified, so `options.unit` is not consulted.
    pub fn polar_with(self, options: &FormatOptions) -> Result<String> {
        self.polar().render(options.decimals)
    }

    /// The complex value this input denotes.
    pub fn value(self) -> Complex<FL> {
        match self {
            Self::Polynomial(z) => z,
            Self::Cartesian(re, b) => Complex::from(re) + b,
            Self::Polar {
                magnitude,
                angle,
                unit,
            } => Complex::from_polar(magnitude, unit.to_radians(angle)),
        }
    }
}

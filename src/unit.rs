use std::{f64::consts::PI, fmt, str::FromStr};

use crate::error::{Error, ValueError};

/// How the angle of a polar input is measured. Output angles are always degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "deg"))]
    Degrees,
    #[cfg_attr(feature = "serde", serde(rename = "rad"))]
    Radians,
}

impl AngleUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }

    /// Converts an angle measured in this unit to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle * (PI / 180.0),
            Self::Radians => angle,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"deg"`, `"DEG"` and `"Rad"` are all accepted.
impl FromStr for AngleUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("deg") {
            Ok(Self::Degrees)
        } else if s.eq_ignore_ascii_case("rad") {
            Ok(Self::Radians)
        } else {
            Err(ValueError::UnknownUnit(s.to_owned()).into())
        }
    }
}

impl TryFrom<&str> for AngleUnit {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Anything that can name an angle unit at the public boundary: the enum itself, or a
/// `"deg"`/`"rad"` token.
pub trait UnitArg {
    fn into_unit(self) -> Result<AngleUnit, Error>;
}

impl UnitArg for AngleUnit {
    fn into_unit(self) -> Result<AngleUnit, Error> {
        Ok(self)
    }
}

impl UnitArg for &str {
    fn into_unit(self) -> Result<AngleUnit, Error> {
        self.parse()
    }
}

impl UnitArg for String {
    fn into_unit(self) -> Result<AngleUnit, Error> {
        self.parse()
    }
}

impl UnitArg for &String {
    fn into_unit(self) -> Result<AngleUnit, Error> {
        self.parse()
    }
}

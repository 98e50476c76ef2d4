//! Errors returned by the constructor, formatter and printer.
//!
//! Every failure is one of two kinds: the argument has the wrong *type* for its position
//! ([`TypeError`]), or the type is fine but the *value* is not accepted ([`ValueError`]).
//! Writer failures from the printer are passed through as [`Error::Io`].

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("type error: {0}")]
    Type(#[from] TypeError),
    #[error("value error: {0}")]
    Value(#[from] ValueError),
    #[error("failed to write polar notation: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// An argument's variant is not admissible in its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A complex value was given as the magnitude or real part while a second argument was
    /// also present.
    #[error("the first argument must be a real number when a second argument is given")]
    ComplexMagnitude,
    /// The decimal count was not an integer.
    #[error("the number of decimals must be an integer")]
    NonIntegerDecimals,
}

/// An argument has an admissible type but an unrecognized or out of range value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("unit must be 'deg' or 'rad', got '{0}'")]
    UnknownUnit(String),
    #[error("the number of decimals must not be negative, got {0}")]
    NegativeDecimals(i64),
    #[error("the number of decimals must be at most 65535, got {0}")]
    DecimalsTooLarge(usize),
    #[error("integer {0} does not fit in an operand")]
    IntegerOutOfRange(u64),
}

/// Shorthand for [`construct`](crate::construct()) with the optional arguments left out.
///
/// ```
/// use polar_notation::{cnum, Complex};
///
/// let z = cnum!(2, Complex::new(0.0, 3.0))?;
/// assert_eq!(z, Complex::new(2.0, 3.0));
/// let w = cnum!(10, 3.14, "rad")?;
/// assert!(w.re < -9.99);
/// # Ok::<_, polar_notation::Error>(())
/// ```
#[macro_export]
macro_rules! cnum {
    ($a:expr) => {
        $crate::construct($a, None, $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr) => {
        $crate::construct($a, Some($crate::Operand::from($b)), $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr, $unit:expr) => {
        $crate::construct($a, Some($crate::Operand::from($b)), $unit)
    };
}

/// Shorthand for [`format`](crate::format()): `pol!(a)`, `pol!(a, b)`, `pol!(a, b, decimals)`
/// and `pol!(a, b, decimals, unit)`.
///
/// ```
/// use polar_notation::{pol, Complex};
///
/// assert_eq!(pol!(Complex::new(2.0, 3.0), 1)?, "3.6∠56.3°");
/// assert_eq!(pol!(10, 180, 1)?, "10.0∠180.0°");
/// # Ok::<_, polar_notation::Error>(())
/// ```
#[macro_export]
macro_rules! pol {
    ($a:expr) => {
        $crate::format($a, None, 0, $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr) => {
        $crate::format($a, Some($crate::Operand::from($b)), 0, $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr, $decimals:expr) => {
        $crate::format(
            $a,
            Some($crate::Operand::from($b)),
            $decimals,
            $crate::AngleUnit::Degrees,
        )
    };
    ($a:expr, $b:expr, $decimals:expr, $unit:expr) => {
        $crate::format($a, Some($crate::Operand::from($b)), $decimals, $unit)
    };
}

/// Shorthand for [`print`](crate::print()), taking the same shapes as [`pol!`].
#[macro_export]
macro_rules! polprint {
    ($a:expr) => {
        $crate::print($a, None, 0, $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr) => {
        $crate::print($a, Some($crate::Operand::from($b)), 0, $crate::AngleUnit::Degrees)
    };
    ($a:expr, $b:expr, $decimals:expr) => {
        $crate::print(
            $a,
            Some($crate::Operand::from($b)),
            $decimals,
            $crate::AngleUnit::Degrees,
        )
    };
    ($a:expr, $b:expr, $decimals:expr, $unit:expr) => {
        $crate::print($a, Some($crate::Operand::from($b)), $decimals, $unit)
    };
}

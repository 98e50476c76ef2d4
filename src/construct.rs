use crate::{
    complex::Complex,
    error::Result,
    input::{Input, Operand},
    unit::UnitArg,
};

/// Builds a complex value from one or two operands.
///
/// - `construct(2 + 3i, None, ..)`: Cartesian polynomial, returned unchanged.
/// - `construct(2, Some(3i), ..)`: Cartesian coordinates, `2 + 3i`.
/// - `construct(10, Some(180), "deg")`: polar, magnitude `10` at `180°`, about `-10 + 0i`.
///
/// `unit` only affects the polar form, but an unknown unit token is rejected whichever form
/// is used.
///
/// ```
/// use polar_notation::{construct, AngleUnit, Complex};
///
/// let z = construct(2, Some(Complex::new(0.0, 3.0).into()), AngleUnit::Degrees)?;
/// assert_eq!(z, Complex::new(2.0, 3.0));
/// # Ok::<_, polar_notation::Error>(())
/// ```
pub fn construct(
    a: impl Into<Operand>,
    b: Option<Operand>,
    unit: impl UnitArg,
) -> Result<Complex<f64>> {
    let unit = unit.into_unit()?;
    Ok(Input::classify(a.into(), b, unit)?.value())
}

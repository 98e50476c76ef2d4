use approx::{abs_diff_eq, assert_abs_diff_eq};
use polar_notation::{
    construct, format, format_polynomial, AngleUnit, Complex, Operand, MAX_DECIMALS,
};
use proptest::prelude::*;

const DEG: AngleUnit = AngleUnit::Degrees;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

/// Both numbers after the angle sign split, with their fractional digit counts.
fn fractional_digits(rendered: &str) -> (Option<usize>, Option<usize>) {
    let body = rendered.strip_suffix('°').expect("missing degree sign");
    let (magnitude, angle) = body.split_once('∠').expect("missing angle sign");
    let digits = |s: &str| s.split_once('.').map(|(_, frac)| frac.len());
    (digits(magnitude), digits(angle))
}

/// Difference between two angles in degrees, folded into [0, 180].
fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn lone_real_matches_zero_imaginary_coordinates(a in finite()) {
        let polynomial = construct(a, None, DEG).unwrap();
        let coordinates = construct(a, Some(Complex::new(0.0, 0.0).into()), DEG).unwrap();
        prop_assert_eq!(polynomial, coordinates);
    }

    #[test]
    fn coordinates_keep_both_parts(a in finite(), b in finite()) {
        let z = construct(a, Some(Complex::new(0.0, b).into()), DEG).unwrap();
        prop_assert_eq!(z, Complex::new(a, b));
    }

    #[test]
    fn polar_keeps_magnitude_and_angle(m in 1.0e-3..1.0e6f64, theta in -720.0..720.0f64) {
        let z = construct(m, Some(theta.into()), DEG).unwrap();
        prop_assert!(abs_diff_eq!(z.abs(), m, epsilon = m * 1e-12));

        let angle = z.arg().to_degrees();
        prop_assert!(angle > -180.0 - 1e-9 && angle <= 180.0 + 1e-9);
        prop_assert!(angle_distance(angle, theta) < 1e-9, "{} vs {}", angle, theta);
    }

    #[test]
    fn round_trip_through_polar(re in finite(), im in finite()) {
        let z = Complex::new(re, im);
        let back = construct(z.abs(), Some(z.arg().to_degrees().into()), DEG).unwrap();
        let tolerance = z.abs() * 1e-12 + 1e-12;
        prop_assert!(abs_diff_eq!(back.re, re, epsilon = tolerance));
        prop_assert!(abs_diff_eq!(back.im, im, epsilon = tolerance));
    }

    #[test]
    fn decimals_control_fractional_digits(
        re in finite(),
        im in finite(),
        decimals in 0i64..12,
    ) {
        let rendered = format(re, Some(Complex::new(0.0, im).into()), decimals, DEG).unwrap();
        let expected = (decimals > 0).then_some(decimals as usize);
        prop_assert_eq!(fractional_digits(&rendered), (expected, expected));
    }

    #[test]
    fn polynomial_second_argument_is_decimals(
        re in finite(),
        im in finite(),
        decimals in 0usize..8,
    ) {
        let z = Complex::new(re, im);
        let shifted = format(z, Some(Operand::Int(decimals as i64)), 0, DEG).unwrap();
        prop_assert_eq!(shifted, format_polynomial(z, decimals).unwrap());
    }

    #[test]
    fn negative_decimals_are_value_errors(decimals in i64::MIN..0) {
        let err = format(1, Some(45.into()), decimals, DEG).unwrap_err();
        prop_assert!(err.is_value_error());
    }

    #[test]
    fn fractional_shifted_decimals_are_type_errors(decimals in 0.0..10.0f64) {
        let err = format(Complex::new(1.0, 1.0), Some(decimals.into()), 0, DEG).unwrap_err();
        prop_assert!(err.is_type_error());
    }

    #[test]
    fn unknown_units_are_value_errors(unit in "[a-z]{1,6}") {
        prop_assume!(unit != "deg" && unit != "rad");
        let err = construct(10, Some(180.into()), unit.as_str()).unwrap_err();
        prop_assert!(err.is_value_error());
    }
}

#[test]
fn radian_input_close_to_degrees() {
    #[allow(clippy::approx_constant)]
    let rad = construct(10, Some(3.14.into()), "rad").unwrap();
    let deg = construct(10, Some(180.into()), "deg").unwrap();
    assert_abs_diff_eq!(rad.re, deg.re, epsilon = 0.02);
    assert_abs_diff_eq!(rad.im, deg.im, epsilon = 0.02);
}

#[test]
fn decimal_count_limit() {
    let max = MAX_DECIMALS as i64;
    assert_eq!(max, u16::MAX as i64);

    let rendered = format(10, Some(180.into()), max, DEG).unwrap();
    let expected = (Some(MAX_DECIMALS), Some(MAX_DECIMALS));
    assert_eq!(fractional_digits(&rendered), expected);

    let err = format(10, Some(180.into()), max + 1, DEG).unwrap_err();
    assert!(err.is_value_error());
    assert!(err.to_string().contains("65535"));
}

#[test]
fn usize_decimal_counts_convert() {
    let decimals: usize = 2;
    let operand = Operand::try_from(decimals).unwrap();
    assert_eq!(format(Complex::new(2.0, 3.0), Some(operand), 0, DEG).unwrap(), "3.61∠56.31°");
}

use std::{
    fmt::{self, Display},
    ops::{AddAssign, Mul, Neg, Sub},
};

use num_traits::{Float, Num};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Cartesian notation, `2 + 3i`. A precision (`{:.2}`) applies to both parts.
impl<T: Float + Display> Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        let im = self.im.abs();
        match f.precision() {
            Some(p) => write!(f, "{:.p$} {sign} {:.p$}i", self.re, im),
            None => write!(f, "{} {sign} {}i", self.re, im),
        }
    }
}

impl<T: Num + Copy> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn len_sq(self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Float> Complex<T> {
    /// Builds `r * e^(i * theta)` with `theta` in radians.
    pub fn from_polar(r: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Distance from the origin, never negative.
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }

    /// Angle in radians, range (-pi, pi].
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    /// `(abs, arg)`, the inverse of [`Complex::from_polar`].
    pub fn to_polar(self) -> (T, T) {
        (self.abs(), self.arg())
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl<T: Num + Copy> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

impl<T: Num> std::ops::Add<Complex<T>> for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: Num> Sub<Complex<T>> for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: Num + AddAssign> AddAssign<Complex<T>> for Complex<T> {
    fn add_assign(&mut self, rhs: Complex<T>) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<T: Num + Copy> Mul<Complex<T>> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        //(a + bi) * (c + di)
        //real: ac - bd
        //imag: ad + bc
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: Num + Copy> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl<T: Num + Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

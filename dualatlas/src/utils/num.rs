use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::dual::number::Dual;

/// Trait implemented by numeric types used in generic calculations.
///
/// Code written against `Real` instantiates unmodified over plain `f64`
/// (values only) or [`Dual`] (values plus derivatives):
///
/// ```
/// use dualatlas::prelude::*;
///
/// fn quadratic<T: Real>(x: T) -> T {
///     x * x + T::from(3.0) * x + T::from(2.0)
/// }
///
/// assert_eq!(quadratic(3.0_f64), 20.0);
/// let y = quadratic(Dual::var(3.0));
/// assert_eq!(y.val, 20.0);
/// assert_eq!(y.dot, 9.0); // 2x + 3 at x = 3
/// ```
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + From<f64>
{
    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn powf(self, rhs: Self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;

    /// Extract the primal value.
    fn value(self) -> f64;

    #[inline]
    fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }
}

impl Real for f64 {
    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn powf(self, rhs: Self) -> Self {
        f64::powf(self, rhs)
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn value(self) -> f64 {
        self
    }
}

impl Real for Dual {
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    fn exp(self) -> Self {
        Dual::exp(self)
    }

    fn powf(self, rhs: Self) -> Self {
        Dual::powf(self, rhs)
    }

    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    fn sin(self) -> Self {
        Dual::sin(self)
    }

    fn cos(self) -> Self {
        Dual::cos(self)
    }

    fn abs(self) -> Self {
        Dual::abs(self)
    }

    fn value(self) -> f64 {
        self.val
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::DualError;

/// # Dual
/// A forward-mode dual number: a primal value paired with the tangent
/// (derivative) of that value with respect to one seeded variable.
///
/// Every operator and elementary function applies the chain rule to the
/// tangent alongside the primal computation, so evaluating an expression on
/// a seeded `Dual` yields the expression's derivative at that point.
///
/// ## Example
/// ```
/// use dualatlas::prelude::*;
/// let x = Dual::var(2.0);
/// let y = x * x + 3.0 * x;
/// assert_eq!(y.val, 10.0);
/// assert_eq!(y.dot, 7.0);
/// ```
///
/// Constants built from bare scalars carry a zero tangent:
/// ```
/// use dualatlas::prelude::*;
/// let c = Dual::from(5.0);
/// assert_eq!(c.dot, 0.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct Dual {
    /// Primal value.
    pub val: f64,
    /// Tangent, d(val)/d(seed).
    pub dot: f64,
}

impl Dual {
    /// Machine epsilon of the primal kind.
    pub const EPSILON: Dual = Dual { val: f64::EPSILON, dot: 0.0 };
    /// Smallest finite primal value.
    pub const MIN: Dual = Dual { val: f64::MIN, dot: 0.0 };
    /// Smallest positive normal primal value.
    pub const MIN_POSITIVE: Dual = Dual { val: f64::MIN_POSITIVE, dot: 0.0 };
    /// Largest finite primal value.
    pub const MAX: Dual = Dual { val: f64::MAX, dot: 0.0 };
    /// Positive infinity.
    pub const INFINITY: Dual = Dual { val: f64::INFINITY, dot: 0.0 };
    /// Negative infinity.
    pub const NEG_INFINITY: Dual = Dual { val: f64::NEG_INFINITY, dot: 0.0 };
    /// Not a number (value channel).
    pub const NAN: Dual = Dual { val: f64::NAN, dot: 0.0 };

    /// Create a dual number with an explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Dual {
        Dual { val, dot }
    }

    /// Create a constant (tangent = 0).
    #[inline]
    pub fn constant(val: f64) -> Dual {
        Dual { val, dot: 0.0 }
    }

    /// Create the variable of differentiation (tangent = 1).
    ///
    /// Exactly one value entering an expression should be seeded this way;
    /// the result's tangent is then the derivative with respect to it.
    #[inline]
    pub fn var(val: f64) -> Dual {
        Dual { val, dot: 1.0 }
    }
}

/* =======================================================================
 * Arithmetic - chain rules for the four operations
 * ==================================================================== */

impl Add for Dual {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val + rhs.val,
            dot: self.dot + rhs.dot,
        }
    }
}

impl Sub for Dual {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val - rhs.val,
            dot: self.dot - rhs.dot,
        }
    }
}

impl Mul for Dual {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val * rhs.val,
            dot: self.dot * rhs.val + self.val * rhs.dot,
        }
    }
}

impl Div for Dual {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val / rhs.val,
            dot: self.dot / rhs.val - self.val * rhs.dot / (rhs.val * rhs.val),
        }
    }
}

/// Floating-point remainder with the `fmod` tangent rule:
/// d/da = 1, d/db = -trunc(a/b).
impl Rem for Dual {
    type Output = Dual;
    #[inline]
    fn rem(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val % rhs.val,
            dot: self.dot - (self.val / rhs.val).trunc() * rhs.dot,
        }
    }
}

impl Neg for Dual {
    type Output = Dual;
    #[inline]
    fn neg(self) -> Dual {
        Dual {
            val: -self.val,
            dot: -self.dot,
        }
    }
}

/* mixed-operand arithmetic: a plain scalar is a zero-tangent constant */

impl Add<f64> for Dual {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: f64) -> Dual {
        self + Dual::constant(rhs)
    }
}
impl Sub<f64> for Dual {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: f64) -> Dual {
        self - Dual::constant(rhs)
    }
}
impl Mul<f64> for Dual {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: f64) -> Dual {
        self * Dual::constant(rhs)
    }
}
impl Div<f64> for Dual {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: f64) -> Dual {
        self / Dual::constant(rhs)
    }
}
impl Rem<f64> for Dual {
    type Output = Dual;
    #[inline]
    fn rem(self, rhs: f64) -> Dual {
        self % Dual::constant(rhs)
    }
}

/* constant-on-the-left impls (local type `Dual` ⇒ OK with orphan rule) */

impl Add<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual::constant(self) + rhs
    }
}
impl Sub<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual::constant(self) - rhs
    }
}
impl Mul<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        Dual::constant(self) * rhs
    }
}
impl Div<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual::constant(self) / rhs
    }
}
impl Rem<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn rem(self, rhs: Dual) -> Dual {
        Dual::constant(self) % rhs
    }
}

/* assignment variants, defined purely as x = x op y */

macro_rules! impl_assign {
    ($Trait:ident, $func:ident, $sym:tt) => {
        impl $Trait for Dual {
            #[inline]
            fn $func(&mut self, rhs: Dual) {
                *self = *self $sym rhs;
            }
        }
        impl $Trait<f64> for Dual {
            #[inline]
            fn $func(&mut self, rhs: f64) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, +);
impl_assign!(SubAssign, sub_assign, -);
impl_assign!(MulAssign, mul_assign, *);
impl_assign!(DivAssign, div_assign, /);
impl_assign!(RemAssign, rem_assign, %);

/* =======================================================================
 * Comparisons - value channel only, tangents never participate
 * ==================================================================== */

impl PartialEq for Dual {
    #[inline]
    fn eq(&self, other: &Dual) -> bool {
        self.val == other.val
    }
}

impl PartialOrd for Dual {
    #[inline]
    fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl PartialEq<f64> for Dual {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.val == *other
    }
}

impl PartialOrd<f64> for Dual {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.val.partial_cmp(other)
    }
}

impl PartialEq<Dual> for f64 {
    #[inline]
    fn eq(&self, other: &Dual) -> bool {
        *self == other.val
    }
}

impl PartialOrd<Dual> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
        self.partial_cmp(&other.val)
    }
}

/* =======================================================================
 * Iterator folds
 * ==================================================================== */

impl Sum for Dual {
    fn sum<I: Iterator<Item = Dual>>(iter: I) -> Dual {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

impl Product for Dual {
    fn product<I: Iterator<Item = Dual>>(iter: I) -> Dual {
        iter.fold(Dual::constant(1.0), |acc, x| acc * x)
    }
}

/* =======================================================================
 * Conversions
 * ==================================================================== */

impl From<f64> for Dual {
    #[inline]
    fn from(val: f64) -> Dual {
        Dual::constant(val)
    }
}
impl From<f32> for Dual {
    #[inline]
    fn from(val: f32) -> Dual {
        Dual::constant(val as f64)
    }
}
impl From<i32> for Dual {
    #[inline]
    fn from(val: i32) -> Dual {
        Dual::constant(val as f64)
    }
}

/// Explicit extraction of the primal value; the tangent is dropped.
impl From<Dual> for f64 {
    #[inline]
    fn from(d: Dual) -> f64 {
        d.val
    }
}

/* =======================================================================
 * Textual boundary - the tangent is not observable in text form
 * ==================================================================== */

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.val, f)
    }
}

/// Parses a primal value; the tangent is unconditionally reset to 0.
/// A value read from text can never be the seeded variable.
impl FromStr for Dual {
    type Err = DualError;

    fn from_str(s: &str) -> Result<Dual, DualError> {
        let val = s.trim().parse::<f64>()?;
        Ok(Dual::constant(val))
    }
}

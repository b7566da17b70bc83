//! Single-precision-flavored adapter around the dual core.
//!
//! [`FloatDual`] exists purely so external code that dispatches on a
//! distinguished "float-like" kind can embed dual numbers unchanged; every
//! operation forwards to the double-precision arithmetic underneath. The
//! free functions mirror the `f`-suffixed math-library entry points and
//! delegate one-to-one to the core derivative rules. Nothing in here is
//! part of the core type's contract.

use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

use crate::dual::number::Dual;

/// Float-like wrapper over [`Dual`]; forwards everything unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct FloatDual(pub Dual);

impl Deref for FloatDual {
    type Target = Dual;

    #[inline]
    fn deref(&self) -> &Dual {
        &self.0
    }
}

impl From<Dual> for FloatDual {
    #[inline]
    fn from(d: Dual) -> FloatDual {
        FloatDual(d)
    }
}
impl From<FloatDual> for Dual {
    #[inline]
    fn from(f: FloatDual) -> Dual {
        f.0
    }
}
impl From<f32> for FloatDual {
    #[inline]
    fn from(val: f32) -> FloatDual {
        FloatDual(Dual::constant(val as f64))
    }
}
impl From<f64> for FloatDual {
    #[inline]
    fn from(val: f64) -> FloatDual {
        FloatDual(Dual::constant(val))
    }
}

macro_rules! impl_forward_op {
    ($Trait:ident, $func:ident) => {
        impl $Trait for FloatDual {
            type Output = FloatDual;
            #[inline]
            fn $func(self, rhs: FloatDual) -> FloatDual {
                FloatDual($Trait::$func(self.0, rhs.0))
            }
        }
    };
}

impl_forward_op!(Add, add);
impl_forward_op!(Sub, sub);
impl_forward_op!(Mul, mul);
impl_forward_op!(Div, div);

impl Neg for FloatDual {
    type Output = FloatDual;
    #[inline]
    fn neg(self) -> FloatDual {
        FloatDual(-self.0)
    }
}

impl fmt::Display for FloatDual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub fn cosf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.cos())
}

pub fn sinf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.sin())
}

pub fn sqrtf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.sqrt())
}

pub fn atan2f(a: FloatDual, b: FloatDual) -> FloatDual {
    FloatDual(a.0.atan2(b.0))
}

pub fn fabsf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.abs())
}

pub fn acosf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.acos())
}

pub fn floorf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.floor())
}

pub fn ceilf(a: FloatDual) -> FloatDual {
    FloatDual(a.0.ceil())
}

//! Complex numbers built over dual components.
//!
//! `num_complex` already provides `ComplexDual op Dual` for the scalar on
//! the right; the impls here add the scalar-on-left direction. A plain
//! `f64` operand reaches the complex plane through `Dual::from` promotion
//! (coherence rules rule out direct `f64 op Complex<Dual>` impls), keeping
//! every real operand a zero-tangent constant.

use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex;

use crate::dual::number::Dual;

/// Complex number whose real and imaginary parts are dual numbers.
pub type ComplexDual = Complex<Dual>;

/// Build a [`ComplexDual`], promoting plain scalars to zero-tangent duals.
#[inline]
pub fn complex(re: impl Into<Dual>, im: impl Into<Dual>) -> ComplexDual {
    Complex::new(re.into(), im.into())
}

macro_rules! impl_complex_lhs {
    ($Trait:ident, $func:ident) => {
        impl $Trait<ComplexDual> for Dual {
            type Output = ComplexDual;
            #[inline]
            fn $func(self, rhs: ComplexDual) -> ComplexDual {
                $Trait::$func(Complex::new(self, Dual::constant(0.0)), rhs)
            }
        }
    };
}

impl_complex_lhs!(Add, add);
impl_complex_lhs!(Sub, sub);
impl_complex_lhs!(Mul, mul);
impl_complex_lhs!(Div, div);

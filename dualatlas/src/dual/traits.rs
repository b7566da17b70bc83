//! `num-traits` integration, so `Dual` plugs into generic numeric code and
//! `num_complex::Complex<Dual>` arithmetic works out of the box.

use num_traits::{Num, One, Zero};

use super::number::Dual;

impl Zero for Dual {
    #[inline]
    fn zero() -> Dual {
        Dual::constant(0.0)
    }

    /// Zero by the value channel, matching the comparison convention.
    #[inline]
    fn is_zero(&self) -> bool {
        self.val == 0.0
    }
}

impl One for Dual {
    #[inline]
    fn one() -> Dual {
        Dual::constant(1.0)
    }
}

impl Num for Dual {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    /// Parses a primal value; the tangent is 0, as with every textual input.
    fn from_str_radix(str: &str, radix: u32) -> Result<Dual, Self::FromStrRadixErr> {
        f64::from_str_radix(str, radix).map(Dual::constant)
    }
}

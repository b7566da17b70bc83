//! Elementary functions over [`Dual`], each propagating the chain rule:
//! a unary `f` returns `{f(val), f'(val) * dot}`, a binary `f(a, b)` sums
//! both partial contributions into the tangent.
//!
//! The surface mirrors `f64`'s method names so a `Dual` reads as a drop-in
//! scalar. Out-of-domain inputs produce NaN/Inf exactly as `f64` would; no
//! operation here returns a `Result`.

use std::f64::consts::{FRAC_2_SQRT_PI, LN_10, LN_2};

use statrs::function::{erf, gamma};

use super::number::Dual;

impl Dual {
    /// Absolute value. The sign convention at 0 is +1.
    #[inline]
    pub fn abs(self) -> Dual {
        Dual {
            val: self.val.abs(),
            dot: if self.val >= 0.0 { self.dot } else { -self.dot },
        }
    }

    /// Inverse cosine: d/dx acos(x) = -1/sqrt(1 - x^2).
    #[inline]
    pub fn acos(self) -> Dual {
        Dual {
            val: self.val.acos(),
            dot: -1.0 / (1.0 - self.val * self.val).sqrt() * self.dot,
        }
    }

    /// Inverse hyperbolic cosine: d/dx acosh(x) = 1/sqrt(x^2 - 1).
    #[inline]
    pub fn acosh(self) -> Dual {
        Dual {
            val: self.val.acosh(),
            dot: 1.0 / (self.val * self.val - 1.0).sqrt() * self.dot,
        }
    }

    /// Inverse sine: d/dx asin(x) = 1/sqrt(1 - x^2).
    #[inline]
    pub fn asin(self) -> Dual {
        Dual {
            val: self.val.asin(),
            dot: 1.0 / (1.0 - self.val * self.val).sqrt() * self.dot,
        }
    }

    /// Inverse hyperbolic sine: d/dx asinh(x) = 1/sqrt(x^2 + 1).
    #[inline]
    pub fn asinh(self) -> Dual {
        Dual {
            val: self.val.asinh(),
            dot: 1.0 / (self.val * self.val + 1.0).sqrt() * self.dot,
        }
    }

    /// Inverse tangent: d/dx atan(x) = 1/(1 + x^2).
    #[inline]
    pub fn atan(self) -> Dual {
        Dual {
            val: self.val.atan(),
            dot: 1.0 / (1.0 + self.val * self.val) * self.dot,
        }
    }

    /// Two-argument inverse tangent, with both partials:
    /// d/da = -b/(a^2 + b^2), d/db = a/(a^2 + b^2).
    #[inline]
    pub fn atan2(self, other: impl Into<Dual>) -> Dual {
        let b = other.into();
        let denom = self.val * self.val + b.val * b.val;
        Dual {
            val: self.val.atan2(b.val),
            dot: -b.val / denom * self.dot + self.val / denom * b.dot,
        }
    }

    #[inline]
    pub fn sin(self) -> Dual {
        Dual {
            val: self.val.sin(),
            dot: self.val.cos() * self.dot,
        }
    }

    #[inline]
    pub fn cos(self) -> Dual {
        Dual {
            val: self.val.cos(),
            dot: -self.val.sin() * self.dot,
        }
    }

    /// Tangent: d/dx tan(x) = 1/cos^2(x).
    #[inline]
    pub fn tan(self) -> Dual {
        let c = self.val.cos();
        Dual {
            val: self.val.tan(),
            dot: self.dot / (c * c),
        }
    }

    #[inline]
    pub fn sinh(self) -> Dual {
        Dual {
            val: self.val.sinh(),
            dot: self.val.cosh() * self.dot,
        }
    }

    #[inline]
    pub fn cosh(self) -> Dual {
        Dual {
            val: self.val.cosh(),
            dot: self.val.sinh() * self.dot,
        }
    }

    /// Hyperbolic tangent: d/dx tanh(x) = 1 - tanh^2(x).
    #[inline]
    pub fn tanh(self) -> Dual {
        let t = self.val.tanh();
        Dual {
            val: t,
            dot: (1.0 - t * t) * self.dot,
        }
    }

    /// Exponential: d/dx exp(x) = exp(x).
    #[inline]
    pub fn exp(self) -> Dual {
        let e = self.val.exp();
        Dual {
            val: e,
            dot: e * self.dot,
        }
    }

    /// Base-2 exponential: d/dx 2^x = 2^x ln 2.
    #[inline]
    pub fn exp2(self) -> Dual {
        let e = self.val.exp2();
        Dual {
            val: e,
            dot: e * LN_2 * self.dot,
        }
    }

    /// exp(x) - 1, accurate near 0; the tangent is exp(x).
    #[inline]
    pub fn exp_m1(self) -> Dual {
        Dual {
            val: self.val.exp_m1(),
            dot: self.val.exp() * self.dot,
        }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Dual {
        Dual {
            val: self.val.ln(),
            dot: self.dot / self.val,
        }
    }

    /// Base-2 logarithm: d/dx log2(x) = 1/(x ln 2).
    #[inline]
    pub fn log2(self) -> Dual {
        Dual {
            val: self.val.log2(),
            dot: self.dot / (self.val * LN_2),
        }
    }

    /// Base-10 logarithm: d/dx log10(x) = 1/(x ln 10).
    #[inline]
    pub fn log10(self) -> Dual {
        Dual {
            val: self.val.log10(),
            dot: self.dot / (self.val * LN_10),
        }
    }

    /// ln(1 + x), accurate near 0: d/dx = 1/(x + 1).
    #[inline]
    pub fn ln_1p(self) -> Dual {
        Dual {
            val: self.val.ln_1p(),
            dot: self.dot / (self.val + 1.0),
        }
    }

    /// Square root: d/dx sqrt(x) = 1/(2 sqrt(x)).
    ///
    /// At exactly 0 the result is `{0, 0}` rather than a division-by-zero
    /// tangent.
    #[inline]
    pub fn sqrt(self) -> Dual {
        if self.val == 0.0 {
            return Dual::constant(0.0);
        }
        let s = self.val.sqrt();
        Dual {
            val: s,
            dot: 0.5 / s * self.dot,
        }
    }

    /// Cube root: d/dx cbrt(x) = cbrt(x)/(3x).
    #[inline]
    pub fn cbrt(self) -> Dual {
        let c = self.val.cbrt();
        Dual {
            val: c,
            dot: c / (3.0 * self.val) * self.dot,
        }
    }

    /// Reciprocal: d/dx (1/x) = -1/x^2.
    #[inline]
    pub fn recip(self) -> Dual {
        Dual {
            val: self.val.recip(),
            dot: -self.dot / (self.val * self.val),
        }
    }

    /// Euclidean distance from the origin, with both partials:
    /// d/da = a/hypot, d/db = b/hypot.
    #[inline]
    pub fn hypot(self, other: impl Into<Dual>) -> Dual {
        let b = other.into();
        let h = self.val.hypot(b.val);
        Dual {
            val: h,
            dot: self.val / h * self.dot + b.val / h * b.dot,
        }
    }

    /// Magnitude of `self` with the sign of `sign`. The tangent follows the
    /// magnitude carrier only, flipped when the copy flips the sign.
    #[inline]
    pub fn copysign(self, sign: impl Into<Dual>) -> Dual {
        let b = sign.into();
        Dual {
            val: self.val.copysign(b.val),
            dot: 1.0f64.copysign(self.val * b.val) * self.dot,
        }
    }

    /// General power a^b with both partials:
    /// d/da = b a^(b-1) while b != 0, and d/db = a^b ln(a) while a > 0.
    /// The logarithm term is dropped where ln is undefined, so a varying
    /// exponent over a non-positive base contributes no tangent.
    #[inline]
    pub fn powf(self, exponent: impl Into<Dual>) -> Dual {
        let b = exponent.into();
        let v = self.val.powf(b.val);
        let da = if b.val != 0.0 {
            b.val * self.val.powf(b.val - 1.0)
        } else {
            0.0
        };
        let db = if self.val > 0.0 { v * self.val.ln() } else { 0.0 };
        Dual {
            val: v,
            dot: da * self.dot + db * b.dot,
        }
    }

    /// Integer power: d/dx x^n = n x^(n-1).
    #[inline]
    pub fn powi(self, n: i32) -> Dual {
        Dual {
            val: self.val.powi(n),
            dot: n as f64 * self.val.powi(n - 1) * self.dot,
        }
    }

    /// Error function: d/dx erf(x) = (2/sqrt(pi)) exp(-x^2).
    #[inline]
    pub fn erf(self) -> Dual {
        Dual {
            val: erf::erf(self.val),
            dot: FRAC_2_SQRT_PI * (-self.val * self.val).exp() * self.dot,
        }
    }

    /// Complementary error function: the negated erf tangent.
    #[inline]
    pub fn erfc(self) -> Dual {
        Dual {
            val: erf::erfc(self.val),
            dot: -FRAC_2_SQRT_PI * (-self.val * self.val).exp() * self.dot,
        }
    }

    /// Gamma function. The tangent comes from a central finite difference
    /// with a +/-1% perturbation of the input - an approximation, not exact
    /// forward AD.
    #[inline]
    pub fn gamma(self) -> Dual {
        let derivative =
            (gamma::gamma(self.val * 1.01) - gamma::gamma(self.val * 0.99)) / (self.val * 0.02);
        Dual {
            val: gamma::gamma(self.val),
            dot: derivative * self.dot,
        }
    }

    /// Log-gamma function, finite-difference tangent as with [`Dual::gamma`].
    #[inline]
    pub fn ln_gamma(self) -> Dual {
        let derivative = (gamma::ln_gamma(self.val * 1.01) - gamma::ln_gamma(self.val * 0.99))
            / (self.val * 0.02);
        Dual {
            val: gamma::ln_gamma(self.val),
            dot: derivative * self.dot,
        }
    }

    /* rounding family: piecewise constant, so the tangent is 0 everywhere
     * (at the jumps the derivative is defined as 0 by convention) */

    #[inline]
    pub fn floor(self) -> Dual {
        Dual::constant(self.val.floor())
    }

    #[inline]
    pub fn ceil(self) -> Dual {
        Dual::constant(self.val.ceil())
    }

    #[inline]
    pub fn trunc(self) -> Dual {
        Dual::constant(self.val.trunc())
    }

    #[inline]
    pub fn round(self) -> Dual {
        Dual::constant(self.val.round())
    }

    /// Round half to even, the `nearbyint`/`rint` behavior under the
    /// default rounding mode.
    #[inline]
    pub fn round_ties_even(self) -> Dual {
        Dual::constant(self.val.round_ties_even())
    }

    /// Fractional part; retains the tangent, since x - trunc(x) has unit
    /// slope between the jumps.
    #[inline]
    pub fn fract(self) -> Dual {
        Dual {
            val: self.val.fract(),
            dot: self.dot,
        }
    }

    /// Split into fractional and integral parts: the fractional part keeps
    /// the tangent, the integral part gets tangent 0.
    #[inline]
    pub fn modf(self) -> (Dual, Dual) {
        (self.fract(), self.trunc())
    }

    /// Maximum by primal value; the winning operand's pair is returned
    /// unmodified (argument selection, not a component-wise rule).
    #[inline]
    pub fn max(self, other: Dual) -> Dual {
        if self.val > other.val {
            self
        } else {
            other
        }
    }

    /// Minimum by primal value; argument selection as with [`Dual::max`].
    #[inline]
    pub fn min(self, other: Dual) -> Dual {
        if self.val < other.val {
            self
        } else {
            other
        }
    }

    /// Clamp the primal value to `[min, max]`; values pushed onto a bound
    /// become constants there.
    #[inline]
    pub fn clamp(self, min: f64, max: f64) -> Dual {
        if self.val < min {
            Dual::constant(min)
        } else if self.val > max {
            Dual::constant(max)
        } else {
            self
        }
    }

    /* predicates evaluate the value channel only */

    #[inline]
    pub fn is_finite(self) -> bool {
        self.val.is_finite()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.val.is_infinite()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.val.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Cross-validates the tangent of `f` at `x0` against a central finite
    /// difference of the plain-f64 function `g`.
    fn check_tangent(f: impl Fn(Dual) -> Dual, g: impl Fn(f64) -> f64, x0: f64) {
        let h = 1e-6;
        let fd = (g(x0 + h) - g(x0 - h)) / (2.0 * h);
        let ad = f(Dual::var(x0)).dot;
        assert_relative_eq!(ad, fd, max_relative = 1e-5, epsilon = 1e-8);
        // value channel must match the plain function exactly
        assert_eq!(f(Dual::var(x0)).val, g(x0));
    }

    #[test]
    fn test_tangents_match_finite_differences() {
        check_tangent(|x| x.abs(), f64::abs, 1.3);
        check_tangent(|x| x.abs(), f64::abs, -1.3);
        check_tangent(|x| x.acos(), f64::acos, 0.3);
        check_tangent(|x| x.acosh(), f64::acosh, 1.7);
        check_tangent(|x| x.asin(), f64::asin, 0.3);
        check_tangent(|x| x.asinh(), f64::asinh, 0.8);
        check_tangent(|x| x.atan(), f64::atan, 0.9);
        check_tangent(|x| x.sin(), f64::sin, 0.7);
        check_tangent(|x| x.cos(), f64::cos, 0.7);
        check_tangent(|x| x.tan(), f64::tan, 0.5);
        check_tangent(|x| x.sinh(), f64::sinh, 0.6);
        check_tangent(|x| x.cosh(), f64::cosh, 0.6);
        check_tangent(|x| x.tanh(), f64::tanh, 0.4);
        check_tangent(|x| x.exp(), f64::exp, 0.8);
        check_tangent(|x| x.exp2(), f64::exp2, 1.2);
        check_tangent(|x| x.exp_m1(), f64::exp_m1, 0.3);
        check_tangent(|x| x.ln(), f64::ln, 1.9);
        check_tangent(|x| x.log2(), f64::log2, 3.1);
        check_tangent(|x| x.log10(), f64::log10, 2.4);
        check_tangent(|x| x.ln_1p(), f64::ln_1p, 0.6);
        check_tangent(|x| x.sqrt(), f64::sqrt, 2.3);
        check_tangent(|x| x.cbrt(), f64::cbrt, 1.8);
        check_tangent(|x| x.recip(), f64::recip, 1.4);
        check_tangent(|x| x.erf(), erf::erf, 0.5);
        check_tangent(|x| x.erfc(), erf::erfc, 0.5);
    }

    #[test]
    fn test_analytic_spot_checks() {
        // scenario: sin at 0, cos(0) = 1
        let s = Dual::var(0.0).sin();
        assert_eq!(s.val, 0.0);
        assert_eq!(s.dot, 1.0);

        let r = Dual::var(4.0).sqrt();
        assert_eq!(r.val, 2.0);
        assert_relative_eq!(r.dot, 0.25, max_relative = 1e-12);

        let l = Dual::var(2.0).ln();
        assert_relative_eq!(l.dot, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_sqrt_zero_guard() {
        let r = Dual::var(0.0).sqrt();
        assert_eq!(r.val, 0.0);
        assert_eq!(r.dot, 0.0);
    }

    #[test]
    fn test_pow_base_varying() {
        // d/dx x^3 at x = 2 is 3 * 4 = 12
        let y = Dual::new(2.0, 1.0).powf(Dual::new(3.0, 0.0));
        assert_eq!(y.val, 8.0);
        assert_eq!(y.dot, 12.0);
    }

    #[test]
    fn test_pow_exponent_varying() {
        // d/db 2^b at b = 3 is 8 ln 2
        let y = Dual::constant(2.0).powf(Dual::var(3.0));
        assert_eq!(y.val, 8.0);
        assert_relative_eq!(y.dot, 8.0 * std::f64::consts::LN_2, max_relative = 1e-12);
    }

    #[test]
    fn test_pow_zero_exponent_drops_base_term() {
        let y = Dual::var(2.0).powf(Dual::constant(0.0));
        assert_eq!(y.val, 1.0);
        assert_eq!(y.dot, 0.0);
    }

    #[test]
    fn test_pow_negative_base_stays_finite() {
        // integral exponent on a negative base: the ln term is dropped,
        // the base partial survives
        let y = Dual::var(-2.0).powf(Dual::constant(3.0));
        assert_eq!(y.val, -8.0);
        assert_eq!(y.dot, 12.0);
        // varying exponent over a negative base contributes no tangent
        let y = Dual::constant(-2.0).powf(Dual::var(2.0));
        assert_eq!(y.val, 4.0);
        assert_eq!(y.dot, 0.0);
        assert!(!y.dot.is_nan());
    }

    #[test]
    fn test_powi_matches_powf() {
        let a = Dual::var(1.7);
        let via_i = a.powi(4);
        let via_f = a.powf(Dual::constant(4.0));
        assert_relative_eq!(via_i.val, via_f.val, max_relative = 1e-12);
        assert_relative_eq!(via_i.dot, via_f.dot, max_relative = 1e-12);
    }

    #[test]
    fn test_hypot_partials() {
        let h = Dual::var(3.0).hypot(Dual::constant(4.0));
        assert_eq!(h.val, 5.0);
        assert_relative_eq!(h.dot, 0.6, max_relative = 1e-12);
        let h = Dual::constant(3.0).hypot(Dual::var(4.0));
        assert_relative_eq!(h.dot, 0.8, max_relative = 1e-12);
    }

    #[test]
    fn test_atan2_partials() {
        // tangent = (-b * da + a * db) / (a^2 + b^2)
        let y = Dual::var(1.0).atan2(Dual::constant(1.0));
        assert_relative_eq!(y.val, std::f64::consts::FRAC_PI_4, max_relative = 1e-12);
        assert_relative_eq!(y.dot, -0.5, max_relative = 1e-12);
        let y = Dual::constant(1.0).atan2(Dual::var(1.0));
        assert_relative_eq!(y.dot, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_copysign_tangent_follows_magnitude_carrier() {
        let y = Dual::var(3.0).copysign(Dual::constant(-1.0));
        assert_eq!(y.val, -3.0);
        assert_eq!(y.dot, -1.0);
        let y = Dual::var(3.0).copysign(Dual::constant(2.0));
        assert_eq!(y.val, 3.0);
        assert_eq!(y.dot, 1.0);
        // the sign donor contributes nothing
        let y = Dual::constant(3.0).copysign(Dual::var(-1.0));
        assert_eq!(y.dot, 0.0);
    }

    #[test]
    fn test_rounding_family_is_piecewise_constant() {
        // tested away from integer boundaries
        let x = Dual::var(2.5);
        assert_eq!(x.floor().val, 2.0);
        assert_eq!(x.floor().dot, 0.0);
        assert_eq!(x.ceil().val, 3.0);
        assert_eq!(x.ceil().dot, 0.0);
        let x = Dual::var(-2.7);
        assert_eq!(x.trunc().val, -2.0);
        assert_eq!(x.trunc().dot, 0.0);
        assert_eq!(x.round().val, -3.0);
        assert_eq!(x.round().dot, 0.0);
        assert_eq!(Dual::var(2.5).round_ties_even().val, 2.0);
        assert_eq!(Dual::var(3.5).round_ties_even().val, 4.0);
    }

    #[test]
    fn test_modf_split() {
        let (frac, int) = Dual::var(2.75).modf();
        assert_relative_eq!(frac.val, 0.75, max_relative = 1e-12);
        assert_eq!(frac.dot, 1.0);
        assert_eq!(int.val, 2.0);
        assert_eq!(int.dot, 0.0);
        let (frac, int) = Dual::var(-2.75).modf();
        assert_relative_eq!(frac.val, -0.75, max_relative = 1e-12);
        assert_eq!(int.val, -2.0);
    }

    #[test]
    fn test_gamma_tangent_approximates_digamma_identity() {
        // gamma'(x) = gamma(x) * digamma(x); the +/-1% finite difference is
        // only expected to land in the neighborhood
        let x = 3.0;
        let g = Dual::var(x).gamma();
        assert_relative_eq!(g.val, 2.0, max_relative = 1e-12);
        let expected = gamma::gamma(x) * gamma::digamma(x);
        assert_relative_eq!(g.dot, expected, max_relative = 1e-2);

        let lg = Dual::var(x).ln_gamma();
        assert_relative_eq!(lg.val, gamma::ln_gamma(x), max_relative = 1e-12);
        assert_relative_eq!(lg.dot, gamma::digamma(x), max_relative = 1e-2);
    }

    #[test]
    fn test_max_min_select_arguments() {
        let a = Dual::new(2.0, 5.0);
        let b = Dual::new(3.0, -7.0);
        let m = a.max(b);
        assert_eq!(m.val, 3.0);
        assert_eq!(m.dot, -7.0); // b's pair, untouched
        let m = a.min(b);
        assert_eq!(m.val, 2.0);
        assert_eq!(m.dot, 5.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Dual::var(5.0).clamp(0.0, 1.0).val, 1.0);
        assert_eq!(Dual::var(5.0).clamp(0.0, 1.0).dot, 0.0);
        assert_eq!(Dual::var(0.5).clamp(0.0, 1.0).dot, 1.0);
    }

    #[test]
    fn test_predicates_use_value_channel_only() {
        assert!(Dual::new(1.0, f64::NAN).is_finite());
        assert!(!Dual::new(1.0, f64::NAN).is_nan());
        assert!(Dual::new(f64::INFINITY, 0.0).is_infinite());
        assert!(Dual::new(f64::NAN, 0.0).is_nan());
    }

    #[test]
    fn test_out_of_domain_inputs_propagate_nan() {
        assert!(Dual::var(-1.0).sqrt().val.is_nan());
        assert!(Dual::var(2.0).asin().val.is_nan());
        assert!(Dual::var(-1.0).ln().val.is_nan());
    }

    #[test]
    fn test_chained_composition() {
        // f(x) = sin(x^2), f'(x) = 2x cos(x^2)
        let x = Dual::var(1.2);
        let y = (x * x).sin();
        let expected = 2.0 * 1.2 * (1.2f64 * 1.2).cos();
        assert_relative_eq!(y.dot, expected, max_relative = 1e-12);
    }
}

//! # dualatlas
//!
//! Forward-mode automatic differentiation through dual numbers.
//!
//! A [`Dual`](crate::dual::number::Dual) carries a primal value together
//! with its derivative with respect to one seeded variable, propagating the
//! chain rule through every arithmetic operation and elementary function.
//! Seed the variable of differentiation with [`Dual::var`](crate::dual::number::Dual::var),
//! evaluate any expression, and read the derivative off the result:
//!
//! ```
//! use dualatlas::prelude::*;
//!
//! let x = Dual::var(2.0);
//! let y = x * x + 3.0 * x;
//! assert_eq!(y.val, 10.0);
//! assert_eq!(y.dot, 7.0); // d/dx (x^2 + 3x) at x = 2
//! ```
//!
//! Generic numeric code written against the [`Real`](crate::utils::num::Real)
//! trait runs unmodified over plain `f64` or `Dual`, so a single pricing or
//! simulation kernel yields values and sensitivities from the same source.

pub mod dual;
pub mod interop;
pub mod prelude;
pub mod utils;

pub use crate::{
    dual::{
        number::Dual,
        promote::{promote, Promote},
    },
    interop::single::*,
    utils::{errors::*, num::Real},
};

#[cfg(feature = "complex")]
pub use crate::interop::complex::*;

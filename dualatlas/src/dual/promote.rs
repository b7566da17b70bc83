use super::number::Dual;

/// Conditional promotion into the dual domain.
///
/// Arithmetic scalars promote to a zero-tangent [`Dual`]; a `Dual` passes
/// through unchanged. Types outside the numeric family simply do not
/// implement the trait, which is how generic code states "promote where
/// possible" under Rust's trait bounds.
///
/// ```
/// use dualatlas::prelude::*;
/// let c = promote(2.5);
/// assert_eq!(c.val, 2.5);
/// assert_eq!(c.dot, 0.0);
/// let x = promote(Dual::var(1.0));
/// assert_eq!(x.dot, 1.0);
/// ```
pub trait Promote {
    /// The dual-domain result of the promotion.
    type Promoted;

    fn promote(self) -> Self::Promoted;
}

macro_rules! impl_promote_scalar {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Promoted = Dual;
                #[inline]
                fn promote(self) -> Dual {
                    Dual::constant(self as f64)
                }
            }
        )*
    };
}

impl_promote_scalar!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl Promote for Dual {
    type Promoted = Dual;
    #[inline]
    fn promote(self) -> Dual {
        self
    }
}

/// Free-function form of [`Promote::promote`].
#[inline]
pub fn promote<T: Promote>(t: T) -> T::Promoted {
    t.promote()
}

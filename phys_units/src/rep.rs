/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use num_traits::{NumCast, Signed};
use std::fmt::{Debug, Display};

/// Numeric types usable as the magnitude of a quantity.
pub trait Rep:
    Signed
    + NumCast
    + PartialOrd
    + Copy
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl Rep for f32 {}
impl Rep for f64 {}
impl Rep for i32 {}
impl Rep for i64 {}

/// The representation used when combining `Self` with `Rhs`: the one
/// with the larger storage width, or `Self` when both are equally wide.
pub trait Promote<Rhs> {
    type Output;
    fn promote(self) -> Self::Output;
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

/// Shorthand for `<T as Promote<U>>::Output`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

/// Convert both operands to their common representation.
pub fn promoted<T, U>(lhs: T, rhs: U) -> (Promoted<T, U>, Promoted<T, U>)
where
    T: Promote<U>,
{
    (
        <T as Promote<U>>::promote(lhs),
        <T as Promote<U>>::promote_rhs(rhs),
    )
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote! {
    f32, f32 => f32;
    f32, f64 => f64;
    f32, i32 => f32;
    f32, i64 => i64;
    f64, f32 => f64;
    f64, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    i32, f32 => i32;
    i32, f64 => f64;
    i32, i32 => i32;
    i32, i64 => i64;
    i64, f32 => i64;
    i64, f64 => i64;
    i64, i32 => i64;
    i64, i64 => i64;
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

use num_traits::{AsPrimitive, Float, NumCast};
use serde::{Deserialize, Serialize};

use super::dimension::{Dimensions, Exponent};
use super::error::UnitError;
use super::math;
use super::rep::{promoted, Promote, Promoted, Rep};

/// A magnitude together with its dimensions.
///
/// The dimensions of a quantity follow from how it was computed:
/// multiplication and division combine them, addition and subtraction
/// require them to be equal. The only way to pick them explicitly is
/// [`make_quantity`].
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity<T = f64> {
    magnitude: T,
    dimensions: Dimensions,
}

/// Build a quantity from a magnitude and an explicit dimension vector.
/// Intended for unit tables; everything else should be derived from
/// existing quantities.
pub const fn make_quantity<T>(
    magnitude: T,
    dimensions: Dimensions,
) -> Quantity<T> {
    Quantity {
        magnitude,
        dimensions,
    }
}

impl<T> Quantity<T> {
    pub const fn dimensionless(magnitude: T) -> Self {
        make_quantity(magnitude, Dimensions::DIMENSIONLESS)
    }

    pub const fn magnitude(&self) -> T
    where
        T: Copy,
    {
        self.magnitude
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn magnitude_ref(&self) -> &T {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> T {
        self.magnitude
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimensions.is_all_zero()
    }

    fn check_dimensions(&self, other: Dimensions) -> Result<(), UnitError> {
        match self.dimensions == other {
            true => Ok(()),
            false => {
                Err(UnitError::DimensionMismatch(self.dimensions, other))
            }
        }
    }
}

/* Const products for the unit tables. */
impl Quantity<f64> {
    pub const fn times(self, rhs: Self) -> Self {
        make_quantity(
            self.magnitude * rhs.magnitude,
            self.dimensions.plus(rhs.dimensions),
        )
    }

    pub const fn per(self, rhs: Self) -> Self {
        make_quantity(
            self.magnitude / rhs.magnitude,
            self.dimensions.minus(rhs.dimensions),
        )
    }

    pub const fn scale(self, factor: f64) -> Self {
        make_quantity(self.magnitude * factor, self.dimensions)
    }
}

impl<T: Rep> Quantity<T> {
    /// Zero of the same dimensions.
    pub fn zero(&self) -> Self {
        make_quantity(T::zero(), self.dimensions)
    }

    pub fn abs(self) -> Self {
        make_quantity(self.magnitude.abs(), self.dimensions)
    }

    /// Express `self` as a multiple of `unit`. The dimensions must match;
    /// the result is dimensionless.
    pub fn to<U>(
        self,
        unit: Quantity<U>,
    ) -> Result<Quantity<Promoted<T, U>>, UnitError>
    where
        T: Promote<U>,
        U: Rep,
        Promoted<T, U>: Rep,
    {
        self.check_dimensions(unit.dimensions).map_err(|e| {
            log::debug!("cannot convert {} to {}", self, unit);
            e
        })?;
        Ok(self / unit)
    }

    /// Integer power. Negative exponents give the reciprocal.
    pub fn powi(self, n: Exponent) -> Self {
        let magnitude = math::powi(self.magnitude, n.unsigned_abs());
        make_quantity(
            match n < 0 {
                true => T::one() / magnitude,
                false => magnitude,
            },
            self.dimensions.scaled(n),
        )
    }

    pub fn square(self) -> Self {
        make_quantity(
            math::square(self.magnitude),
            self.dimensions.scaled(2),
        )
    }

    pub fn cube(self) -> Self {
        make_quantity(math::cube(self.magnitude), self.dimensions.scaled(3))
    }

    /* Note: we cannot implement PartialOrd, because it does not allow
    for error conditions. */
    pub fn partial_cmp<U>(
        &self,
        rhs: &Quantity<U>,
    ) -> Result<Option<Ordering>, UnitError>
    where
        T: Promote<U>,
        U: Rep,
        Promoted<T, U>: Rep,
    {
        self.check_dimensions(rhs.dimensions)?;
        let (a, b) = promoted(self.magnitude, rhs.magnitude);
        Ok(a.partial_cmp(&b))
    }

    /// `self += rhs`, keeping the representation of `self`.
    pub fn try_add_assign<U>(
        &mut self,
        rhs: Quantity<U>,
    ) -> Result<(), UnitError>
    where
        U: Rep + AsPrimitive<T>,
    {
        self.check_dimensions(rhs.dimensions)?;
        self.magnitude = self.magnitude + rhs.magnitude.as_();
        Ok(())
    }

    /// `self -= rhs`, keeping the representation of `self`.
    pub fn try_sub_assign<U>(
        &mut self,
        rhs: Quantity<U>,
    ) -> Result<(), UnitError>
    where
        U: Rep + AsPrimitive<T>,
    {
        self.check_dimensions(rhs.dimensions)?;
        self.magnitude = self.magnitude - rhs.magnitude.as_();
        Ok(())
    }

    /// Convert the magnitude to another representation (as with `as`).
    pub fn cast<U>(self) -> Quantity<U>
    where
        T: AsPrimitive<U>,
        U: Rep,
    {
        make_quantity(self.magnitude.as_(), self.dimensions)
    }
}

impl<T: Rep + Float> Quantity<T> {
    /// Square root. Fails if any dimension exponent is odd; a negative
    /// magnitude gives NaN.
    pub fn sqrt(self) -> Result<Self, UnitError> {
        Ok(make_quantity(
            math::sqrt(self.magnitude),
            self.dimensions.root(2)?,
        ))
    }

    pub fn nth_root(self, n: Exponent) -> Result<Self, UnitError> {
        let dimensions = self.dimensions.root(n)?;
        let magnitude = match n {
            2 => math::sqrt(self.magnitude),
            _ => match <T as NumCast>::from(n) {
                Some(n) => self.magnitude.powf(T::one() / n),
                None => T::nan(),
            },
        };
        Ok(make_quantity(magnitude, dimensions))
    }
}

/// Free-function form of [`Quantity::powi`].
pub fn pow<T: Rep>(q: Quantity<T>, n: Exponent) -> Quantity<T> {
    q.powi(n)
}

impl<T, U> Promote<Quantity<U>> for Quantity<T>
where
    T: Promote<U>,
{
    type Output = Quantity<Promoted<T, U>>;

    fn promote(self) -> Self::Output {
        make_quantity(self.magnitude.promote(), self.dimensions)
    }

    fn promote_rhs(rhs: Quantity<U>) -> Self::Output {
        make_quantity(T::promote_rhs(rhs.magnitude), rhs.dimensions)
    }
}

impl<T: Rep> Neg for Quantity<T> {
    type Output = Quantity<T>;
    fn neg(self) -> Quantity<T> {
        make_quantity(-self.magnitude, self.dimensions)
    }
}

impl<T, U> Add<Quantity<U>> for Quantity<T>
where
    T: Rep + Promote<U>,
    U: Rep,
    Promoted<T, U>: Rep,
{
    type Output = Result<Quantity<Promoted<T, U>>, UnitError>;
    fn add(self, rhs: Quantity<U>) -> Self::Output {
        self.check_dimensions(rhs.dimensions)?;
        let (a, b) = promoted(self.magnitude, rhs.magnitude);
        Ok(make_quantity(a + b, self.dimensions))
    }
}

impl<T, U> Sub<Quantity<U>> for Quantity<T>
where
    T: Rep + Promote<U>,
    U: Rep,
    Promoted<T, U>: Rep,
{
    type Output = Result<Quantity<Promoted<T, U>>, UnitError>;
    fn sub(self, rhs: Quantity<U>) -> Self::Output {
        self.check_dimensions(rhs.dimensions)?;
        let (a, b) = promoted(self.magnitude, rhs.magnitude);
        Ok(make_quantity(a - b, self.dimensions))
    }
}

impl<T, U> Mul<Quantity<U>> for Quantity<T>
where
    T: Rep + Promote<U>,
    U: Rep,
    Promoted<T, U>: Rep,
{
    type Output = Quantity<Promoted<T, U>>;
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        let (a, b) = promoted(self.magnitude, rhs.magnitude);
        make_quantity(a * b, self.dimensions + rhs.dimensions)
    }
}

/// Integer representations follow integer division: a zero divisor
/// panics, as it does for the bare integers.
impl<T, U> Div<Quantity<U>> for Quantity<T>
where
    T: Rep + Promote<U>,
    U: Rep,
    Promoted<T, U>: Rep,
{
    type Output = Quantity<Promoted<T, U>>;
    fn div(self, rhs: Quantity<U>) -> Self::Output {
        let (a, b) = promoted(self.magnitude, rhs.magnitude);
        make_quantity(a / b, self.dimensions - rhs.dimensions)
    }
}

/* Scalar operations. Each representation accepts scalars of its own
type, and float representations also take one integer type (`i64` for
`f64`, `i32` for `f32`), so that an unsuffixed literal selects exactly
one impl. The result keeps the representation of the quantity; other
mixes go through `cast` or `Quantity::dimensionless`. */
macro_rules! scalar_ops {
    ($($rep:ty => $($scalar:ty),+;)*) => {
        $($(
            impl Mul<$scalar> for Quantity<$rep> {
                type Output = Quantity<$rep>;
                fn mul(self, rhs: $scalar) -> Quantity<$rep> {
                    make_quantity(self.magnitude * rhs as $rep, self.dimensions)
                }
            }

            impl Div<$scalar> for Quantity<$rep> {
                type Output = Quantity<$rep>;
                fn div(self, rhs: $scalar) -> Quantity<$rep> {
                    make_quantity(self.magnitude / rhs as $rep, self.dimensions)
                }
            }

            impl Mul<Quantity<$rep>> for $scalar {
                type Output = Quantity<$rep>;
                fn mul(self, rhs: Quantity<$rep>) -> Quantity<$rep> {
                    make_quantity(self as $rep * rhs.magnitude, rhs.dimensions)
                }
            }

            impl Div<Quantity<$rep>> for $scalar {
                type Output = Quantity<$rep>;
                fn div(self, rhs: Quantity<$rep>) -> Quantity<$rep> {
                    make_quantity(
                        self as $rep / rhs.magnitude,
                        rhs.dimensions.inverse(),
                    )
                }
            }

            impl MulAssign<$scalar> for Quantity<$rep> {
                fn mul_assign(&mut self, rhs: $scalar) {
                    self.magnitude = self.magnitude * rhs as $rep;
                }
            }

            impl DivAssign<$scalar> for Quantity<$rep> {
                fn div_assign(&mut self, rhs: $scalar) {
                    self.magnitude = self.magnitude / rhs as $rep;
                }
            }
        )+)*
    };
}

scalar_ops! {
    f64 => f64, i64;
    f32 => f32, i32;
    i64 => i64;
    i32 => i32;
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::base_dimension::BASE_DIMENSIONS;
use super::{BaseDimension, DimensionSlot, Exponent};
use crate::error::UnitError;

const N: usize = BaseDimension::COUNT;

/// Exponent vector over the seven SI base dimensions.
///
/// Slots are always kept in [`BaseDimension`] order, and every
/// operation combines slots by position. Serialized as the plain list
/// of exponents, eg. `[1, 1, -2, 0, 0, 0, 0]` for a force.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(try_from = "Vec<Exponent>", into = "[Exponent; 7]")]
pub struct Dimensions([DimensionSlot; N]);

impl Dimensions {
    pub const DIMENSIONLESS: Dimensions = Dimensions::new([0; N]);

    pub const fn new(exponents: [Exponent; N]) -> Self {
        let mut slots = [DimensionSlot::new(BaseDimension::Length, 0); N];
        let mut i = 0;
        while i < N {
            slots[i] = DimensionSlot::new(BASE_DIMENSIONS[i], exponents[i]);
            i += 1;
        }
        Dimensions(slots)
    }

    /// The dimension of a base unit: exponent 1 for `base`, 0 elsewhere.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; N];
        exponents[base.index()] = 1;
        Dimensions::new(exponents)
    }

    pub const fn exponent(&self, base: BaseDimension) -> Exponent {
        self.0[base.index()].exponent()
    }

    pub const fn exponents(&self) -> [Exponent; N] {
        let mut exponents = [0; N];
        let mut i = 0;
        while i < N {
            exponents[i] = self.0[i].exponent();
            i += 1;
        }
        exponents
    }

    pub fn slots(&self) -> &[DimensionSlot; N] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionSlot> {
        self.0.iter()
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|slot| slot.exponent() == 0)
    }

    /// True for the dimension of exactly one base unit (eg. `m`, but
    /// not `m+2` or `m s`). Used for display only.
    pub fn is_base(&self) -> bool {
        self.0.iter().filter(|slot| slot.exponent() != 0).count() == 1
            && self.0.iter().any(|slot| slot.exponent() == 1)
    }

    /* Const versions of the operators, so that unit tables can be
    evaluated at compile time. */

    pub const fn plus(self, rhs: Self) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < N {
            slots[i] = slots[i].plus(rhs.0[i]);
            i += 1;
        }
        Dimensions(slots)
    }

    pub const fn minus(self, rhs: Self) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < N {
            slots[i] = slots[i].minus(rhs.0[i]);
            i += 1;
        }
        Dimensions(slots)
    }

    pub const fn times(self, rhs: Self) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < N {
            slots[i] = slots[i].times(rhs.0[i]);
            i += 1;
        }
        Dimensions(slots)
    }

    pub const fn scaled(self, n: Exponent) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < N {
            slots[i] = slots[i].scaled(n);
            i += 1;
        }
        Dimensions(slots)
    }

    pub const fn inverse(self) -> Self {
        self.scaled(-1)
    }

    /// Slot-wise exact division. Fails unless every slot divides
    /// evenly.
    pub fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        let mut slots = self.0;
        for (slot, divisor) in slots.iter_mut().zip(rhs.0.iter()) {
            *slot = slot.checked_div(divisor.exponent()).ok_or_else(|| {
                log::trace!("inexact dimension division: {} / {}", self, rhs);
                UnitError::NonIntegralDivision(self, rhs)
            })?;
        }
        Ok(Dimensions(slots))
    }

    /// Dimension of the `n`-th root. Fails unless `n` divides every
    /// exponent.
    pub fn root(self, n: Exponent) -> Result<Self, UnitError> {
        if n == 0 {
            return Err(UnitError::NonIntegralRoot(self, n));
        }
        let mut slots = self.0;
        for slot in slots.iter_mut() {
            *slot = slot.checked_div(n).ok_or_else(|| {
                log::debug!("cannot take root {} of {}", n, self);
                UnitError::NonIntegralRoot(self, n)
            })?;
        }
        Ok(Dimensions(slots))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::DIMENSIONLESS
    }
}

impl From<BaseDimension> for Dimensions {
    fn from(base: BaseDimension) -> Self {
        Dimensions::base(base)
    }
}

impl From<Dimensions> for [Exponent; N] {
    fn from(dims: Dimensions) -> Self {
        dims.exponents()
    }
}

impl TryFrom<Vec<Exponent>> for Dimensions {
    type Error = UnitError;
    fn try_from(exponents: Vec<Exponent>) -> Result<Self, UnitError> {
        let len = exponents.len();
        let exponents: [Exponent; N] = exponents
            .try_into()
            .map_err(|_| UnitError::InvalidDimensions(len))?;
        Ok(Dimensions::new(exponents))
    }
}

impl Add<Dimensions> for Dimensions {
    type Output = Dimensions;
    fn add(self, rhs: Dimensions) -> Dimensions {
        self.plus(rhs)
    }
}

impl Sub<Dimensions> for Dimensions {
    type Output = Dimensions;
    fn sub(self, rhs: Dimensions) -> Dimensions {
        self.minus(rhs)
    }
}

impl Mul<Dimensions> for Dimensions {
    type Output = Dimensions;
    fn mul(self, rhs: Dimensions) -> Dimensions {
        self.times(rhs)
    }
}

impl Mul<Exponent> for Dimensions {
    type Output = Dimensions;
    fn mul(self, rhs: Exponent) -> Dimensions {
        self.scaled(rhs)
    }
}

impl Neg for Dimensions {
    type Output = Dimensions;
    fn neg(self) -> Dimensions {
        self.inverse()
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Dimensions {
    fn schema_name() -> String {
        "Dimensions".to_string()
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        <[Exponent; N]>::json_schema(gen)
    }
}

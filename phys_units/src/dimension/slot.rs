/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::BaseDimension;

/// Power of a single base dimension.
pub type Exponent = i32;

/// One base dimension together with its exponent.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DimensionSlot {
    base: BaseDimension,
    exponent: Exponent,
}

impl DimensionSlot {
    pub const fn new(base: BaseDimension, exponent: Exponent) -> Self {
        DimensionSlot { base, exponent }
    }

    pub const fn base(&self) -> BaseDimension {
        self.base
    }

    pub const fn exponent(&self) -> Exponent {
        self.exponent
    }

    pub const fn symbol(&self) -> &'static str {
        self.base.symbol()
    }

    /// Same base, exponent 0.
    pub const fn zero(self) -> Self {
        DimensionSlot::new(self.base, 0)
    }

    pub const fn inverse(self) -> Self {
        DimensionSlot::new(self.base, -self.exponent)
    }

    /* The slot-wise operations keep the left-hand base; callers only
    combine slots at matching positions. */

    pub const fn plus(self, rhs: Self) -> Self {
        DimensionSlot::new(self.base, self.exponent + rhs.exponent)
    }

    pub const fn minus(self, rhs: Self) -> Self {
        DimensionSlot::new(self.base, self.exponent - rhs.exponent)
    }

    pub const fn times(self, rhs: Self) -> Self {
        DimensionSlot::new(self.base, self.exponent * rhs.exponent)
    }

    pub const fn scaled(self, n: Exponent) -> Self {
        DimensionSlot::new(self.base, self.exponent * n)
    }

    /// Exact division of the exponent. A zero divisor only divides a
    /// zero exponent; an overflowing quotient (`i32::MIN / -1`) is
    /// rejected.
    pub const fn checked_div(self, divisor: Exponent) -> Option<Self> {
        if divisor == 0 {
            return match self.exponent {
                0 => Some(self),
                _ => None,
            };
        }
        match self.exponent.checked_rem(divisor) {
            Some(0) => match self.exponent.checked_div(divisor) {
                Some(exponent) => Some(DimensionSlot::new(self.base, exponent)),
                None => None,
            },
            _ => None,
        }
    }
}

impl Add<DimensionSlot> for DimensionSlot {
    type Output = DimensionSlot;
    fn add(self, rhs: DimensionSlot) -> DimensionSlot {
        self.plus(rhs)
    }
}

impl Sub<DimensionSlot> for DimensionSlot {
    type Output = DimensionSlot;
    fn sub(self, rhs: DimensionSlot) -> DimensionSlot {
        self.minus(rhs)
    }
}

impl Mul<DimensionSlot> for DimensionSlot {
    type Output = DimensionSlot;
    fn mul(self, rhs: DimensionSlot) -> DimensionSlot {
        self.times(rhs)
    }
}

impl Mul<Exponent> for DimensionSlot {
    type Output = DimensionSlot;
    fn mul(self, rhs: Exponent) -> DimensionSlot {
        self.scaled(rhs)
    }
}

impl Neg for DimensionSlot {
    type Output = DimensionSlot;
    fn neg(self) -> DimensionSlot {
        self.inverse()
    }
}

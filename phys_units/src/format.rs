/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use super::dimension::{DimensionSlot, Dimensions, Exponent};
use super::error::UnitError;
use super::prefix::{Prefix, SiPrefix};
use super::quantity::Quantity;
use super::vector::Vector;

/// Symbol for one base dimension raised to `exp`: the label, then `+`
/// for positive exponents other than one, then the exponent unless it
/// is one. Empty for a zero exponent.
pub fn emit_dim(label: &str, exp: Exponent) -> String {
    match exp {
        0 => String::new(),
        1 => label.to_string(),
        e if e > 1 => format!("{}+{}", label, e),
        e => format!("{}{}", label, e),
    }
}

/// Unit symbol of a dimension vector, eg. `m kg s-2`. Empty for
/// dimensionless values.
pub fn to_unit_symbol(dimensions: &Dimensions) -> String {
    dimensions
        .iter()
        .filter(|slot| slot.exponent() != 0)
        .map(|slot| emit_dim(slot.symbol(), slot.exponent()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn to_magnitude<T: Display>(q: &Quantity<T>) -> String {
    q.magnitude_ref().to_string()
}

/// Multiplier for an SI prefix symbol. Both `µ` and `u` are accepted
/// for micro.
pub fn prefix(symbol: &str) -> Result<f64, UnitError> {
    Ok(SiPrefix::from_symbol(symbol)?.multiplier())
}

impl Display for DimensionSlot {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", emit_dim(self.symbol(), self.exponent()))
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.is_all_zero() {
            true => write!(f, "dimensionless"),
            false => write!(f, "{}", to_unit_symbol(self)),
        }
    }
}

impl<T: Display> Display for Quantity<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        self.magnitude_ref().fmt(f)?;
        if !self.is_dimensionless() {
            write!(f, " {}", to_unit_symbol(&self.dimensions()))?;
        }
        Ok(())
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            x.fmt(f)?;
        }
        write!(f, ")")
    }
}

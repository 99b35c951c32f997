/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::error::UnitError;

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i32;
    fn symbol(&self) -> &'static str;

    /// Alternative spelling accepted by [`Prefix::from_symbol`].
    fn alias(&self) -> Option<&'static str> {
        None
    }

    fn multiplier(&self) -> f64 {
        (Self::BASE as f64).powi(self.power())
    }

    /// Look up a prefix by its symbol. The empty string is not a prefix.
    fn from_symbol(symbol: &str) -> Result<Self, UnitError> {
        Self::SCALE
            .iter()
            .copied()
            .filter(|p| !p.symbol().is_empty())
            .find(|p| p.symbol() == symbol || p.alias() == Some(symbol))
            .ok_or_else(|| UnitError::UnrecognizedPrefix(symbol.to_string()))
    }
}

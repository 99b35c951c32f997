/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod literals;
pub mod other;
pub mod si;

pub use literals::QuantityLiterals;
pub use si::*;

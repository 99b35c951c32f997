/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_dimension;
pub mod dimensions;
pub mod slot;

pub use base_dimension::BaseDimension;
pub use dimensions::Dimensions;
pub use slot::{DimensionSlot, Exponent};

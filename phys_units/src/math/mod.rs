/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Power and root helpers for plain numbers and quantities.

mod pow;
mod sqrt;

pub use pow::{cube, powi, square};
pub use sqrt::sqrt;

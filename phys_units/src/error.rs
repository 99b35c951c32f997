/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimensions;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Incompatible dimensions: {0} <-> {1}")]
    DimensionMismatch(Dimensions, Dimensions),
    #[error("Non-integral root: {0} ^ (1/{1})")]
    NonIntegralRoot(Dimensions, i32),
    #[error("Non-integral dimension division: {0} / {1}")]
    NonIntegralDivision(Dimensions, Dimensions),
    #[error("unrecognized prefix '{0}'")]
    UnrecognizedPrefix(String),
    #[error("invalid dimension vector: expected 7 exponents, got {0}")]
    InvalidDimensions(usize),
}

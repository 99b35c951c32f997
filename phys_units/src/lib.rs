/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Dimensional analysis on quantities carrying a magnitude and an
//! exponent vector over the seven SI base dimensions.
//!
//! ```
//! use phys_units::units::{METER, SECOND};
//! use phys_units::QuantityLiterals;
//!
//! let speed = 100.0.m() / 9.58.s();
//! assert_eq!(speed.dimensions(), (METER / SECOND).dimensions());
//! assert_eq!((3.km() + 200.0.m()).unwrap().magnitude(), 3200.0);
//! ```

pub mod dimension;
pub mod error;
pub mod format;
pub mod math;
pub mod prefix;
pub mod quantity;
pub mod rep;
pub mod units;
pub mod vector;

pub use dimension::{BaseDimension, DimensionSlot, Dimensions, Exponent};
pub use error::UnitError;
pub use prefix::{BinPrefix, Prefix, SiPrefix};
pub use quantity::{make_quantity, pow, Quantity};
pub use rep::{Promote, Promoted, Rep};
pub use units::QuantityLiterals;
pub use vector::operation::{BinaryOp, UnaryOp};
pub use vector::{accumulate, concat, shrink, Vector};

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;

pub mod bin_prefix;
pub mod si_prefix;

pub use prefix_trait::Prefix;

pub use bin_prefix::{BinPrefix, EXBI, GIBI, KIBI, MEBI, PEBI, TEBI, YOBI, ZEBI};
pub use si_prefix::{
    SiPrefix, ATTO, CENTI, DECA, DECI, DEKA, EXA, FEMTO, GIGA, HECTO, KILO,
    MEGA, MICRO, MILLI, NANO, PETA, PICO, TERA, YOCTO, YOTTA, ZEPTO, ZETTA,
};

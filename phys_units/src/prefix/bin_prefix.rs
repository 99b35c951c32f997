/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const KIBI: f64 = 1024.0;
pub const MEBI: f64 = 1024.0 * KIBI;
pub const GIBI: f64 = 1024.0 * MEBI;
pub const TEBI: f64 = 1024.0 * GIBI;
pub const PEBI: f64 = 1024.0 * TEBI;
pub const EXBI: f64 = 1024.0 * PEBI;
pub const ZEBI: f64 = 1024.0 * EXBI;
pub const YOBI: f64 = 1024.0 * ZEBI;

/// Binary (base 1024) prefixes
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BinPrefix {
    Unit,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix for BinPrefix {
    const BASE: u64 = 1024;
    const SCALE: &'static [Self] = &[
        Self::Unit,
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
        Self::Exbi,
        Self::Zebi,
        Self::Yobi,
    ];

    fn power(&self) -> i32 {
        match self {
            BinPrefix::Unit => 0,
            BinPrefix::Kibi => 1,
            BinPrefix::Mebi => 2,
            BinPrefix::Gibi => 3,
            BinPrefix::Tebi => 4,
            BinPrefix::Pebi => 5,
            BinPrefix::Exbi => 6,
            BinPrefix::Zebi => 7,
            BinPrefix::Yobi => 8,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            BinPrefix::Unit => "",
            BinPrefix::Kibi => "Ki",
            BinPrefix::Mebi => "Mi",
            BinPrefix::Gibi => "Gi",
            BinPrefix::Tebi => "Ti",
            BinPrefix::Pebi => "Pi",
            BinPrefix::Exbi => "Ei",
            BinPrefix::Zebi => "Zi",
            BinPrefix::Yobi => "Yi",
        }
    }
}

impl Display for BinPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! SI base units, derived units and units approved for use with SI
//! (NIST SP 811).

use crate::dimension::{BaseDimension, Dimensions};
use crate::prefix::DEKA;
use crate::quantity::{make_quantity, Quantity};

/* Base units. */

pub const METER: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Length));
pub const KILOGRAM: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Mass));
pub const SECOND: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Time));
pub const AMPERE: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Current));
pub const KELVIN: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Temperature));
pub const MOLE: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::Amount));
pub const CANDELA: Quantity =
    make_quantity(1.0, Dimensions::base(BaseDimension::LuminousIntensity));

/* Handy values. */

pub const PI: f64 = std::f64::consts::PI;
pub const PERCENT: f64 = 1.0 / 100.0;

pub(crate) const ONE: Quantity = Quantity::dimensionless(1.0);
pub(crate) const SQUARE_METER: Quantity = METER.times(METER);
pub(crate) const CUBIC_METER: Quantity = SQUARE_METER.times(METER);
pub(crate) const SQUARE_SECOND: Quantity = SECOND.times(SECOND);

/// Not approved for use alone, but needed with prefixes.
pub const GRAM: Quantity = KILOGRAM.scale(1e-3);

/* Derived units. */

pub const RADIAN: f64 = 1.0;
pub const STERADIAN: f64 = 1.0;
pub const NEWTON: Quantity = METER.times(KILOGRAM).per(SQUARE_SECOND);
pub const PASCAL: Quantity = NEWTON.per(SQUARE_METER);
pub const JOULE: Quantity = NEWTON.times(METER);
pub const WATT: Quantity = JOULE.per(SECOND);
pub const COULOMB: Quantity = SECOND.times(AMPERE);
pub const VOLT: Quantity = WATT.per(AMPERE);
pub const FARAD: Quantity = COULOMB.per(VOLT);
pub const OHM: Quantity = VOLT.per(AMPERE);
pub const SIEMENS: Quantity = AMPERE.per(VOLT);
pub const WEBER: Quantity = VOLT.times(SECOND);
pub const TESLA: Quantity = WEBER.per(SQUARE_METER);
pub const HENRY: Quantity = WEBER.per(AMPERE);
pub const DEGREE_CELSIUS: Quantity = KELVIN;
pub const LUMEN: Quantity = CANDELA.scale(STERADIAN);
pub const LUX: Quantity = LUMEN.per(METER).per(METER);
pub const BECQUEREL: Quantity = ONE.per(SECOND);
pub const GRAY: Quantity = JOULE.per(KILOGRAM);
pub const SIEVERT: Quantity = JOULE.per(KILOGRAM);
pub const HERTZ: Quantity = ONE.per(SECOND);

/* Approved for use with SI (but generally discouraged). */

pub const ANGSTROM: Quantity = METER.scale(1e-10);
pub const ARE: Quantity = SQUARE_METER.scale(1e2);
pub const BAR: Quantity = PASCAL.scale(1e5);
pub const BARN: Quantity = SQUARE_METER.scale(1e-28);
pub const CURIE: Quantity = BECQUEREL.scale(3.7e10);
pub const DAY: Quantity = SECOND.scale(86400.0);
pub const DEGREE_ANGLE: f64 = PI / 180.0;
pub const GAL: Quantity = METER.per(SQUARE_SECOND).scale(1e-2);
pub const HECTARE: Quantity = SQUARE_METER.scale(1e4);
pub const HOUR: Quantity = SECOND.scale(3600.0);
pub const KNOT: Quantity = METER.per(SECOND).scale(1852.0 / 3600.0);
pub const LITER: Quantity = CUBIC_METER.scale(1e-3);
pub const MINUTE: Quantity = SECOND.scale(60.0);
pub const MINUTE_ANGLE: f64 = PI / 10800.0;
pub const MILE_NAUTICAL: Quantity = METER.scale(1852.0);
pub const RAD: Quantity = GRAY.scale(1e-2);
pub const REM: Quantity = SIEVERT.scale(1e-2);
pub const ROENTGEN: Quantity = COULOMB.per(KILOGRAM).scale(2.58e-4);
pub const SECOND_ANGLE: f64 = PI / 648000.0;
pub const TON_METRIC: Quantity = KILOGRAM.scale(1e3);

/* Alternate (non-US) spellings. */

pub const METRE: Quantity = METER;
pub const LITRE: Quantity = LITER;
pub const DECA: f64 = DEKA;
pub const TONNE: Quantity = TON_METRIC;

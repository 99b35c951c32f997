/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Units not approved for use with SI, expressed in SI units (NIST SP
//! 811, appendix B).

use super::si::{
    AMPERE, CANDELA, COULOMB, CUBIC_METER, DAY, DEGREE_ANGLE, FARAD, HENRY,
    JOULE, KELVIN, KILOGRAM, LUX, METER, NEWTON, OHM, ONE, PASCAL, PI,
    SECOND, SIEMENS, SQUARE_METER, TESLA, VOLT, WATT, WEBER,
};
use crate::prefix::MICRO;
use crate::quantity::Quantity;

pub const ABAMPERE: Quantity = AMPERE.scale(1e+1);
pub const ABCOULOMB: Quantity = COULOMB.scale(1e+1);
pub const ABFARAD: Quantity = FARAD.scale(1e+9);
pub const ABHENRY: Quantity = HENRY.scale(1e-9);
pub const ABMHO: Quantity = SIEMENS.scale(1e+9);
pub const ABOHM: Quantity = OHM.scale(1e-9);
pub const ABVOLT: Quantity = VOLT.scale(1e-8);
pub const ACRE: Quantity = SQUARE_METER.scale(4.046873e+3);
pub const ACRE_FOOT: Quantity = CUBIC_METER.scale(1.233489e+3);
pub const ASTRONOMICAL_UNIT: Quantity = METER.scale(1.495979e+11);
pub const ATMOSPHERE_STD: Quantity = PASCAL.scale(1.01325e+5);
pub const ATMOSPHERE_TECH: Quantity = PASCAL.scale(9.80665e+4);

pub const BARREL: Quantity = CUBIC_METER.scale(1.589873e-1);
pub const BIOT: Quantity = AMPERE.scale(1e+1);
pub const BTU: Quantity = JOULE.scale(1.05587e+3);
pub const BTU_IT: Quantity = JOULE.scale(1.055056e+3);
pub const BTU_TH: Quantity = JOULE.scale(1.054350e+3);
pub const BTU_39F: Quantity = JOULE.scale(1.05967e+3);
pub const BTU_59F: Quantity = JOULE.scale(1.05480e+3);
pub const BTU_60F: Quantity = JOULE.scale(1.05468e+3);
pub const BUSHEL: Quantity = CUBIC_METER.scale(3.523907e-2);

pub const CALORIE: Quantity = JOULE.scale(4.19002);
pub const CALORIE_IT: Quantity = JOULE.scale(4.1868);
pub const CALORIE_TH: Quantity = JOULE.scale(4.184);
pub const CALORIE_15C: Quantity = JOULE.scale(4.18580);
pub const CALORIE_20C: Quantity = JOULE.scale(4.18190);
pub const CARAT_METRIC: Quantity = KILOGRAM.scale(2e-4);
pub const CHAIN: Quantity = METER.scale(2.011684e+1);
pub const CLO: Quantity = SQUARE_METER.scale(1.55e-1).times(KELVIN).per(WATT);
pub const CM_MERCURY: Quantity = PASCAL.scale(1.333224e+3);
pub const CORD: Quantity = CUBIC_METER.scale(3.624556);
pub const CUP: Quantity = CUBIC_METER.scale(2.365882e-4);

pub const DARCY: Quantity = SQUARE_METER.scale(9.869233e-13);
pub const DAY_SIDEREAL: Quantity = SECOND.scale(8.616409e+4);
pub const DEBYE: Quantity = COULOMB.scale(3.335641e-30).times(METER);
pub const DEGREE_FAHRENHEIT: Quantity = KELVIN.scale(5.555556e-1);
pub const DEGREE_RANKINE: Quantity = KELVIN.scale(5.555556e-1);
pub const DENIER: Quantity = KILOGRAM.scale(1.111111e-7).per(METER);
pub const DYNE: Quantity = NEWTON.scale(1e-5);

pub const ERG: Quantity = JOULE.scale(1e-7);

pub const FARADAY: Quantity = COULOMB.scale(9.648531e+4);
pub const FATHOM: Quantity = METER.scale(1.828804);
pub const FERMI: Quantity = METER.scale(1e-15);
pub const FOOT: Quantity = METER.scale(3.048e-1);
pub const FOOT_POUND_FORCE: Quantity = JOULE.scale(1.355818);
pub const FOOT_POUNDAL: Quantity = JOULE.scale(4.214011e-2);
pub const FOOT_US_SURVEY: Quantity = METER.scale(3.048006e-1);
pub const FOOTCANDLE: Quantity = LUX.scale(1.076391e+1);
pub const FOOTLAMBERT: Quantity = CANDELA.scale(3.426259).per(SQUARE_METER);
pub const FORTNIGHT: Quantity = DAY.scale(14.0);
pub const FRANKLIN: Quantity = COULOMB.scale(3.335641e-10);
pub const FURLONG: Quantity = METER.scale(2.01168e+2);

pub const GALLON_IMPERIAL: Quantity = CUBIC_METER.scale(4.54609e-3);
pub const GALLON_US: Quantity = CUBIC_METER.scale(3.785412e-3);
pub const GAMMA: Quantity = TESLA.scale(1e-9);
pub const GAMMA_MASS: Quantity = KILOGRAM.scale(1e-9);
pub const GAUSS: Quantity = TESLA.scale(1e-4);
pub const GILBERT: Quantity = AMPERE.scale(7.957747e-1);
pub const GILL_IMPERIAL: Quantity = CUBIC_METER.scale(1.420653e-4);
pub const GILL_US: Quantity = CUBIC_METER.scale(1.182941e-4);
pub const GON: f64 = 9e-1 * DEGREE_ANGLE;
pub const GRAIN: Quantity = KILOGRAM.scale(6.479891e-5);

pub const HORSEPOWER: Quantity = WATT.scale(7.456999e+2);
pub const HORSEPOWER_BOILER: Quantity = WATT.scale(9.80950e+3);
pub const HORSEPOWER_ELECTRIC: Quantity = WATT.scale(7.46e+2);
pub const HORSEPOWER_METRIC: Quantity = WATT.scale(7.354988e+2);
pub const HORSEPOWER_UK: Quantity = WATT.scale(7.4570e+2);
pub const HORSEPOWER_WATER: Quantity = WATT.scale(7.46043e+2);
pub const HOUR_SIDEREAL: Quantity = SECOND.scale(3.590170e+3);
pub const HUNDREDWEIGHT_LONG: Quantity = KILOGRAM.scale(5.080235e+1);
pub const HUNDREDWEIGHT_SHORT: Quantity = KILOGRAM.scale(4.535924e+1);

pub const INCH: Quantity = METER.scale(2.54e-2);
pub const INCHES_MERCURY: Quantity = PASCAL.scale(3.386389e+3);

pub const KAYSER: Quantity = ONE.scale(1e+2).per(METER);
pub const KILOGRAM_FORCE: Quantity = NEWTON.scale(9.80665);
pub const KILOPOND: Quantity = NEWTON.scale(9.80665);
pub const KIP: Quantity = NEWTON.scale(4.448222e+3);

pub const LAMBDA_VOLUME: Quantity = CUBIC_METER.scale(1e-9);
pub const LAMBERT: Quantity = CANDELA.scale(3.183099e+3).per(SQUARE_METER);
pub const LANGLEY: Quantity = JOULE.scale(4.184e+4).per(SQUARE_METER);
pub const LIGHT_YEAR: Quantity = METER.scale(9.46073e+15);

pub const MAXWELL: Quantity = WEBER.scale(1e-8);
pub const MHO: Quantity = SIEMENS;
pub const MICRON: Quantity = METER.scale(MICRO);
pub const MIL: Quantity = METER.scale(2.54e-5);
pub const MIL_ANGLE: f64 = 5.625e-2 * DEGREE_ANGLE;
pub const MIL_CIRCULAR: Quantity = SQUARE_METER.scale(5.067075e-10);
pub const MILE: Quantity = METER.scale(1.609344e+3);
pub const MILE_US_SURVEY: Quantity = METER.scale(1.609347e+3);
pub const MINUTE_SIDEREAL: Quantity = SECOND.scale(5.983617e+1);

pub const OERSTED: Quantity = AMPERE.scale(7.957747e+1).per(METER);
pub const OUNCE_AVDP: Quantity = KILOGRAM.scale(2.834952e-2);
pub const OUNCE_FLUID_IMPERIAL: Quantity = CUBIC_METER.scale(2.841306e-5);
pub const OUNCE_FLUID_US: Quantity = CUBIC_METER.scale(2.957353e-5);
pub const OUNCE_FORCE: Quantity = NEWTON.scale(2.780139e-1);
pub const OUNCE_TROY: Quantity = KILOGRAM.scale(3.110348e-2);

pub const PARSEC: Quantity = METER.scale(3.085678e+16);
pub const PECK: Quantity = CUBIC_METER.scale(8.809768e-3);
pub const PENNYWEIGHT: Quantity = KILOGRAM.scale(1.555174e-3);
pub const PERM_0C: Quantity =
    KILOGRAM.scale(5.72135e-11).per(PASCAL).per(SECOND).per(SQUARE_METER);
pub const PERM_23C: Quantity =
    KILOGRAM.scale(5.74525e-11).per(PASCAL).per(SECOND).per(SQUARE_METER);
pub const PHOT: Quantity = LUX.scale(1e+4);
pub const PICA_COMPUTER: Quantity = METER.scale(4.233333e-3);
pub const PICA_PRINTERS: Quantity = METER.scale(4.217518e-3);
pub const PINT_DRY: Quantity = CUBIC_METER.scale(5.506105e-4);
pub const PINT_LIQUID: Quantity = CUBIC_METER.scale(4.731765e-4);
pub const POINT_COMPUTER: Quantity = METER.scale(3.527778e-4);
pub const POINT_PRINTERS: Quantity = METER.scale(3.514598e-4);
pub const POISE: Quantity = PASCAL.scale(1e-1).times(SECOND);
pub const POUND_AVDP: Quantity = KILOGRAM.scale(4.5359237e-1);
pub const POUND_FORCE: Quantity = NEWTON.scale(4.448222);
pub const POUND_TROY: Quantity = KILOGRAM.scale(3.732417e-1);
pub const POUNDAL: Quantity = NEWTON.scale(1.382550e-1);
pub const PSI: Quantity = PASCAL.scale(6.894757e+3);

pub const QUAD: Quantity = BTU_IT.scale(1e+15);
pub const QUART_DRY: Quantity = CUBIC_METER.scale(1.101221e-3);
pub const QUART_LIQUID: Quantity = CUBIC_METER.scale(9.463529e-4);

pub const REVOLUTION: f64 = 2.0 * PI;
pub const RHE: Quantity = ONE.scale(1e+1).per(PASCAL).per(SECOND);
pub const ROD: Quantity = METER.scale(5.029210);
pub const RPM: Quantity = ONE.scale(1.047198e-1).per(SECOND);

pub const SECOND_SIDEREAL: Quantity = SECOND.scale(9.972696e-1);
pub const SHAKE: Quantity = SECOND.scale(1e-8);
pub const SLUG: Quantity = KILOGRAM.scale(1.459390e+1);
pub const STATAMPERE: Quantity = AMPERE.scale(3.335641e-10);
pub const STATCOULOMB: Quantity = COULOMB.scale(3.335641e-10);
pub const STATFARAD: Quantity = FARAD.scale(1.112650e-12);
pub const STATHENRY: Quantity = HENRY.scale(8.987552e+11);
pub const STATMHO: Quantity = SIEMENS.scale(1.112650e-12);
pub const STATOHM: Quantity = OHM.scale(8.987552e+11);
pub const STATVOLT: Quantity = VOLT.scale(2.997925e+2);
pub const STERE: Quantity = CUBIC_METER;
pub const STILB: Quantity = CANDELA.scale(1e+4).per(SQUARE_METER);
pub const STOKES: Quantity = SQUARE_METER.scale(1e-4).per(SECOND);

pub const TABLESPOON: Quantity = CUBIC_METER.scale(1.478676e-5);
pub const TEASPOON: Quantity = CUBIC_METER.scale(4.928922e-6);
pub const TEX: Quantity = KILOGRAM.scale(1e-6).per(METER);
pub const THERM_EC: Quantity = JOULE.scale(1.05506e+8);
pub const THERM_US: Quantity = JOULE.scale(1.054804e+8);
pub const TON_ASSAY: Quantity = KILOGRAM.scale(2.916667e-2);
pub const TON_FORCE: Quantity = NEWTON.scale(8.896443e+3);
pub const TON_LONG: Quantity = KILOGRAM.scale(1.016047e+3);
pub const TON_REFRIGERATION: Quantity = WATT.scale(3.516853e+3);
pub const TON_REGISTER: Quantity = CUBIC_METER.scale(2.831685);
pub const TON_SHORT: Quantity = KILOGRAM.scale(9.071847e+2);
pub const TON_TNT: Quantity = JOULE.scale(4.184e+9);
pub const TORR: Quantity = PASCAL.scale(1.333224e+2);

pub const UNIT_POLE: Quantity = WEBER.scale(1.256637e-7);

pub const WEEK: Quantity = SECOND.scale(604800.0);

pub const X_UNIT: Quantity = METER.scale(1.002e-13);

pub const YARD: Quantity = METER.scale(9.144e-1);
pub const YEAR_SIDEREAL: Quantity = SECOND.scale(3.155815e+7);
pub const YEAR_STD: Quantity = SECOND.scale(3.1536e+7);
pub const YEAR_TROPICAL: Quantity = SECOND.scale(3.155693e+7);

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use num_traits::AsPrimitive;

use super::si::{AMPERE, CANDELA, KELVIN, KILOGRAM, METER, MOLE, SECOND};
use crate::prefix::{
    ATTO, CENTI, DECI, DEKA, EXA, FEMTO, GIGA, HECTO, KILO, MEGA, MICRO, MILLI,
    NANO, PETA, PICO, TERA, YOCTO, YOTTA, ZEPTO, ZETTA,
};
use crate::quantity::{make_quantity, Quantity};

macro_rules! literals {
    ($($unit:expr, $scale:expr => [$($method:ident: $prefix:expr),* $(,)?];)*) => {
        /// Prefixed base-unit constructors on plain numbers, eg.
        /// `3.km()` or `2.5.mg()`. The prefix `u` stands for micro.
        #[allow(non_snake_case)]
        pub trait QuantityLiterals: AsPrimitive<f64> {
            $($(
                fn $method(self) -> Quantity {
                    make_quantity(
                        $scale * $prefix * self.as_(),
                        $unit.dimensions(),
                    )
                }
            )*)*
        }
    };
}

literals! {
    KILOGRAM, 1e-3 => [
        Yg: YOTTA, Zg: ZETTA, Eg: EXA, Pg: PETA, Tg: TERA, Gg: GIGA, Mg: MEGA,
        kg: KILO, hg: HECTO, dag: DEKA, g: 1.0, dg: DECI, cg: CENTI, mg: MILLI,
        ug: MICRO, ng: NANO, pg: PICO, fg: FEMTO, ag: ATTO, zg: ZEPTO,
        yg: YOCTO,
    ];
    METER, 1.0 => [
        Ym: YOTTA, Zm: ZETTA, Em: EXA, Pm: PETA, Tm: TERA, Gm: GIGA, Mm: MEGA,
        km: KILO, hm: HECTO, dam: DEKA, m: 1.0, dm: DECI, cm: CENTI, mm: MILLI,
        um: MICRO, nm: NANO, pm: PICO, fm: FEMTO, am: ATTO, zm: ZEPTO,
        ym: YOCTO,
    ];
    SECOND, 1.0 => [
        Ys: YOTTA, Zs: ZETTA, Es: EXA, Ps: PETA, Ts: TERA, Gs: GIGA, Ms: MEGA,
        ks: KILO, hs: HECTO, das: DEKA, s: 1.0, ds: DECI, cs: CENTI, ms: MILLI,
        us: MICRO, ns: NANO, ps: PICO, fs: FEMTO, r#as: ATTO, zs: ZEPTO,
        ys: YOCTO,
    ];
    AMPERE, 1.0 => [
        YA: YOTTA, ZA: ZETTA, EA: EXA, PA: PETA, TA: TERA, GA: GIGA, MA: MEGA,
        kA: KILO, hA: HECTO, daA: DEKA, A: 1.0, dA: DECI, cA: CENTI, mA: MILLI,
        uA: MICRO, nA: NANO, pA: PICO, fA: FEMTO, aA: ATTO, zA: ZEPTO,
        yA: YOCTO,
    ];
    KELVIN, 1.0 => [
        YK: YOTTA, ZK: ZETTA, EK: EXA, PK: PETA, TK: TERA, GK: GIGA, MK: MEGA,
        kK: KILO, hK: HECTO, daK: DEKA, K: 1.0, dK: DECI, cK: CENTI, mK: MILLI,
        uK: MICRO, nK: NANO, pK: PICO, fK: FEMTO, aK: ATTO, zK: ZEPTO,
        yK: YOCTO,
    ];
    MOLE, 1.0 => [
        Ymol: YOTTA, Zmol: ZETTA, Emol: EXA, Pmol: PETA, Tmol: TERA, Gmol: GIGA,
        Mmol: MEGA, kmol: KILO, hmol: HECTO, damol: DEKA, mol: 1.0, dmol: DECI,
        cmol: CENTI, mmol: MILLI, umol: MICRO, nmol: NANO, pmol: PICO,
        fmol: FEMTO, amol: ATTO, zmol: ZEPTO, ymol: YOCTO,
    ];
    CANDELA, 1.0 => [
        Ycd: YOTTA, Zcd: ZETTA, Ecd: EXA, Pcd: PETA, Tcd: TERA, Gcd: GIGA,
        Mcd: MEGA, kcd: KILO, hcd: HECTO, dacd: DEKA, cd: 1.0, dcd: DECI,
        ccd: CENTI, mcd: MILLI, ucd: MICRO, ncd: NANO, pcd: PICO, fcd: FEMTO,
        acd: ATTO, zcd: ZEPTO, ycd: YOCTO,
    ];
}

impl QuantityLiterals for f64 {}
impl QuantityLiterals for i64 {}

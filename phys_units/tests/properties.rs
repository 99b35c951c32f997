/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use phys_units::units::KILOGRAM;
use phys_units::{
    make_quantity, math, Dimensions, Quantity, QuantityLiterals, Vector,
};
use proptest::prelude::*;

fn dimensions() -> impl Strategy<Value = Dimensions> {
    prop::array::uniform7(-4i32..=4).prop_map(Dimensions::new)
}

fn quantity() -> impl Strategy<Value = Quantity> {
    (1e-3..1e3f64, dimensions()).prop_map(|(m, d)| make_quantity(m, d))
}

proptest! {
    #[test]
    fn prop_to_self_is_one(q in quantity()) {
        let r = q.to(q).unwrap();
        prop_assert!((r.magnitude() - 1.0).abs() < 1e-12);
        prop_assert!((q / q).dimensions().is_all_zero());
    }

    #[test]
    fn prop_add_sub_roundtrip(
        a in 1e-3..1e3f64,
        b in 1e-3..1e3f64,
        d in dimensions(),
    ) {
        let qa = make_quantity(a, d);
        let qb = make_quantity(b, d);
        let r = ((qa + qb).unwrap() - qb).unwrap();
        prop_assert!((r.magnitude() - a).abs() < 1e-9 * a.max(1.0));
        prop_assert_eq!(r.dimensions(), d);
    }

    #[test]
    fn prop_mul_div_dimensions(a in quantity(), b in quantity()) {
        prop_assert_eq!((a * b).dimensions(), a.dimensions() + b.dimensions());
        prop_assert_eq!((a / b).dimensions(), a.dimensions() - b.dimensions());
    }

    #[test]
    fn prop_mismatch_rejected(a in quantity(), b in quantity()) {
        prop_assume!(a.dimensions() != b.dimensions());
        prop_assert!((a + b).is_err());
        prop_assert!((a - b).is_err());
        prop_assert!(a.to(b).is_err());
    }

    #[test]
    fn prop_square_cube(q in quantity()) {
        prop_assert_eq!(math::square(q), q * q);
        prop_assert_eq!(math::cube(q), q * q * q);
        prop_assert_eq!(q.square(), q * q);
        prop_assert_eq!(q.cube(), q * q * q);
    }

    #[test]
    fn prop_sqrt_of_square(q in quantity()) {
        let r = (q * q).sqrt().unwrap();
        prop_assert_eq!(r.dimensions(), q.dimensions());
        let rel = (r.magnitude() - q.magnitude()).abs() / q.magnitude();
        prop_assert!(rel < 1e-14);
    }

    #[test]
    fn prop_root_of_power(d in dimensions(), n in 1i32..5) {
        prop_assert_eq!(d.scaled(n).root(n), Ok(d));
        let divisor = Dimensions::new([n; 7]);
        prop_assert_eq!(d.scaled(n).checked_div(divisor), Ok(d));
    }

    #[test]
    fn prop_grams_to_kilograms(x in 0.0..1e6f64) {
        let kg = x.g().to(KILOGRAM).unwrap().magnitude();
        prop_assert!((kg - x / 1000.0).abs() <= 1e-12 * x.max(1.0));
    }

    #[test]
    fn prop_concat(a in prop::array::uniform4(any::<i32>()),
                   b in prop::array::uniform3(any::<i32>())) {
        let (a, b) = (Vector::new(a), Vector::new(b));
        let c: Vector<i32, 7> = a.concat(b);
        prop_assert_eq!(c.len(), 7);
        for i in 0..4 {
            prop_assert_eq!(c[i], a[i]);
        }
        for i in 4..7 {
            prop_assert_eq!(c[i], b[i - 4]);
        }
    }

    #[test]
    fn prop_shrink(v in prop::array::uniform6(any::<i64>())) {
        let v = Vector::new(v);
        let s: Vector<i64, 4> = v.shrink();
        for i in 0..4 {
            prop_assert_eq!(s[i], v[i]);
        }
    }
}

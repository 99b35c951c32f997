/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use approx::assert_relative_eq;
use phys_units::units::{KILOGRAM, METER, NEWTON, SECOND};
use phys_units::{
    make_quantity, math, pow, BaseDimension, Dimensions, Quantity,
    QuantityLiterals, UnitError,
};

fn length() -> Dimensions {
    Dimensions::base(BaseDimension::Length)
}

#[test]
fn base_unit() {
    assert_eq!(METER.magnitude(), 1.0);
    assert_eq!(METER.dimensions().exponents(), [1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(NEWTON.magnitude(), 1.0);
    assert_eq!(NEWTON.dimensions().exponents(), [1, 1, -2, 0, 0, 0, 0]);
    assert_eq!(
        NEWTON,
        METER * KILOGRAM / math::square(SECOND),
    );
}

#[test]
fn add_and_subtract() {
    let a = 3.0 * METER;
    let b = 2.0 * METER;
    assert_eq!((a + b).unwrap(), 5.0 * METER);
    assert_eq!((a - b).unwrap(), METER);
    assert_eq!(
        a + SECOND,
        Err(UnitError::DimensionMismatch(length(), SECOND.dimensions()))
    );
    assert!((a - KILOGRAM).is_err());
}

#[test]
fn multiply_and_divide() {
    let area = (3.0 * METER) * (2.0 * METER);
    assert_eq!(area.magnitude(), 6.0);
    assert_eq!(area.dimensions(), length() * 2);
    let speed = (10.0 * METER) / (4.0 * SECOND);
    assert_eq!(speed.magnitude(), 2.5);
    assert_eq!(speed.dimensions().exponents(), [1, 0, -1, 0, 0, 0, 0]);
    assert!((METER / METER).is_dimensionless());
}

#[test]
fn scalars() {
    let q = 4.0 * METER;
    assert_eq!((q * 2.0).magnitude(), 8.0);
    assert_eq!((q / 2.0).magnitude(), 2.0);
    assert_eq!((q * 2.0).dimensions(), length());
    let inv = 2.0 / q;
    assert_eq!(inv.magnitude(), 0.5);
    assert_eq!(inv.dimensions(), -length());

    let mut m = 3.0 * SECOND;
    m *= 4.0;
    m /= 2;
    assert_eq!(m, 6.0 * SECOND);
}

#[test]
fn unsuffixed_literals() {
    let speed = 299792458 * METER / SECOND;
    let c = speed.to(299792458 * METER / SECOND).unwrap();
    assert_eq!(c.magnitude(), 1.0);
    assert!(c.is_dimensionless());

    let q = METER * 3 / 2;
    assert_eq!(q.magnitude(), 1.5);
    let r = 2 / SECOND;
    assert_eq!(r.dimensions(), -SECOND.dimensions());

    let small: Quantity<f32> = make_quantity(1.5f32, length());
    assert_eq!((small * 2).magnitude(), 3.0f32);
    assert_eq!((0.5 * small).magnitude(), 0.75f32);

    let count: Quantity<i32> = make_quantity(7, length());
    assert_eq!((count / 2).magnitude(), 3);
    assert_eq!((3 * count).magnitude(), 21);
}

#[test]
#[should_panic]
fn integer_division_by_zero() {
    let one: Quantity<i32> = make_quantity(1, length());
    let zero: Quantity<i32> = make_quantity(0, SECOND.dimensions());
    let _ = one / zero;
}

#[test]
fn negation_and_abs() {
    let q = -(5.0 * NEWTON);
    assert_eq!(q.magnitude(), -5.0);
    assert_eq!(q.dimensions(), NEWTON.dimensions());
    assert_eq!(q.abs(), 5.0 * NEWTON);
    assert_eq!(q.zero().magnitude(), 0.0);
    assert_eq!(q.zero().dimensions(), NEWTON.dimensions());
}

#[test]
fn conversion() {
    let speed = 299792458 * METER / SECOND;
    assert_eq!(speed.to(299792458 * METER / SECOND).unwrap().magnitude(), 1.0);

    let mass = 1500.0.g();
    let kg = mass.to(KILOGRAM).unwrap();
    assert_relative_eq!(kg.magnitude(), 1.5);
    assert!(kg.is_dimensionless());

    assert_eq!(
        METER.to(SECOND),
        Err(UnitError::DimensionMismatch(length(), SECOND.dimensions()))
    );
}

#[test]
fn powers() {
    let q = 3.0 * METER;
    assert_eq!(q.powi(0), Quantity::dimensionless(1.0));
    assert_eq!(q.powi(3), q * q * q);
    assert_eq!(q.square(), q * q);
    assert_eq!(q.cube(), math::cube(q));
    assert_eq!(pow(q, 2), math::square(q));

    let r = (2.0 * SECOND).powi(-2);
    assert_eq!(r.magnitude(), 0.25);
    assert_eq!(r.dimensions().exponents(), [0, 0, -2, 0, 0, 0, 0]);
}

#[test]
fn roots() {
    let area = 16.0 * METER * METER;
    assert_eq!(area.sqrt().unwrap(), 4.0 * METER);
    assert_eq!(
        METER.sqrt(),
        Err(UnitError::NonIntegralRoot(length(), 2))
    );
    let volume = make_quantity(27.0, length() * 3);
    let side = volume.nth_root(3).unwrap();
    assert_relative_eq!(side.magnitude(), 3.0, max_relative = 1e-12);
    assert_eq!(side.dimensions(), length());
    assert!((-4.0 * METER * METER).sqrt().unwrap().magnitude().is_nan());
}

#[test]
fn comparison() {
    let a = 1.0 * METER;
    let b = 2 * METER;
    assert_eq!(a.partial_cmp(&b), Ok(Some(Ordering::Less)));
    assert_eq!(b.partial_cmp(&a), Ok(Some(Ordering::Greater)));
    assert_eq!(a.partial_cmp(&a), Ok(Some(Ordering::Equal)));
    assert!(a.partial_cmp(&SECOND).is_err());
}

#[test]
fn compound_assignment() {
    let mut q = 1.0 * METER;
    q.try_add_assign(2.0 * METER).unwrap();
    q.try_sub_assign(make_quantity(1i32, length())).unwrap();
    assert_eq!(q, 2.0 * METER);
    assert!(q.try_add_assign(SECOND).is_err());
    assert_eq!(q, 2.0 * METER);
}

#[test]
fn promotion() {
    let a: Quantity<f32> = make_quantity(1.5f32, length());
    let b: Quantity<f64> = make_quantity(2.0f64, length());
    let c: Quantity<f64> = (a + b).unwrap();
    assert_eq!(c.magnitude(), 3.5);

    let i: Quantity<i32> = make_quantity(3i32, length());
    let f: Quantity<f32> = make_quantity(2.5f32, length());
    let p: Quantity<i32> = i * f;
    assert_eq!(p.magnitude(), 6);

    let n: Quantity<i64> = make_quantity(7i64, length());
    let s = n * 2;
    assert_eq!(s.magnitude(), 14);

    /* Scalars keep the representation of the quantity. */
    let half: Quantity<f32> = make_quantity(2.0f32, length()) / 4;
    assert_eq!(half.magnitude(), 0.5f32);
    let widened = Quantity::dimensionless(2.0f64) * half.cast::<f64>();
    assert_eq!(widened.magnitude(), 1.0);

    let cast: Quantity<i32> = (2.9 * METER).cast();
    assert_eq!(cast.magnitude(), 2);
    assert_eq!(cast.dimensions(), length());
}

#[test]
fn serialization() {
    let value = serde_json::to_value(2.0 * NEWTON).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "magnitude": 2.0,
            "dimensions": [1, 1, -2, 0, 0, 0, 0]
        })
    );
    let q: Quantity = serde_json::from_value(value).unwrap();
    assert_eq!(q, 2.0 * NEWTON);
}

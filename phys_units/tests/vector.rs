/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use phys_units::units::{METER, SECOND};
use phys_units::vector::operation::{Add, Div, Echo, Fill, Mul, Sub};
use phys_units::{
    accumulate, concat, make_quantity, make_vec, shrink, BaseDimension,
    Dimensions, Quantity, UnitError, Vector,
};

#[test]
fn construction() {
    let v = make_vec![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert_eq!(v[1], 2);
    assert_eq!(v.get(3), None);
    assert_eq!(v.into_array(), [1, 2, 3]);

    let w = make_vec![0.5; 4];
    assert_eq!(w, Vector::new([0.5; 4]));
    assert_eq!(Vector::<i32, 2>::from_value(7), make_vec![7, 7]);
    assert_eq!(w.iter().sum::<f64>(), 2.0);
}

#[test]
fn elementwise_quantities() {
    let v = make_vec![1.0 * METER, 2.0 * METER];
    let sum = (v + v).transpose().unwrap();
    assert_eq!(sum, make_vec![2.0 * METER, 4.0 * METER]);

    let mixed = make_vec![METER, SECOND];
    let err = (v + mixed).transpose();
    assert_eq!(
        err,
        Err(UnitError::DimensionMismatch(
            METER.dimensions(),
            SECOND.dimensions()
        ))
    );

    let area = v * v;
    assert_eq!(area[1].magnitude(), 4.0);
    assert_eq!(
        area[1].dimensions(),
        Dimensions::base(BaseDimension::Length) * 2
    );
}

#[test]
fn apply_with_tags() {
    let a = make_vec![6, 8, 10];
    let b = make_vec![3, 2, 5];
    assert_eq!(a.apply(b, Add), make_vec![9, 10, 15]);
    assert_eq!(a.apply(b, Sub), make_vec![3, 6, 5]);
    assert_eq!(a.apply(b, Mul), make_vec![18, 16, 50]);
    assert_eq!(a.apply(b, Div), make_vec![2, 4, 2]);
    assert_eq!(a.apply(b, |x: i32, y: i32| x.max(y)), make_vec![6, 8, 10]);
    assert_eq!(a.map(Echo), a);
    assert_eq!(a.map(Fill(1.5)), make_vec![1.5; 3]);
    assert_eq!(a.map(|x: i32| x * x), make_vec![36, 64, 100]);
}

#[test]
fn broadcast() {
    let v = make_vec![1.0, 2.0, 4.0];
    assert_eq!(v * 2.0, make_vec![2.0, 4.0, 8.0]);
    assert_eq!(v - 1.0, make_vec![0.0, 1.0, 3.0]);
    assert_eq!(v.fill(3), make_vec![3; 3]);

    let lengths = v * METER;
    assert_eq!(lengths[2], 4.0 * METER);
    let speeds = make_vec![2.0 * METER, 6.0 * METER] / (2.0 * SECOND);
    assert_eq!(speeds[1].magnitude(), 3.0);
    assert_eq!(speeds[1].dimensions(), (METER / SECOND).dimensions());
}

#[test]
fn accumulate_tree_order() {
    let v = make_vec![1.0 * METER, 2.0 * METER, 3.0 * METER, 4.0 * METER];
    assert_eq!(v.try_accumulate(Add), Ok(10.0 * METER));
    assert_eq!(make_vec![1, 2, 3, 4, 5].accumulate(Add), 15);
    assert_eq!(make_vec![42].accumulate(Sub), 42);

    /* Subtraction shows the grouping: ((1 - 2) - (3 - 4)) - 5. */
    assert_eq!(make_vec![1, 2, 3, 4, 5].accumulate(Sub), -5);
    /* (1 - 2) - 3 for three elements. */
    assert_eq!(make_vec![1, 2, 3].accumulate(Sub), -4);
    /* ((1 - 2) - (3 - 4)) - ((5 - 6) - 7) */
    assert_eq!(accumulate(Sub, make_vec![1, 2, 3, 4, 5, 6, 7]), 8);
}

#[test]
fn accumulate_powers() {
    let v = make_vec![2.0 * METER; 100];
    let p: Quantity = v.accumulate(Mul);
    assert_eq!(p.magnitude(), 2f64.powi(100));
    assert_eq!(p.dimensions(), Dimensions::base(BaseDimension::Length) * 100);
    assert_eq!(p, (2.0 * METER).powi(100));
}

#[test]
fn concat_and_shrink() {
    let a = make_vec![1i32, 2, 3];
    let b = make_vec![4.5f64, 5.5];
    let c: Vector<f64, 5> = a.concat(b);
    assert_eq!(c, make_vec![1.0, 2.0, 3.0, 4.5, 5.5]);

    let d: Vector<f64, 5> = concat(b, a);
    for i in 0..2 {
        assert_eq!(d[i], b[i]);
    }
    for i in 2..5 {
        assert_eq!(d[i], a[i - 2] as f64);
    }

    let short = make_vec![make_quantity(1.5f32, METER.dimensions())];
    let long: Vector<Quantity<f64>, 2> = short.concat(make_vec![METER]);
    assert_eq!(long[0], 1.5 * METER);
    assert_eq!(long[1], METER);

    /* Equal widths keep the left representation. */
    let e: Vector<i32, 2> = make_vec![1i32].concat(make_vec![2.5f32]);
    assert_eq!(e, make_vec![1, 2]);

    let f: Vector<f64, 2> = c.shrink();
    assert_eq!(f, make_vec![1.0, 2.0]);
    assert_eq!(shrink::<5, _, 5>(c), c);
    assert_eq!(shrink::<0, _, 5>(c).len(), 0);
}

#[test]
fn display_and_serialize() {
    let v = make_vec![1.0 * METER, 2.5 * METER];
    assert_eq!(v.to_string(), "(1 m, 2.5 m)");
    assert_eq!(make_vec![1, 2].to_string(), "(1, 2)");
    assert_eq!(
        serde_json::to_value(make_vec![1, 2, 3]).unwrap(),
        serde_json::json!([1, 2, 3])
    );
}

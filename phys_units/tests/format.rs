/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use phys_units::format::{emit_dim, prefix, to_magnitude, to_unit_symbol};
use phys_units::units::{KILOGRAM, METER, NEWTON, SECOND};
use phys_units::{Dimensions, Quantity, UnitError};

#[test]
fn dimension_symbols() {
    assert_eq!(emit_dim("m", 0), "");
    assert_eq!(emit_dim("m", 1), "m");
    assert_eq!(emit_dim("m", 2), "m+2");
    assert_eq!(emit_dim("s", -2), "s-2");
    assert_eq!(emit_dim("s", -1), "s-1");
    assert_eq!(to_unit_symbol(&NEWTON.dimensions()), "m kg s-2");
    assert_eq!(to_unit_symbol(&Dimensions::DIMENSIONLESS), "");
}

#[test]
fn display() {
    assert_eq!(METER.to_string(), "1 m");
    assert_eq!(NEWTON.to_string(), "1 m kg s-2");
    assert_eq!((2.0 * METER * METER).to_string(), "2 m+2");
    assert_eq!((0.5 * KILOGRAM / SECOND).to_string(), "0.5 kg s-1");
    assert_eq!((METER / METER).to_string(), "1");
    assert_eq!(format!("{:.2}", 1.0 / 3.0 * METER), "0.33 m");
    assert_eq!(Quantity::dimensionless(42i64).to_string(), "42");
    assert_eq!(to_magnitude(&(2.5 * SECOND)), "2.5");

    assert_eq!(NEWTON.dimensions().to_string(), "m kg s-2");
    assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "dimensionless");
    assert_eq!(NEWTON.dimensions().slots()[2].to_string(), "s-2");
}

#[test]
fn error_messages() {
    let err = (METER + SECOND).unwrap_err();
    assert_eq!(err.to_string(), "Incompatible dimensions: m <-> s");
    assert_eq!(
        prefix("q").unwrap_err().to_string(),
        "unrecognized prefix 'q'"
    );
}

#[test]
fn prefix_lookup() {
    assert_eq!(prefix("k"), Ok(1e3));
    assert_eq!(prefix("da"), Ok(1e1));
    assert_eq!(prefix("u"), Ok(1e-6));
    assert_eq!(prefix("µ"), Ok(1e-6));
    assert_eq!(prefix("y"), Ok(1e-24));
    assert_eq!(prefix("Y"), Ok(1e24));
    assert_eq!(prefix(""), Err(UnitError::UnrecognizedPrefix(String::new())));
    assert_eq!(
        prefix("kk"),
        Err(UnitError::UnrecognizedPrefix("kk".to_string()))
    );
}

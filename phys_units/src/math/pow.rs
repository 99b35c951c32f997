/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use num_traits::One;
use std::ops::Mul;

/// `x` raised to a non-negative integer power, by repeated
/// multiplication. `powi(x, 0)` is one.
pub fn powi<T>(x: T, exp: u32) -> T
where
    T: Mul<Output = T> + One + Copy,
{
    (0..exp).fold(T::one(), |acc, _| acc * x)
}

pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

pub fn cube<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x * x
}

#[cfg(test)]
mod test {
    use super::{cube, powi, square};

    #[test]
    fn integer_powers() {
        assert_eq!(powi(2i64, 0), 1);
        assert_eq!(powi(2i64, 1), 2);
        assert_eq!(powi(2i64, 10), 1024);
        assert_eq!(powi(-3i32, 3), -27);
        assert_eq!(powi(0.5f64, 2), 0.25);
    }

    #[test]
    fn square_and_cube() {
        assert_eq!(square(7i32), 49);
        assert_eq!(cube(-2i64), -8);
        assert_eq!(square(1.5f32), 2.25);
    }
}

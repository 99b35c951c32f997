/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use num_traits::Float;

const MAX_ITERATIONS: usize = 1024;

/// Square root by Newton-Raphson iteration, starting from `x` and
/// stopping when two successive approximations are equal. Negative,
/// infinite and NaN arguments give NaN.
pub fn sqrt<T: Float>(x: T) -> T {
    if x >= T::zero() && x < T::infinity() {
        newton_raphson(x, x, T::zero())
    } else {
        T::nan()
    }
}

fn newton_raphson<T: Float>(x: T, mut curr: T, mut prev: T) -> T {
    let half = T::one() / (T::one() + T::one());
    for _ in 0..MAX_ITERATIONS {
        if curr == prev {
            return curr;
        }
        let next = half * (curr + x / curr);
        if next == prev {
            /* Alternating between two neighbours. */
            return next.min(curr);
        }
        prev = curr;
        curr = next;
    }
    log::debug!("sqrt: no convergence after {} iterations", MAX_ITERATIONS);
    curr
}

#[cfg(test)]
mod test {
    use super::sqrt;
    use approx::assert_relative_eq;

    #[test]
    fn exact_squares() {
        assert_eq!(sqrt(0.0f64), 0.0);
        assert_eq!(sqrt(1.0f64), 1.0);
        assert_eq!(sqrt(4.0f64), 2.0);
        assert_eq!(sqrt(144.0f64), 12.0);
        assert_eq!(sqrt(0.25f32), 0.5);
    }

    #[test]
    fn matches_std() {
        for x in [2.0f64, 3.0, 10.0, 1e-10, 1e10, 12345.678] {
            assert_relative_eq!(sqrt(x), x.sqrt(), max_relative = 1e-15);
        }
        assert_relative_eq!(sqrt(2.0f32), 2.0f32.sqrt(), max_relative = 1e-6);
    }

    #[test]
    fn out_of_domain() {
        assert!(sqrt(-1.0f64).is_nan());
        assert!(sqrt(f64::INFINITY).is_nan());
        assert!(sqrt(f64::NAN).is_nan());
        assert!(sqrt(-0.5f32).is_nan());
    }
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::ops;

use super::operation;
use super::Vector;
use crate::quantity::Quantity;

/* Vector op vector, and vector op quantity (broadcast). */
macro_rules! elementwise {
    ($($trait:ident, $method:ident;)*) => {
        $(
            impl<T, U, const N: usize> ops::$trait<Vector<U, N>> for Vector<T, N>
            where
                T: Copy + ops::$trait<U>,
                U: Copy,
            {
                type Output = Vector<<T as ops::$trait<U>>::Output, N>;
                fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                    self.apply(rhs, operation::$trait)
                }
            }

            impl<T, R, const N: usize> ops::$trait<Quantity<R>> for Vector<T, N>
            where
                T: Copy + ops::$trait<Quantity<R>>,
                R: Copy,
            {
                type Output =
                    Vector<<T as ops::$trait<Quantity<R>>>::Output, N>;
                fn $method(self, rhs: Quantity<R>) -> Self::Output {
                    self.apply(self.fill(rhs), operation::$trait)
                }
            }
        )*
    };
}

/* Vector op scalar, per scalar type. */
macro_rules! broadcast {
    ($($scalar:ty),*) => {
        $(
            broadcast!(@op $scalar, Add, add);
            broadcast!(@op $scalar, Sub, sub);
            broadcast!(@op $scalar, Mul, mul);
            broadcast!(@op $scalar, Div, div);
        )*
    };
    (@op $scalar:ty, $trait:ident, $method:ident) => {
        impl<T, const N: usize> ops::$trait<$scalar> for Vector<T, N>
        where
            T: Copy + ops::$trait<$scalar>,
        {
            type Output = Vector<<T as ops::$trait<$scalar>>::Output, N>;
            fn $method(self, rhs: $scalar) -> Self::Output {
                self.apply(self.fill(rhs), operation::$trait)
            }
        }
    };
}

elementwise! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

broadcast!(f32, f64, i32, i64);

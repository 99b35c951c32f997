/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Operation tags for elementwise vector arithmetic.
//!
//! A tag is a (mostly zero-sized) value selecting the operation to apply
//! to each element. Closures can be used wherever a tag is expected.

use std::ops;

pub trait BinaryOp<L, R> {
    type Output;
    fn apply(&self, lhs: L, rhs: R) -> Self::Output;
}

pub trait UnaryOp<T> {
    type Output;
    fn apply(&self, value: T) -> Self::Output;
}

#[derive(Clone, Copy, Default, Debug)]
pub struct Add;

#[derive(Clone, Copy, Default, Debug)]
pub struct Sub;

#[derive(Clone, Copy, Default, Debug)]
pub struct Mul;

#[derive(Clone, Copy, Default, Debug)]
pub struct Div;

/// Replace every element with the given value.
#[derive(Clone, Copy, Debug)]
pub struct Fill<V>(pub V);

/// Identity.
#[derive(Clone, Copy, Default, Debug)]
pub struct Echo;

impl<L: ops::Add<R>, R> BinaryOp<L, R> for Add {
    type Output = L::Output;
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs + rhs
    }
}

impl<L: ops::Sub<R>, R> BinaryOp<L, R> for Sub {
    type Output = L::Output;
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs - rhs
    }
}

impl<L: ops::Mul<R>, R> BinaryOp<L, R> for Mul {
    type Output = L::Output;
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs * rhs
    }
}

impl<L: ops::Div<R>, R> BinaryOp<L, R> for Div {
    type Output = L::Output;
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs / rhs
    }
}

impl<L, R, O, F> BinaryOp<L, R> for F
where
    F: Fn(L, R) -> O,
{
    type Output = O;
    fn apply(&self, lhs: L, rhs: R) -> O {
        self(lhs, rhs)
    }
}

impl<T, V: Copy> UnaryOp<T> for Fill<V> {
    type Output = V;
    fn apply(&self, _value: T) -> V {
        self.0
    }
}

impl<T> UnaryOp<T> for Echo {
    type Output = T;
    fn apply(&self, value: T) -> T {
        value
    }
}

impl<T, O, F> UnaryOp<T> for F
where
    F: Fn(T) -> O,
{
    type Output = O;
    fn apply(&self, value: T) -> O {
        self(value)
    }
}

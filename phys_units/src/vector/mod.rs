/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Fixed-size vectors of quantities or plain numbers.

mod arith;
pub mod operation;

use std::array;
use std::ops::Index;

use serde::{Serialize, Serializer};

use self::operation::{BinaryOp, Fill, UnaryOp};
use crate::rep::{Promote, Promoted};

/// A fixed-length vector. The length is part of the type, so
/// elementwise operations on vectors of different lengths do not
/// compile.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(elements: [T; N]) -> Self {
        Vector(elements)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.0.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Apply a unary operation to every element.
    pub fn map<O: UnaryOp<T>>(self, op: O) -> Vector<O::Output, N> {
        Vector(self.0.map(|x| op.apply(x)))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    pub fn from_value(value: T) -> Self {
        Vector([value; N])
    }

    /// Combine corresponding elements of `self` and `rhs`.
    pub fn apply<U, O>(
        self,
        rhs: Vector<U, N>,
        op: O,
    ) -> Vector<O::Output, N>
    where
        U: Copy,
        O: BinaryOp<T, U>,
    {
        Vector(array::from_fn(|i| op.apply(self.0[i], rhs.0[i])))
    }

    /// A vector of the same length holding `value` everywhere.
    pub fn fill<V: Copy>(&self, value: V) -> Vector<V, N> {
        self.map(Fill(value))
    }

    /// Reduce all elements with `op`, combining adjacent pairs level by
    /// level: `((a b) (c d)) e` for five elements. An odd trailing
    /// element moves up to the next level unchanged.
    pub fn accumulate<O>(self, op: O) -> T
    where
        O: BinaryOp<T, T, Output = T>,
    {
        const { assert!(N > 0, "cannot accumulate an empty vector") };
        let mut buf = self.0;
        let mut len = N;
        while len > 1 {
            let half = len / 2;
            for i in 0..half {
                buf[i] = op.apply(buf[2 * i], buf[2 * i + 1]);
            }
            if len % 2 == 1 {
                buf[half] = buf[len - 1];
            }
            len -= half;
        }
        buf[0]
    }

    /// As [`Vector::accumulate`], for operations that can fail. Stops at
    /// the first error.
    pub fn try_accumulate<O, E>(self, op: O) -> Result<T, E>
    where
        O: BinaryOp<T, T, Output = Result<T, E>>,
    {
        const { assert!(N > 0, "cannot accumulate an empty vector") };
        let mut buf = self.0;
        let mut len = N;
        while len > 1 {
            let half = len / 2;
            for i in 0..half {
                buf[i] = op.apply(buf[2 * i], buf[2 * i + 1])?;
            }
            if len % 2 == 1 {
                buf[half] = buf[len - 1];
            }
            len -= half;
        }
        Ok(buf[0])
    }

    /// The elements of `self` followed by those of `other`, in their
    /// common representation. `K` must equal `N + M`.
    pub fn concat<U, const M: usize, const K: usize>(
        self,
        other: Vector<U, M>,
    ) -> Vector<Promoted<T, U>, K>
    where
        T: Promote<U>,
        U: Copy,
    {
        const { assert!(N + M == K, "concat: length mismatch") };
        Vector(array::from_fn(|i| match i < N {
            true => self.0[i].promote(),
            false => T::promote_rhs(other.0[i - N]),
        }))
    }

    /// The first `K` elements.
    pub fn shrink<const K: usize>(self) -> Vector<T, K> {
        const { assert!(K <= N, "shrink: cannot grow a vector") };
        Vector(array::from_fn(|i| self.0[i]))
    }
}

impl<T: Copy, E, const N: usize> Vector<Result<T, E>, N> {
    /// Turn a vector of results into a result of a vector, returning the
    /// first error.
    pub fn transpose(self) -> Result<Vector<T, N>, E> {
        let mut values = [None; N];
        for (value, result) in values.iter_mut().zip(self.0) {
            *value = Some(result?);
        }
        Ok(Vector(values.map(|v| v.expect("all elements are set"))))
    }
}

/// Free-function form of [`Vector::accumulate`].
pub fn accumulate<T, O, const N: usize>(op: O, vector: Vector<T, N>) -> T
where
    T: Copy,
    O: BinaryOp<T, T, Output = T>,
{
    vector.accumulate(op)
}

/// Free-function form of [`Vector::concat`].
pub fn concat<T, U, const N: usize, const M: usize, const K: usize>(
    lhs: Vector<T, N>,
    rhs: Vector<U, M>,
) -> Vector<Promoted<T, U>, K>
where
    T: Copy + Promote<U>,
    U: Copy,
{
    lhs.concat(rhs)
}

/// Free-function form of [`Vector::shrink`].
pub fn shrink<const K: usize, T: Copy, const N: usize>(
    vector: Vector<T, N>,
) -> Vector<T, K> {
    vector.shrink()
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Vector(elements)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Build a [`Vector`] from its elements, or from a value and a length.
///
/// ```
/// use phys_units::make_vec;
///
/// let v = make_vec![1.0, 2.0, 3.0];
/// let w = make_vec![0.5; 3];
/// assert_eq!((v * w).into_array(), [0.5, 1.0, 1.5]);
/// ```
#[macro_export]
macro_rules! make_vec {
    ($value:expr; $n:expr) => {
        $crate::vector::Vector::<_, { $n }>::from_value($value)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::vector::Vector::new([$($element),+])
    };
}

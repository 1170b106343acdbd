//! Implementations of `std::ops` and `std::iter` folding traits.

use std::{
    iter::{Product, Sum},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
        SubAssign,
    },
};

use crate::{
    approx::ApproxEq,
    traits::{One, Zero},
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Allows comparing vectors with differing (but comparable) element types.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Component-wise approximate comparison: two vectors are equal if every pair of components is.
impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Generates the element-wise vector-vector operator, its assigning variant, and optionally the
/// vector-scalar operator and its assigning variant.
macro_rules! elementwise {
    ($op:ident::$method:ident, $assign:ident::$assign_method:ident, $doc:literal) => {
        #[doc = concat!("Element-wise ", $doc, ".")]
        impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
        where
            T: $op,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l.$method(r))
            }
        }

        #[doc = concat!("Element-wise ", $doc, ".")]
        impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
        where
            T: $assign,
        {
            fn $assign_method(&mut self, rhs: Vector<T, N>) {
                self.as_mut_slice()
                    .iter_mut()
                    .zip(rhs.into_array())
                    .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
            }
        }
    };
    ($op:ident::$method:ident, $assign:ident::$assign_method:ident, $doc:literal, scalar) => {
        elementwise!($op::$method, $assign::$assign_method, $doc);

        #[doc = concat!("Vector-scalar ", $doc, ", applied to every element.")]
        impl<T, const N: usize> $op<T> for Vector<T, N>
        where
            T: $op + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|elem| elem.$method(rhs))
            }
        }

        #[doc = concat!("Vector-scalar ", $doc, ", applied to every element.")]
        impl<T, const N: usize> $assign<T> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            fn $assign_method(&mut self, rhs: T) {
                self.as_mut_slice()
                    .iter_mut()
                    .for_each(|lhs| lhs.$assign_method(rhs));
            }
        }
    };
}

elementwise!(Add::add, AddAssign::add_assign, "addition");
elementwise!(Sub::sub, SubAssign::sub_assign, "subtraction");
elementwise!(Mul::mul, MulAssign::mul_assign, "multiplication", scalar);
elementwise!(Div::div, DivAssign::div_assign, "division", scalar);
elementwise!(Rem::rem, RemAssign::rem_assign, "remainder", scalar);

// No vector-scalar `+`/`-`; broadcast with `Vector::splat` instead.

/// Sums all vectors of an iterator, starting from [`Vector::ZERO`].
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// let total: Vec2i = [vec2(1, 2), vec2(3, 4), vec2(5, 6)].into_iter().sum();
/// assert_eq!(total, vec2(9, 12));
///
/// let empty: Vec3f = std::iter::empty::<Vec3f>().sum();
/// assert_eq!(empty, Vec3f::ZERO);
/// ```
impl<T, const N: usize> Sum for Vector<T, N>
where
    T: Zero + Add<Output = T>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<'a, T, const N: usize> Sum<&'a Vector<T, N>> for Vector<T, N>
where
    T: Zero + Add<Output = T> + Copy,
{
    fn sum<I: Iterator<Item = &'a Vector<T, N>>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + *v)
    }
}

/// Multiplies all vectors of an iterator element-wise, starting from [`Vector::ONE`].
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// let vs = [vec3(1u32, 2, 3), vec3(4, 5, 6)];
/// assert_eq!(vs.iter().product::<Vec3u>(), vec3(4, 10, 18));
/// assert_eq!(vs[..0].iter().product::<Vec3u>(), Vec3u::ONE);
/// ```
impl<T, const N: usize> Product for Vector<T, N>
where
    T: One + Mul<Output = T>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, v| acc * v)
    }
}

impl<'a, T, const N: usize> Product<&'a Vector<T, N>> for Vector<T, N>
where
    T: One + Mul<Output = T> + Copy,
{
    fn product<I: Iterator<Item = &'a Vector<T, N>>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, v| acc * *v)
    }
}

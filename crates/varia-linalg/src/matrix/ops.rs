use std::{
    iter::Product,
    ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub},
};

use crate::{
    approx::ApproxEq,
    traits::Number,
    Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_flat().abs_diff_eq(other.as_flat(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_flat().rel_diff_eq(other.as_flat(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_flat().ulps_diff_eq(other.as_flat(), ulps_tolerance)
    }
}

/// Matrix * Column Vector.
///
/// Each element of the result is the dot product of the corresponding row with `rhs`.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| Vector::from(self.0[row]).dot(rhs))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_flat_mut().iter_mut().for_each(|elem| *elem = *elem * rhs);
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Multiplies all matrices of an iterator from left to right, starting with the identity matrix.
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// let scale = Mat2i::splat(2);
/// let swap = Matrix::from_rows([
///     [0, 1],
///     [1, 0],
/// ]);
/// let m: Mat2i = [scale, swap, scale].into_iter().product();
/// assert_eq!(m, scale * swap * scale);
/// assert_eq!(std::iter::empty::<Mat2i>().product::<Mat2i>(), Mat2i::identity());
/// ```
impl<T, const N: usize> Product for Matrix<T, N, N>
where
    T: Number,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, m| acc * m)
    }
}

impl<'a, T, const N: usize> Product<&'a Matrix<T, N, N>> for Matrix<T, N, N>
where
    T: Number,
{
    fn product<I: Iterator<Item = &'a Matrix<T, N, N>>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, m| acc * *m)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2i, Mat3f, Mat3i, Matrix};

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        assert_eq!(Mat3f::identity() * vec3(2.0, 3.0, 4.0), vec3(2.0, 3.0, 4.0));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(c[(3, 0)], 7 * 9 + 8 * 12);
    }

    #[test]
    fn identity_laws() {
        let m = Mat3i::from_fn(|r, c| (r as i32 - 1) * 5 + c as i32 * 3);
        assert_eq!(Mat3i::identity() * m, m);
        assert_eq!(m * Mat3i::identity(), m);
        assert_eq!(m * Mat3i::splat(2), m * 2);
    }

    #[test]
    fn scalar_and_elementwise() {
        let mut m = Matrix::from_rows([[1, -2], [3, 4]]);
        assert_eq!(m + m, m * 2);
        assert_eq!(m - m, Mat2i::zero());
        assert_eq!(-m, m * -1);
        m *= 3;
        assert_eq!(m, Matrix::from_rows([[3, -6], [9, 12]]));
    }

    #[test]
    fn product() {
        let ms = [
            Matrix::from_rows([[1, 2], [3, 4]]),
            Matrix::from_rows([[0, 1], [1, 0]]),
            Matrix::from_rows([[2, 0], [1, 1]]),
        ];
        assert_eq!(ms.iter().product::<Mat2i>(), ms[0] * ms[1] * ms[2]);
        assert_eq!(ms.into_iter().product::<Mat2i>(), ms[0] * ms[1] * ms[2]);
        assert_eq!(ms[..0].iter().product::<Mat2i>(), Mat2i::identity());
        // Not commutative: order of the fold matters.
        assert_ne!(ms[0] * ms[1], ms[1] * ms[0]);
    }
}

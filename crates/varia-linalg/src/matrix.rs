use std::{array, fmt};

use bytemuck::TransparentWrapper;

use crate::{
    traits::{Number, One, Signed, Trig, Zero},
    Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 2x2 matrix with [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 2x2 matrix with [`u32`] elements.
pub type Mat2u = Mat2<u32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 3x3 matrix with [`u32`] elements.
pub type Mat3u = Mat3<u32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;
/// A 4x4 matrix with [`u32`] elements.
pub type Mat4u = Mat4<u32>;

/// A coordinate axis of 3D space.
///
/// Used by the rotation builders of [`Mat3`] and [`Mat4`] to select the axis that a rotation
/// happens *around*. The rotation itself affects the two remaining axes `(axis + 1) % 3` and
/// `(axis + 2) % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Returns the indices `(i, j)` of the plane orthogonal to this axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Axis::X.plane(), (1, 2));
    /// assert_eq!(Axis::Y.plane(), (2, 0));
    /// assert_eq!(Axis::Z.plane(), (0, 1));
    /// ```
    pub fn plane(self) -> (usize, usize) {
        let axis = self as usize;
        ((axis + 1) % 3, (axis + 2) % 3)
    }
}

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Like [`Vector`], matrices are `Copy` values, and operators never modify their operands.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take an array of rows or columns, each of
///   which may be an array or a [`Vector`].
/// - [`Matrix::from_fn`] computes each element from its `(row, column)` position.
/// - [`Matrix::zero`] (or [`Matrix::ZERO`]) has every element set to 0.
/// - For square matrices (where `R` equals `C`):
///   - [`Matrix::identity`] has 1 on its diagonal and 0 everywhere else.
///   - [`Matrix::from_diagonal`] uses a specified diagonal and zero outside of it, and
///     [`Matrix::splat`] repeats one value along the diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] create 2D rotation
///   matrices, [`Matrix::plane_rotation`] and [`Matrix::rotation`] create 3D rotations around an
///   [`Axis`].
///
/// # Element Access
///
/// Elements are indexed with `(row, column)` pairs, both 0-based, as in `m[(row, col)]`. Indexing
/// out of bounds panics; [`Matrix::get`] and [`Matrix::get_mut`] return [`None`] instead.
///
/// ```
/// # use varia_linalg::*;
/// let mut m = Matrix::from_rows([[7, 8, 9]]);
/// m[(0, 2)] -= 10;
/// assert_eq!((m[(0, 0)], m[(0, 2)]), (7, -1));
/// assert_eq!(m.get(1, 0), None);
/// ```
///
/// The elements can also be viewed as a flat slice in row-major order ([`Matrix::as_flat`]), or
/// as a slice of row [`Vector`]s ([`Matrix::rows`]). All of these views borrow the same storage:
///
/// ```
/// # use varia_linalg::*;
/// let mut mat = Mat2i::identity();
/// mat.rows_mut()[1].x = 5;
/// assert_eq!(mat.as_flat(), &[1, 0, 5, 1]);
/// assert_eq!(mat[(1, 0)], 5);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from its rows, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Matrix::from_rows([vec2(1.0, 2.0), vec2(3.0, 4.0)]);
    /// assert_eq!(m, Matrix::from_columns([[1.0, 3.0], [2.0, 4.0]]));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a matrix from its columns, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let mat = Matrix::from_columns([vec3(1, 2, 3), vec3(4, 5, 6)]);
    /// assert_eq!(mat.row(0), vec2(1, 4));
    /// assert_eq!(mat.column(1), vec3(4, 5, 6));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Builds a matrix by calling `cb(row, col)` for every position, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let lower: Mat3u = Matrix::from_fn(|row, col| u32::from(col <= row));
    /// assert_eq!(lower.row(0), vec3(1, 0, 0));
    /// assert_eq!(lower.row(2), vec3(1, 1, 1));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Returns the matrix of `f` applied to each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Mat2f::rotation_counterclockwise(0.5).map(f64::from);
    /// assert_approx_eq!(m.determinant(), 1.0).abs(1e-6);
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Mirrors the matrix along its diagonal, turning rows into columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let wide = Matrix::from_rows([[1, 2, 3]]);
    /// assert_eq!(wide.transpose(), Matrix::from_rows([[1], [2], [3]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Checked element access. [`None`] if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Mat2i::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(1, 0), Some(&3));
    /// assert_eq!(m.get(0, 2), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Copies out row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Copies out column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(col < C, "column index {col} out of bounds for {R}x{C} matrix");
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Borrows the rows as [`Vector`]s, without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
    /// let sum: Vec2i = m.rows().iter().sum();
    /// assert_eq!(sum, vec2(9, 12));
    /// ```
    pub fn rows(&self) -> &[Vector<T, C>] {
        Vector::wrap_slice(&self.0)
    }

    /// Mutably borrows the rows as [`Vector`]s.
    pub fn rows_mut(&mut self) -> &mut [Vector<T, C>] {
        Vector::wrap_slice_mut(&mut self.0)
    }

    /// Borrows all `R * C` elements as one slice, row after row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Matrix::from_columns([[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(m.as_flat(), &[1, 3, 5, 2, 4, 6]);
    /// ```
    pub fn as_flat(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Mutably borrows all elements, row after row.
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns the element-wise ([Hadamard]) product, covering all `R * C` elements.
    ///
    /// [Hadamard]: https://en.wikipedia.org/wiki/Hadamard_product_(matrices)
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let mask = Matrix::from_rows([[0, 1, 0], [1, 0, 1]]);
    /// assert_eq!(a.hadamard(mask), Matrix::from_rows([[0, 2, 0], [4, 0, 6]]));
    /// ```
    pub fn hadamard(self, other: Self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| self.0[row][col] * other.0[row][col])
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All elements 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);

    /// Returns [`Matrix::ZERO`].
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert!(Mat3f::zero().as_flat().iter().all(|&e| e == 0.0));
    /// ```
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows stay on one line even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the matrix with 1 on the diagonal and 0 elsewhere, the neutral element of `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = vec3(2.0, 3.0, 4.0);
    /// assert_eq!(Mat3f::identity() * v, v);
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One + Copy,
    {
        Self::splat(T::ONE)
    }

    /// Creates a square matrix with `elem` on its diagonal and 0 everywhere else.
    ///
    /// *Note*: unlike [`Vector::splat`], this does *not* fill the whole matrix. `splat(1)` is the
    /// identity matrix, and `splat(s) * m` scales `m` by `s`. To fill every element, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Mat2::splat(3), Matrix::from_rows([
    ///     [3, 0],
    ///     [0, 3],
    /// ]));
    /// assert_eq!(Mat4u::splat(1), Mat4u::identity());
    /// ```
    pub fn splat(elem: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_diagonal(Vector::splat(elem))
    }

    /// Extracts the diagonal, top left to bottom right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Mat3u::from_fn(|row, col| (row * 3 + col) as u32);
    /// assert_eq!(m.into_diagonal(), vec3(0, 4, 8));
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Places `diag` on the diagonal of an otherwise zero matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let scale = Mat3f::from_diagonal(vec3(2.0, 3.0, 1.0));
    /// assert_eq!(scale * vec3(1.0, 1.0, 5.0), vec3(2.0, 3.0, 5.0));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        let mut this = Self::ZERO;
        for i in 0..N {
            this.0[i][i] = diag[i];
        }
        this
    }

    /// Returns the sum of the diagonal elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Mat3i::from_fn(|row, col| (row * 3 + col) as i32).trace(), 12);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Builds a matrix that rotates the plane orthogonal to `axis`, with every other entry zero.
    fn plane_block(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        let (i, j) = axis.plane();
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::ZERO;
        m.0[i][i] = cos;
        m.0[i][j] = -sin;
        m.0[j][i] = sin;
        m.0[j][j] = cos;
        m
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// For unsigned element types, this overflows if the determinant is negative.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    /// Use [`Matrix::try_invert`] to handle that case instead.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Mat2i::identity().invert(), Mat2i::identity());
    /// assert_eq!(Mat2f::splat(2.0).invert(), Mat2f::splat(0.5));
    /// ```
    pub fn invert(&self) -> Self
    where
        T: Signed,
    {
        match self.try_invert() {
            Some(inverse) => inverse,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }

    /// Inverts this 2x2 matrix, or returns [`None`] if its [`determinant()`] is zero.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.try_invert(), None);
    /// ```
    pub fn try_invert(&self) -> Option<Self>
    where
        T: Signed,
    {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("matrix {:?} has determinant 0, cannot invert", self.0);
            return None;
        }

        let [[a, b], [c, d]] = self.0;
        Some(Matrix([[d, -b], [-c, a]]) * (T::ONE / det))
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Signed + Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let rot = Mat2f::rotation_counterclockwise(FRAC_PI_2);
    /// assert_approx_eq!(rot * Vec2f::X, Vec2f::Y);
    /// ```
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Signed + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Only available for signed element types, since the intermediate products can be negative
    /// even when the determinant is not.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Signed,
    {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Creates a matrix that rotates the plane orthogonal to `axis` by `radians`.
    ///
    /// With `(i, j) = axis.plane()`, the result has `cos` at `(i, i)` and `(j, j)`, `-sin` at
    /// `(i, j)` and `sin` at `(j, i)`. **Every other entry is zero**, including the one on the
    /// diagonal belonging to `axis` itself, so the matrix projects onto the rotated plane. For a
    /// rotation that preserves the axis component, use [`Matrix::rotation`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Mat3f::plane_rotation(Axis::Z, 0.0);
    /// assert_eq!(m, Matrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0],
    /// ]));
    /// ```
    pub fn plane_rotation(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        Self::plane_block(axis, radians)
    }

    /// Creates a matrix that rotates counterclockwise around `axis` by `radians`.
    ///
    /// Positive angles follow the right-hand rule: with the thumb pointing along `axis`, the
    /// fingers curl in the direction of rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let m = Mat3f::rotation(Axis::Z, FRAC_PI_2);
    /// assert_approx_eq!(m * vec3(1.0, 0.0, 5.0), vec3(0.0, 1.0, 5.0));
    /// ```
    pub fn rotation(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        let mut m = Self::plane_block(axis, radians);
        let a = axis as usize;
        m.0[a][a] = T::ONE;
        m
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the 3x3 matrix left after removing row `row` and column `col`.
    fn minor(&self, row: usize, col: usize) -> Mat3<T> {
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self.0[r][c]
        })
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row. The 3x3 minors of a matrix can have a
    /// negative determinant even when the matrix itself does not, so this is only available for
    /// signed element types:
    ///
    /// ```compile_fail
    /// # use varia_linalg::*;
    /// Mat4u::identity().determinant();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 0, 0, 0],
    ///     [0, 1, 0, 1],
    ///     [0, 0, 1, 0],
    ///     [1, 0, 0, 1],
    /// ]);
    /// assert_eq!(m.determinant(), 1);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Signed,
    {
        let term = |col: usize| self.0[0][col] * self.minor(0, col).determinant();
        (term(0) + term(2)) - (term(1) + term(3))
    }

    /// Creates a matrix that rotates the plane orthogonal to `axis` by `radians`, with every other
    /// entry zero.
    ///
    /// This is the 4x4 counterpart of [`Mat3::plane_rotation`]; the fourth row and column are
    /// zero too. [`Mat4::homogeneous_plane_rotation`] sets the bottom-right entry to 1.
    pub fn plane_rotation(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        Self::plane_block(axis, radians)
    }

    /// Like [`Mat4::plane_rotation`], but with the homogeneous coordinate (bottom-right entry) set
    /// to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let m = Mat4d::homogeneous_plane_rotation(Axis::X, 0.0);
    /// assert_eq!(m.into_diagonal(), vec4(0.0, 1.0, 1.0, 1.0));
    /// ```
    pub fn homogeneous_plane_rotation(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        let mut m = Self::plane_block(axis, radians);
        m.0[3][3] = T::ONE;
        m
    }

    /// Creates a matrix that rotates homogeneous coordinates counterclockwise around `axis` by
    /// `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// let m = Mat4f::rotation(Axis::Y, PI);
    /// assert_approx_eq!(m * vec4(1.0, 2.0, 0.0, 1.0), vec4(-1.0, 2.0, 0.0, 1.0)).abs(1e-6);
    /// ```
    pub fn rotation(axis: Axis, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        let mut m = Self::homogeneous_plane_rotation(axis, radians);
        let a = axis as usize;
        m.0[a][a] = T::ONE;
        m
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec3f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn row_major_storage() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(bytemuck::cast::<_, [i32; 4]>(mat), [1, 2, 3, 4]);
        assert_eq!(mat.rows(), &[vec2(1, 2), vec2(3, 4)]);
        assert_eq!(mat.column(0), vec2(1, 3));
    }

    #[test]
    fn views_share_storage() {
        let mut mat = Mat3i::zero();
        mat[(0, 2)] = 7;
        mat.as_flat_mut()[4] = 8;
        mat.rows_mut()[2].z = 9;
        if let Some(e) = mat.get_mut(2, 0) {
            *e = 6;
        }
        assert_eq!(mat.as_flat(), &[0, 0, 7, 0, 8, 0, 6, 0, 9]);
        assert_eq!(mat.rows()[0], vec3(0, 0, 7));
        assert_eq!(mat.get(1, 1), Some(&8));
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.get(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn column_out_of_bounds() {
        Mat2i::zero().column(2);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(Mat3u::splat(0), Mat3u::zero());
        assert_eq!(Mat3u::splat(1), Mat3u::identity());
        assert_eq!(Mat4d::splat(2.5).trace(), 10.0);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat4i::default(), Mat4i::zero());
    }

    #[test]
    fn hadamard_covers_every_element() {
        let a = Mat3i::from_fn(|r, c| (r * 3 + c) as i32 + 1);
        let b = Mat3i::splat(1) + Mat3i::from_fn(|_, _| 1);
        let h = a.hadamard(b);
        #[rustfmt::skip]
        assert_eq!(h, Matrix::from_rows([
            [2, 2, 3],
            [4, 10, 6],
            [7, 8, 18],
        ]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);
        assert_eq!(Mat4f::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(testmat.determinant(), 30);
        assert_eq!(testmat.transpose().determinant(), 30);
        assert_eq!(Mat4i::splat(2).determinant(), 16);
    }

    #[test]
    fn determinant_with_negative_minor() {
        // The minor of entry (0, 1) has determinant -1.
        #[rustfmt::skip]
        let m = Mat4i::from_rows([
            [1, 0, 0, 0],
            [0, 1, 0, 1],
            [0, 0, 1, 0],
            [1, 0, 0, 1],
        ]);
        assert_eq!(m.minor(0, 1).determinant(), -1);
        assert_eq!(m.determinant(), 1);
        assert_eq!(m.map(|x| x as f32).determinant(), 1.0);
    }

    #[test]
    fn invert() {
        let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.invert();
        assert_approx_eq!(m * inv, Mat2d::identity()).abs(1e-12);
        assert_approx_eq!(inv * m, Mat2d::identity()).abs(1e-12);
        assert_eq!(Mat2f::ZERO.try_invert(), None);
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular() {
        Mat2i::zero().invert();
    }

    #[test]
    fn rotation_2d() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.invert());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert()).abs(1e-6);

        let cw = Mat2f::rotation_clockwise(FRAC_PI_2);
        assert_approx_eq!(cw * vec2(0.0, 1.0), vec2(1.0, 0.0));
        assert_approx_eq!(cw * Mat2f::rotation_counterclockwise(FRAC_PI_2), Mat2f::identity());
    }

    #[test]
    fn plane_rotation_layout() {
        let (sin, cos) = 0.3f32.sin_cos();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (i, j) = axis.plane();
            let m = Mat3f::plane_rotation(axis, 0.3);
            let t = Mat4f::homogeneous_plane_rotation(axis, 0.3);
            let r = Mat4f::plane_rotation(axis, 0.3);
            for row in 0..4 {
                for col in 0..4 {
                    let pos = (row, col);
                    let expected = if pos == (i, i) || pos == (j, j) {
                        cos
                    } else if pos == (i, j) {
                        -sin
                    } else if pos == (j, i) {
                        sin
                    } else {
                        0.0
                    };
                    if row < 3 && col < 3 {
                        assert_eq!(m[(row, col)], expected, "{axis:?} ({row}, {col})");
                    }
                    assert_eq!(r[(row, col)], expected, "{axis:?} ({row}, {col})");
                    let expected = if (row, col) == (3, 3) { 1.0 } else { expected };
                    assert_eq!(t[(row, col)], expected, "{axis:?} ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn rotation_3d() {
        assert_approx_eq!(Mat3f::rotation(Axis::X, FRAC_PI_2) * Vec3f::Y, Vec3f::Z);
        assert_approx_eq!(Mat3f::rotation(Axis::Y, FRAC_PI_2) * Vec3f::Z, Vec3f::X);
        assert_approx_eq!(Mat3f::rotation(Axis::Z, FRAC_PI_2) * Vec3f::X, Vec3f::Y);

        let m = Mat3f::rotation(Axis::Y, 1.2);
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-6);
        assert_approx_eq!(m * m.transpose(), Mat3f::identity()).abs(1e-6);

        let h = Mat4f::rotation(Axis::Z, FRAC_PI_2);
        assert_approx_eq!(h * vec4(1.0, 0.0, 3.0, 1.0), vec4(0.0, 1.0, 3.0, 1.0));
    }
}

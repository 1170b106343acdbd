use std::{array, fmt};

use crate::{
    traits::{Abs, Float, Lerp, MinMax, Number, One, Round, Signed, Trig, Zero},
    Mat2,
};

mod ops;
mod view;

pub use view::{RGB, RGBA, XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element vector storing elements of type `T`.
///
/// Vectors are plain values: every operation takes its operands by value and returns a new
/// vector. Arithmetic operators (`+`, `-`, `*`, `/`, `%`) work element-wise, and `*`, `/` and `%`
/// additionally accept a scalar right-hand side.
///
/// # Construction
///
/// - [`vec2`], [`vec3`] and [`vec4`] take the components as arguments.
/// - [`Vector::splat`] broadcasts one value to every component.
/// - [`Vector::from_fn`] computes each component from its index.
/// - `[T; N]` converts into `Vector<T, N>` via [`From`].
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones respectively.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing along the
///   coordinate axes.
/// - [`Sum`] and [`Product`] fold any number of vectors, starting from [`Vector::ZERO`] and
///   [`Vector::ONE`].
///
/// # Element Access
///
/// - Components are readable and writable as the fields `x`, `y`, `z` and `w`. Vectors with 3 or 4
///   components additionally expose `r`, `g`, `b` and `a`, which alias the same storage.
/// - [`Index`]/[`IndexMut`] work with `usize` indices and ranges, like on `[T; N]`.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the storage;
///   [`AsRef`], [`AsMut`] and [`From`] do the same generically.
/// - The type is `#[repr(transparent)]` over `[T; N]`. It implements [`bytemuck::Pod`] and
///   [`bytemuck::Zeroable`] when `T` does, and [`bytemuck::TransparentWrapper`] so that arrays (and
///   slices of arrays) can be reinterpreted as vectors without copying.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Sum`]: std::iter::Sum
/// [`Product`]: std::iter::Product
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
// Safety: `Vector` is `#[repr(transparent)]` over `[T; N]`.
unsafe impl<T, const N: usize> bytemuck::TransparentWrapper<[T; N]> for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All components 0.
    ///
    /// This is the additive identity, and the starting value of [`Sum`][std::iter::Sum].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// All components 1.
    ///
    /// This is the identity of element-wise multiplication, and the starting value of
    /// [`Product`][std::iter::Product].
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every component set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with each component index, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let squares: Vec4u = Vector::from_fn(|i| (i * i) as u32);
    /// assert_eq!(squares, vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Returns the vector of `f` applied to each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = vec3(1.5, -2.5, 3.0).map(|e| e as i32);
    /// assert_eq!(v, vec3(1, -2, 3));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the components of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = vec2(1, 2).zip(vec2("1", "2"));
    /// assert_eq!(v, vec2((1, "1"), (2, "2")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|a| match other.next() {
            Some(b) => (a, b),
            None => unreachable!("both vectors have `N` elements"),
        }))
    }

    /// Borrows the components as an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the components as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the components as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let mut v = vec4(4, 3, 2, 1);
    /// v.as_mut_slice().sort();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the component array. Same as the `From` conversion, without a type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`] (its dot product with itself).
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// assert_eq!(vec3(1u32, 2, 2).length2(), 9);
    /// ```
    #[doc(alias = "sqrlen")]
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`] (its euclidean norm).
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "mag", alias = "magnitude", alias = "l2_norm")]
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length2().sqrt()
    }

    /// Returns the sum of the absolute values of all elements (the *taxicab* norm).
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(1, -2, 3).l1_norm(), 6);
    /// assert_eq!(vec2(-0.5, 0.25).l1_norm(), 0.75);
    /// ```
    #[doc(alias = "manhattan")]
    pub fn l1_norm(&self) -> T
    where
        T: Number + Abs,
    {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem.abs())
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Normalizing a zero-length vector divides by zero and yields a vector of NaNs. Use
    /// [`Vector::try_normalize`] to detect that case instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3f::Z);
    /// assert_eq!(vec2(-3.0, 4.0).normalize(), vec2(-0.6, 0.8));
    ///
    /// assert!(Vec2f::ZERO.normalize().x.is_nan());
    /// ```
    #[doc(alias = "unit", alias = "norm")]
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        self / self.length()
    }

    /// Divides this vector by its length, or returns [`None`] if its length is zero, infinite, or
    /// NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(vec2(0.0, -1.0)));
    /// assert_eq!(Vec3f::ZERO.try_normalize(), None);
    /// assert_eq!(vec2(f32::INFINITY, 0.0).try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self>
    where
        T: Float,
    {
        let length = self.length();
        // `length * 0` is NaN for infinite lengths; `>` is false for NaN.
        if length > T::ZERO && length * T::ZERO == T::ZERO {
            Some(self / length)
        } else {
            log::trace!("cannot normalize vector of length {:?}", length);
            None
        }
    }

    /// Returns the sum of the component-wise products of `self` and `other`.
    ///
    /// The sign tells whether the two vectors point into the same half-space (positive), are
    /// perpendicular (zero), or point away from each other (negative).
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Reflects `self` off a surface with the given `normal`: `self - 2 * dot(self, normal) * normal`.
    ///
    /// `normal` should have unit length, otherwise the result is scaled along `normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = vec2(1.0, -1.0);
    /// assert_eq!(v.reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        self - normal * (two * self.dot(normal))
    }

    /// Returns the unit vector pointing from `self` towards `target`.
    ///
    /// If both points are equal, the result is a vector of NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let dir = vec3(1.0, 1.0, 1.0).direction_to(vec3(1.0, 5.0, 1.0));
    /// assert_eq!(dir, Vec3f::Y);
    /// ```
    #[doc(alias = "direction")]
    pub fn direction_to(self, target: Self) -> Self
    where
        T: Float,
    {
        (target - self).normalize()
    }

    /// Component-wise minimum. For floats, a NaN component loses against a number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, -4.0, 0.5);
    /// assert_eq!(a.min(b), vec3(-1.0, -4.0, 0.5));
    /// assert_eq!(b.min(a), vec3(-1.0, -4.0, 0.5));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Component-wise maximum. For floats, a NaN component loses against a number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(1u32, 7).max(vec2(4, 2)), vec2(4, 7));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Restricts each component to the range given by the corresponding components of `min` and
    /// `max`.
    ///
    /// # Panics
    ///
    /// Panics if any element of `min` is greater than the corresponding element of `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let v = vec3(-5, 5, 0).clamp(Vector::splat(-1), Vector::splat(1));
    /// assert_eq!(v, vec3(-1, 1, 0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Element-wise absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(-1, 0, 1).abs(), vec3(1, 0, 1));
    /// ```
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Rounds each element towards negative infinity.
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(1.5, -1.5).floor(), vec2(1.0, -2.0));
    /// ```
    pub fn floor(self) -> Self
    where
        T: Round,
    {
        self.map(T::floor)
    }

    /// Rounds each element towards positive infinity.
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(1.5, -1.5).ceil(), vec2(2.0, -1.0));
    /// ```
    pub fn ceil(self) -> Self
    where
        T: Round,
    {
        self.map(T::ceil)
    }

    /// Linearly interpolates each element between `self` and `other`, using the corresponding
    /// element of `t` as the interpolation factor.
    ///
    /// Each element is computed as `a + (b - a) * t`. See [`Lerp`] for how integer elements are
    /// handled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, vec2(0.5, 0.0)), vec2(5.0, 10.0));
    ///
    /// // Integer vectors interpolate with `f32` factors.
    /// assert_eq!(vec2(0, 10).lerp(vec2(10, 0), Vector::splat(0.5f32)), vec2(5, 5));
    /// ```
    pub fn lerp(self, other: Self, t: Vector<T::Factor, N>) -> Self
    where
        T: Lerp + Copy,
    {
        Self::from_fn(|i| self[i].lerp(other[i], t[i]))
    }

    /// Element-wise division that returns [`None`] if any element of `divisor` is zero.
    ///
    /// The `/` operator instead follows the native semantics of `T`: floats produce infinities
    /// or NaNs, integers panic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(8, 9).checked_div(vec2(2, 3)), Some(vec2(4, 3)));
    /// assert_eq!(vec2(8, 9).checked_div(vec2(2, 0)), None);
    /// ```
    pub fn checked_div(self, divisor: Self) -> Option<Self>
    where
        T: Number,
    {
        if divisor.0.iter().any(|&elem| elem == T::ZERO) {
            return None;
        }
        Some(self / divisor)
    }

    /// Element-wise remainder that returns [`None`] if any element of `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec2(8u32, 9).checked_rem(vec2(3, 4)), Some(vec2(2, 1)));
    /// assert_eq!(vec2(8u32, 9).checked_rem(vec2(0, 4)), None);
    /// ```
    pub fn checked_rem(self, divisor: Self) -> Option<Self>
    where
        T: Number,
    {
        if divisor.0.iter().any(|&elem| elem == T::ZERO) {
            return None;
        }
        Some(self % divisor)
    }
}

/// The unsigned angle between two vectors in radians, in `0..=π`.
///
/// The cosine is clamped into `-1..=1` so that rounding errors on (anti)parallel inputs don't turn
/// into NaN. Zero-length inputs still result in NaN.
fn angle_between<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    let cos = a.normalize().dot(b.normalize());
    cos.clamp(-T::ONE, T::ONE).acos()
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector.
    ///
    /// Returns the remaining element.
    pub fn truncate(self) -> T {
        let [x, _] = self.0;
        x
    }

    /// Adds a Z component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Vec2i::Y.extend(5), vec3(0, 1, 5));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Computes the 2D cross product of `self` and `other`: `self.x * other.y - self.y * other.x`.
    ///
    /// This is the signed area of the parallelogram spanned by both vectors, and equal to the Z
    /// coordinate of the 3D cross product of both vectors extended with Z=0. It is positive if
    /// `other` is counterclockwise from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.cross(Vec2f::X), -1.0);
    /// assert_eq!(vec2(2, 0).cross(vec2(0, 3)), 6);
    /// ```
    #[doc(alias = "perp_dot")]
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [a1, a2] = self.0;
        let [b1, b2] = other.0;
        a1 * b2 - a2 * b1
    }

    /// Returns the unsigned angle between `self` and `other` in radians, in `0..=π`.
    ///
    /// NaN if either vector has zero length.
    ///
    /// The angle is computed from the cosine, so precision degrades for nearly parallel or
    /// antiparallel inputs (angles near 0 and π). With `f32` the error there can reach about
    /// `1e-3` radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// assert_approx_eq!(Vec2f::Y.angle_between(Vec2f::X), PI / 2.0);
    /// assert_approx_eq!(vec2(1.0, 1.0).angle_between(vec2(-1.0, -1.0)), PI).abs(1e-3);
    /// ```
    pub fn angle_between(self, other: Self) -> T
    where
        T: Float,
    {
        angle_between(self, other)
    }

    /// Rotates `self` clockwise by `radians`, with X pointing right and Y pointing up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(FRAC_PI_2), Vec2f::X).abs(1e-6);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise by `radians`, with X pointing right and Y pointing up.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Signed + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Returns the angle `self` has to be rotated *clockwise* by to point in the direction of
    /// `other`, in `-π..=π`.
    ///
    /// Counterclockwise rotations are negative. This assumes a Y-up coordinate system; with Y
    /// pointing down the sign flips.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), FRAC_PI_2);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(vec2(0.0, 3.0)), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Signed + Trig,
    {
        -self.cross(other).atan2(self.dot(other))
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Adds a W component: 1 for a point in homogeneous coordinates, 0 for a direction.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Returns the right-handed cross product, perpendicular to both `self` and `other`.
    ///
    /// Its length is the area of the parallelogram spanned by the two vectors. The product is
    /// anticommutative: `a.cross(b) == -b.cross(a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3i::Z.cross(Vec3i::Y), -Vec3i::X);
    /// assert_eq!(vec3(2, 0, 0).cross(vec3(4, 0, 0)), Vec3i::ZERO);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        Vector([
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ])
    }

    /// Returns the unsigned angle between `self` and `other` in radians, in `0..=π`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// use std::f64::consts::PI;
    ///
    /// assert_approx_eq!(Vec3d::Y.angle_between(Vec3d::Z), PI / 2.0);
    /// assert_approx_eq!(Vec3d::Y.angle_between(-Vec3d::Y), PI);
    /// ```
    pub fn angle_between(self, other: Self) -> T
    where
        T: Float,
    {
        angle_between(self, other)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the W component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varia_linalg::*;
    /// assert_eq!(vec4(-1, 2, 3, 1).truncate(), vec3(-1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Formats as a tuple, eg. `(1.0, 2.0)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |tup, elem| tup.field(elem))
            .finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Shorthand for `Vector::from([x, y])`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for `Vector::from([x, y, z])`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for `Vector::from([x, y, z, w])`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use crate::{approx::ApproxEq, assert_approx_eq};

    use super::*;

    #[test]
    fn access() {
        let p = vec3(4.0, 5.0, 6.0);
        assert_eq!((p.x, p[1], p.z), (4.0, 5.0, 6.0));
        assert_eq!(p.as_slice()[1..], [5.0, 6.0]);
        assert_eq!((Vec4f::W.w, Vec4f::W.a, Vec4f::W[3]), (1.0, 1.0, 1.0));

        let mut v = vec3(0, 1, 2);
        assert_eq!((v.x, v.y, v.z), (0, 1, 2));
        assert_eq!((v.r, v.g, v.b), (0, 1, 2));

        v.r = -8;
        v[1] += 10;
        v.z = 9;
        assert_eq!((v.x, v.g, v.b), (-8, 11, 9));
        assert_eq!(v, [-8, 11, 9]);

        let mut c = vec4(0.0, 0.25, 0.5, 1.0);
        c.a = 0.5;
        c.x = 1.0;
        assert_eq!(c.w, 0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.as_array(), &[1.0, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1.5f32, -2.0, 0.0)), "(1.5, -2, 0)");
        assert_eq!(format!("{:?}", vec3(1.5f32, -2.0, 0.0)), "(1.5, -2.0, 0.0)");
        assert_eq!(format!("{:?}", vec2(1u32, 2)), "(1, 2)");
        assert_eq!(format!("{:.1}", vec2(0.125, 1.0)), "(0.1, 1.0)");
    }

    #[test]
    fn constants() {
        assert_eq!(Vec3u::ZERO, [0, 0, 0]);
        assert_eq!(Vec4i::ONE, [1, 1, 1, 1]);
        assert_eq!(Vec2d::Y, [0.0, 1.0]);
        assert_eq!(Vector::splat(7u32), vec4(7, 7, 7, 7));
    }

    #[test]
    fn rotate() {
        let v = vec2(3.0f32, 1.0);
        assert_approx_eq!(v.rotate_clockwise(TAU / 4.0), vec2(1.0, -3.0)).abs(1e-6);
        assert_approx_eq!(v.rotate_counterclockwise(TAU / 4.0), vec2(-1.0, 3.0)).abs(1e-6);
        assert_approx_eq!(v.rotate_clockwise(TAU / 2.0), -v).abs(1e-6);
        assert_approx_eq!(v.rotate_clockwise(0.7).rotate_counterclockwise(0.7), v).abs(1e-6);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(2, -1, 4).dot(vec3(3, 6, 1)), 4);
        assert_eq!(vec3(2, -1, 4).dot(vec3(2, -1, 4)), 21);
        assert_eq!(vec4(1u32, 2, 3, 4).dot(Vector::ONE), 10);
        assert_eq!(vec2(0.5, 0.25).dot(vec2(4.0, -8.0)), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
        assert_eq!(Vec3i::Y.cross(Vec3i::Z), Vec3i::X);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);

        let a = vec3(2, -3, 7);
        let b = vec3(-1, 4, 5);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(b).dot(a), 0);
        assert_eq!(a.cross(b).dot(b), 0);

        assert_eq!(vec2(1, 2).cross(vec2(3, 4)), -2);
        assert_eq!(vec2(3, 4).cross(vec2(1, 2)), 2);
    }

    #[test]
    fn norms() {
        assert_eq!(Vec3f::ZERO.length(), 0.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(vec3(-1, 2, -3).l1_norm(), 6);
        assert_eq!(vec3(1u32, 2, 3).l1_norm(), 6);
        assert_eq!(vec2(3, 4).length2(), 25);
    }

    #[test]
    fn normalize() {
        let v = vec3(3.0, -4.0, 12.0).normalize();
        assert_approx_eq!(v.length(), 1.0);
        assert_approx_eq!(v, vec3(3.0 / 13.0, -4.0 / 13.0, 12.0 / 13.0));

        let zero = Vec3d::ZERO.normalize();
        assert!(zero.as_array().iter().all(|e| e.is_nan()));
        assert_eq!(Vec3d::ZERO.try_normalize(), None);
        assert_eq!(vec2(f64::NAN, 1.0).try_normalize(), None);
    }

    #[test]
    fn reflect() {
        assert_eq!(vec3(1, -1, 2).reflect(Vec3i::Y), vec3(1, 1, 2));
        assert_eq!(vec2(3.0, 5.0).reflect(Vec2f::X), vec2(-3.0, 5.0));

        let n = vec3(1.0, 1.0, 0.0).normalize();
        let v = vec3(0.5, -2.0, 3.0);
        assert_approx_eq!(v.reflect(n).reflect(n), v).abs(1e-6);
    }

    #[test]
    fn direction() {
        let dir = vec2(1.0, 1.0).direction_to(vec2(4.0, 5.0));
        assert_approx_eq!(dir, vec2(0.6, 0.8));
        assert!(Vec2f::X.direction_to(Vec2f::X).x.is_nan());
    }

    #[test]
    fn angle_between() {
        assert_approx_eq!(Vec3f::Y.angle_between(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::X.angle_between(Vec3f::Y), TAU / 4.0);

        assert_approx_eq!(Vec3f::Y.angle_between(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.angle_between(-Vec3f::Y), PI);
        assert_approx_eq!(Vec3f::Y.angle_between(-Vec3f::X), TAU / 4.0);

        assert_approx_eq!(vec2(0.0, 2.0).angle_between(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle_between(vec2(1.0, -1.0)), TAU / 4.0);

        // Nearly parallel inputs must not produce NaN from rounding.
        let a = vec3(0.1f32, 0.2, 0.3);
        assert!(!a.angle_between(a * 3.0).is_nan());
    }

    #[test]
    fn angle_between_antiparallel() {
        let a = vec2(1.0f32, 1.0);
        let angle = a.angle_between(-a);
        assert!(!angle.is_nan());
        assert!(angle <= PI);
        assert_approx_eq!(angle, PI).abs(1e-3);

        let b = vec3(0.3f32, -1.7, 2.9);
        assert_approx_eq!(b.angle_between(b * -2.5), PI).abs(1e-3);

        let d = vec2(1.0f64, 1.0);
        assert_approx_eq!(d.angle_between(-d), std::f64::consts::PI).abs(1e-6);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(vec2(0.0, 2.0).signed_angle_to(vec2(5.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 0.0).signed_angle_to(vec2(-1.0, 1.0)), -3.0 * PI / 4.0);
        assert_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);

        assert_approx_eq!(
            Vec2f::Y
                .rotate_counterclockwise(100.0f32.to_radians())
                .signed_angle_to(Vec2f::Y),
            100.0f32.to_radians()
        )
        .abs(1e-6);
    }

    #[test]
    fn elementwise() {
        let a = vec4(-1.5, 2.5, 0.0, 7.0);
        let b = vec4(1.0, -2.0, 0.0, 8.0);
        assert_eq!(a.min(b), vec4(-1.5, -2.0, 0.0, 7.0));
        assert_eq!(a.max(b), vec4(1.0, 2.5, 0.0, 8.0));
        assert_eq!(a.abs(), vec4(1.5, 2.5, 0.0, 7.0));
        assert_eq!(a.floor(), vec4(-2.0, 2.0, 0.0, 7.0));
        assert_eq!(a.ceil(), vec4(-1.0, 3.0, 0.0, 7.0));
        assert_eq!(
            a.clamp(Vector::splat(-1.0), Vector::splat(1.0)),
            vec4(-1.0, 1.0, 0.0, 1.0)
        );
        assert_eq!(vec3(5u32, 0, 9).min(vec3(3, 1, 9)), vec3(3, 0, 9));
    }

    #[test]
    #[should_panic]
    fn clamp_inverted_range() {
        vec2(0, 0).clamp(vec2(0, 5), vec2(1, 4));
    }

    #[test]
    fn lerp() {
        let a = vec3(0.0f64, 1.0, -4.0);
        let b = vec3(10.0, 1.0, 4.0);
        assert_eq!(a.lerp(b, Vector::splat(0.0)), a);
        assert_eq!(a.lerp(b, Vector::splat(1.0)), b);
        assert_eq!(a.lerp(b, vec3(0.5, 0.5, 0.25)), vec3(5.0, 1.0, -2.0));

        assert_eq!(vec2(10u32, 2).lerp(vec2(20, 0), Vector::splat(2.0f32)), vec2(30, 0));
        assert_eq!(vec2(-10, 10).lerp(vec2(10, -10), Vector::splat(0.5f32)), vec2(0, 0));
    }

    #[test]
    fn checked() {
        assert_eq!(vec3(1, 2, 3).checked_div(vec3(1, 0, 1)), None);
        assert_eq!(vec3(9, 8, 7).checked_rem(vec3(2, 3, 4)), Some(vec3(1, 2, 3)));
        assert_eq!(vec2(1.0, 1.0).checked_div(vec2(0.0, 1.0)), None);
    }

    #[test]
    fn tolerance_eq() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(1.0000001f32, 2.0);
        assert!(a.abs_diff_eq(&b, 1e-4));
        assert!(!a.abs_diff_eq(&b, 1e-9));
        assert!(vec3(1.0f64, 2.0, 3.0).abs_diff_eq(&vec3(1.1, 1.9, 3.0), 0.11));
        assert!(!vec3(1.0f64, 2.0, 3.0).abs_diff_eq(&vec3(1.1, 1.9, 3.2), 0.11));
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
        assert_eq!(vec2(1, 2).truncate(), 1);
    }
}

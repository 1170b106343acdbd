//! Scalar helper functions.
//!
//! These are the building blocks the element-wise [`Vector`][crate::Vector] operations are defined
//! in terms of, exposed as free functions for use on plain numbers.

use crate::traits::{Abs, Lerp, MinMax};

/// Returns the smaller of `a` and `b`.
///
/// For floats, a NaN argument is ignored and the other argument is returned, regardless of
/// argument order. This differs from the comparison `if a < b { a } else { b }`, which returns `b`
/// whenever either argument is NaN.
///
/// # Examples
///
/// ```
/// # use varia_linalg::scalar;
/// assert_eq!(scalar::min(3, -7), -7);
/// assert_eq!(scalar::min(2u32, 9), 2);
/// assert_eq!(scalar::min(f32::NAN, 1.0), 1.0);
/// ```
#[inline]
pub fn min<T: MinMax>(a: T, b: T) -> T {
    a.min(b)
}

/// Returns the larger of `a` and `b`.
///
/// For floats, a NaN argument is ignored and the other argument is returned, regardless of
/// argument order. This differs from the comparison `if a > b { a } else { b }`, which returns `b`
/// whenever either argument is NaN.
///
/// # Examples
///
/// ```
/// # use varia_linalg::scalar;
/// assert_eq!(scalar::max(3, -7), 3);
/// assert_eq!(scalar::max(0.5, 0.25), 0.5);
/// assert_eq!(scalar::max(1.0, f64::NAN), 1.0);
/// ```
#[inline]
pub fn max<T: MinMax>(a: T, b: T) -> T {
    a.max(b)
}

/// Restricts `x` to the range `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`, or if either bound is NaN.
///
/// # Examples
///
/// ```
/// # use varia_linalg::scalar;
/// assert_eq!(scalar::clamp(15, 0, 10), 10);
/// assert_eq!(scalar::clamp(-1.5, -1.0, 1.0), -1.0);
/// assert_eq!(scalar::clamp(5u32, 1, 7), 5);
/// ```
#[inline]
pub fn clamp<T: MinMax>(x: T, min: T, max: T) -> T {
    x.clamp(min, max)
}

/// Linearly interpolates between `a` and `b`: `a + (b - a) * t`.
///
/// `t` is not restricted to `0..=1`, values outside that range extrapolate. Integer results are
/// truncated towards zero and saturate at the bounds of the integer type (so [`u32`] results never
/// go below 0).
///
/// # Examples
///
/// ```
/// # use varia_linalg::scalar;
/// assert_eq!(scalar::lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(scalar::lerp(0, 9, 0.5f32), 4);
/// assert_eq!(scalar::lerp(8u32, 2, 2.0f32), 0);
/// ```
#[inline]
pub fn lerp<T: Lerp>(a: T, b: T, t: T::Factor) -> T {
    a.lerp(b, t)
}

/// Returns the absolute value of `x`.
///
/// ```
/// # use varia_linalg::scalar;
/// assert_eq!(scalar::abs(-4), 4);
/// assert_eq!(scalar::abs(4u32), 4);
/// ```
#[inline]
pub fn abs<T: Abs>(x: T) -> T {
    x.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max() {
        assert_eq!(min(1.0f64, 2.0), 1.0);
        assert_eq!(max(1.0f64, 2.0), 2.0);
        assert_eq!(min(i32::MIN, 0), i32::MIN);
        assert_eq!(max(u32::MAX, 0), u32::MAX);
    }

    #[test]
    fn min_max_ignore_nan() {
        assert_eq!(min(1.0f32, f32::NAN), 1.0);
        assert_eq!(min(f32::NAN, 1.0f32), 1.0);
        assert_eq!(max(-1.0f64, f64::NAN), -1.0);
        assert_eq!(max(f64::NAN, -1.0f64), -1.0);
        assert!(min(f32::NAN, f32::NAN).is_nan());
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-3, -2, 2), -2);
        assert_eq!(clamp(3, -2, 2), 2);
        assert_eq!(clamp(1, 1, 1), 1);
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    #[should_panic]
    fn clamp_rejects_inverted_range() {
        clamp(0.5f32, 1.0, 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-1.0f32, 1.0, 0.0), -1.0);
        assert_eq!(lerp(-1.0f32, 1.0, 1.0), 1.0);
        assert_eq!(lerp(-10, 10, 0.75f32), 5);
        assert_eq!(lerp(3u32, 3, 100.0f32), 3);
    }
}

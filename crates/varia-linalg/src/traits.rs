//! Traits describing the scalar element kinds of vectors and matrices.
//!
//! The library is written against these traits instead of against concrete types. They are
//! implemented for [`f32`], [`f64`], [`i32`] and [`u32`] (and, where it is free to do so, for the
//! other primitive integers).

use std::{fmt, ops};

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes the sine and cosine of `self` at the same time.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
///
/// Only implemented for floating-point types; there is no integer square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that can be rounded towards negative or positive infinity.
pub trait Round {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
}

/// Types that have an absolute value.
///
/// Unsigned integers implement this as the identity function.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min`, `max` and `clamp` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`], [`f32::max`] and
/// [`f32::clamp`] functions ([`f64::min`], [`f64::max`] and [`f64::clamp`] respectively).
/// Built-in integer types implement it in terms of [`Ord::min`], [`Ord::max`] and [`Ord::clamp`].
///
/// # Panics
///
/// [`MinMax::clamp`] panics if `min > max`, or if either bound is NaN.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self;
}

/// Types that support linear interpolation.
///
/// `lerp(a, b, t)` computes `a + (b - a) * t`. Floating-point types interpolate with a factor of
/// their own type. Integer types use an [`f32`] factor, truncate the scaled difference towards
/// zero, and saturate at the bounds of the type.
pub trait Lerp: Sized {
    /// The type of the interpolation factor `t`.
    type Factor: Copy;

    fn lerp(self, other: Self, t: Self::Factor) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is implemented for both signed and unsigned types. Operations that need negation require
/// [`Signed`] instead.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Rem<Output = Self>
    + PartialOrd
    + Copy
    + fmt::Debug
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::Rem<Output = Self>
        + PartialOrd
        + Copy
        + fmt::Debug
{
}

/// [`Number`]s that can be negated.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Floating-point numbers.
///
/// Everything that needs a square root, trigonometry or rounding is restricted to these.
pub trait Float: Signed + Sqrt + Trig + Round + Abs + MinMax {}
impl<T> Float for T where T: Signed + Sqrt + Trig + Round + Abs + MinMax {}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                fn clamp(self, min: Self, max: Self) -> Self {
                    Ord::clamp(self, min, max)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }

                fn clamp(self, min: Self, max: Self) -> Self {
                    self.clamp(min, max)
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Round for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Lerp for $types {
                type Factor = Self;

                fn lerp(self, other: Self, t: Self) -> Self {
                    self + (other - self) * t
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl Abs for i32 {
    fn abs(self) -> Self {
        self.abs()
    }
}

impl Abs for u32 {
    fn abs(self) -> Self {
        self
    }
}

// The scaled difference is computed in `f64`, which represents every `i32`/`u32` difference
// exactly. Float-to-int `as` casts truncate and saturate.

impl Lerp for i32 {
    type Factor = f32;

    fn lerp(self, other: Self, t: f32) -> Self {
        let delta = ((f64::from(other) - f64::from(self)) * f64::from(t)) as i64;
        Ord::clamp(i64::from(self) + delta, i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl Lerp for u32 {
    type Factor = f32;

    fn lerp(self, other: Self, t: f32) -> Self {
        let delta = ((f64::from(other) - f64::from(self)) * f64::from(t)) as i64;
        Ord::clamp(i64::from(self) + delta, 0, i64::from(u32::MAX)) as u32
    }
}

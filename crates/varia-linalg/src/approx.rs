//! Tolerance-based comparison of floating-point values, vectors and matrices.
//!
//! Results of float arithmetic are rarely bit-identical to the value one would compute by hand.
//! [`ApproxEq`] compares two values within a tolerance, component by component, and the
//! [`assert_approx_eq!`][crate::assert_approx_eq] / [`assert_approx_ne!`][crate::assert_approx_ne]
//! macros turn that into test assertions.
//!
//! Three kinds of comparison are supported:
//!
//! - *absolute*: `|a - b| <= tolerance`,
//! - *relative*: `|a - b| <= max(|a|, |b|) * tolerance`,
//! - *ULPs*: at most `n` representable floats lie between `a` and `b`.
//!
//! Background on picking between them:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

mod impls;

use std::{fmt, panic::Location};

/// Values that can be compared within a tolerance.
///
/// Vectors, matrices, arrays and slices are approximately equal when every pair of corresponding
/// components is. Non-finite floats only compare equal to themselves (and NaN to nothing).
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// use varia_linalg::approx::ApproxEq;
///
/// let a = vec2(1.0, 2.0);
/// let b = vec2(1.0000001, 2.0);
/// assert!(a.abs_diff_eq(&b, 1e-4));
/// assert!(!a.abs_diff_eq(&b, 1e-9));
/// ```
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The float type tolerances are expressed in ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance` holds for every component.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether every component pair differs by at most `rel_tolerance` times the larger
    /// of the two magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether every component pair is at most `ulps_tolerance` [ULPs] apart.
    ///
    /// `-0.0` and `+0.0` are 0 ULPs apart. Any other pair of values with different signs is
    /// never equal, regardless of tolerance.
    ///
    /// [ULPs]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Tolerances used by the assertion macros when none are configured.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
}

/// Which comparisons an [`Asserter`] performs. The values are equal if any enabled one says so.
#[derive(Clone, Copy)]
struct Tolerances<E> {
    abs: Option<E>,
    rel: Option<E>,
    ulps: Option<u32>,
}

impl<E: DefaultTolerances + Copy> Tolerances<E> {
    fn is_empty(&self) -> bool {
        self.abs.is_none() && self.rel.is_none() && self.ulps.is_none()
    }

    fn or_defaults(&self) -> Self {
        if self.is_empty() {
            Self {
                abs: Some(E::DEFAULT_ABS_TOLERANCE),
                rel: Some(E::DEFAULT_REL_TOLERANCE),
                ulps: None,
            }
        } else {
            *self
        }
    }

    fn accepts<T: ApproxEq<Tolerance = E> + ?Sized>(&self, left: &T, right: &T) -> bool {
        self.abs.is_some_and(|tol| left.abs_diff_eq(right, tol))
            || self.rel.is_some_and(|tol| left.rel_diff_eq(right, tol))
            || self.ulps.is_some_and(|tol| left.ulps_diff_eq(right, tol))
    }
}

/// Pending approximate assertion, created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the guard is dropped (normally at the end of the statement), so the
/// comparison can be tuned by chaining [`abs`](Self::abs), [`rel`](Self::rel) and
/// [`ulps`](Self::ulps). With several of them, the values count as equal when any one comparison
/// accepts them. With none, an absolute and a relative comparison against the type's
/// [`DefaultTolerances`] (machine epsilon) are used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect: Expect,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    tolerances: Tolerances<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect: Expect,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect,
            location: Location::caller(),
            msg,
            tolerances: Tolerances {
                abs: None,
                rel: None,
                ulps: None,
            },
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Use this near zero, eg. for the entries of a rotation matrix that should vanish.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.tolerances.abs = Some(tolerance);
        self
    }

    /// Compares the difference relative to the larger magnitude against `tolerance`.
    ///
    /// Use this for values far from zero. Nothing but zero is within a relative tolerance
    /// below 1.0 of zero.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.tolerances.rel = Some(tolerance);
        self
    }

    /// Allows at most `ulps` representable floats between the values.
    ///
    /// Scales with the magnitude of the values, but fails for tiny values of opposite sign.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.tolerances.ulps = Some(ulps);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does nothing on `drop`; `location` was captured in `new`.
    fn drop(&mut self) {
        let equal = self.tolerances.or_defaults().accepts(self.left, self.right);
        if equal != (self.expect == Expect::Equal) {
            assertion_failed(self.left, self.right, self.expect, self.location, self.msg);
        }
    }
}

#[cold]
fn assertion_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect: Expect,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match expect {
        Expect::Equal => "==",
        Expect::NotEqual => "!=",
    };
    let msg = match msg {
        Some(msg) => format!(": {msg}"),
        None => String::new(),
    };
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}");
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Equal,
    NotEqual,
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_assertion {
    ($expect:ident, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::$expect,
            ::core::option::Option::None,
        )
    };
    ($expect:ident, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::$expect,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Like [`assert_eq!`], but compares with [`ApproxEq`].
///
/// Returns an [`Asserter`] whose methods select the comparison and tolerance; see its docs for
/// the defaults. An optional trailing format string is included in the panic message.
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// let sum = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(sum, 1.0);
///
/// let rot = Mat2f::rotation_counterclockwise(std::f32::consts::FRAC_PI_2);
/// assert_approx_eq!(rot * Vec2f::X, Vec2f::Y).abs(1e-6);
///
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON, "off by {} ulp", 1).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($t:tt)+) => {
        $crate::__approx_assertion!(Equal, $($t)+)
    };
}

/// Like [`assert_ne!`], but compares with [`ApproxEq`].
///
/// The assertion passes when *no* configured comparison accepts the values.
///
/// # Examples
///
/// ```
/// # use varia_linalg::*;
/// assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.01)).abs(1e-3);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($t:tt)+) => {
        $crate::__approx_assertion!(NotEqual, $($t)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2f, Matrix, Vec3f};

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn eq_failure() {
        assert_approx_eq!(vec2(1.0f32, 2.0), vec2(1.0, 2.5));
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn ne_failure() {
        assert_approx_ne!(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "normals differ by 3")]
    fn custom_message() {
        assert_approx_eq!(Vec3f::X, Vec3f::Z, "normals differ by {}", 3);
    }

    #[test]
    #[should_panic(expected = "right: (0.0, 1.0)")]
    fn message_shows_operands() {
        assert_approx_eq!(vec2(1.0f32, 0.0), vec2(0.0, 1.0));
    }

    #[test]
    fn any_comparison_suffices() {
        assert_approx_eq!(1000.0, 1001.0).abs(0.1).rel(0.01);
        assert_approx_ne!(1000.0, 1001.0).abs(0.1).ulps(4);
    }

    #[test]
    fn relative_near_zero() {
        assert_approx_ne!(0.0, 1e-30).rel(0.5);
        assert_approx_eq!(0.0, 1e-30).rel(1.0);
        assert_approx_eq!(0.0, 1e-30).abs(1e-20);
    }

    #[test]
    fn default_is_epsilon() {
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON);
        assert_approx_ne!(1.0f32, 1.0 + 2.0 * f32::EPSILON);
    }

    #[test]
    fn signs() {
        assert_approx_eq!(-0.0, 0.0).ulps(0);
        assert_approx_ne!(-1e-30, 1e-30).ulps(u32::MAX);
        assert_approx_eq!(-1e-30, 1e-30).abs(1e-29);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(f32::INFINITY);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(u32::MAX);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).rel(f64::INFINITY);
        assert_approx_ne!(f32::MAX, f32::INFINITY).abs(f32::MAX);
        // The largest finite float is one ULP below infinity.
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }

    #[test]
    fn matrices() {
        let m = Matrix::from_rows([[1.0, 0.0], [0.0, 1.0 + 1e-7]]);
        assert_approx_eq!(m, Mat2f::identity()).abs(1e-6);
        assert_approx_ne!(m, Mat2f::identity()).ulps(0);
        assert_approx_eq!(vec3(0.1 + 0.2, 1.0, -2.0), vec3(0.3, 1.0, -2.0));
    }
}

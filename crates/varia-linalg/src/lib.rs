//! Fixed-size vectors and square matrices for small linear algebra problems.
//!
//! This crate provides two value types:
//!
//! - [`Vector<T, N>`][Vector], with the aliases [`Vec2`], [`Vec3`] and [`Vec4`], and
//! - [`Matrix<T, R, C>`][Matrix], with the aliases [`Mat2`], [`Mat3`] and [`Mat4`].
//!
//! Both are generic over their element type, and are intended to be used with [`f32`], [`f64`],
//! [`i32`] and [`u32`]. Short aliases exist for each of these (eg. [`Vec3f`], [`Vec3d`],
//! [`Vec3i`], [`Vec3u`], [`Mat4f`]). Operations that only make sense for some element kinds (such
//! as [`Vector::length`], which needs a square root) are restricted via the traits in [`traits`].
//!
//! The [`scalar`] module exposes the `min`/`max`/`clamp`/`lerp` building blocks as free functions.
//!
//! # Design
//!
//! - Dimensions are const generics. There are no dynamically-sized vectors or matrices.
//! - Vectors and matrices are plain `Copy` values. Every operation returns a new value; compound
//!   assignment operators (`+=` etc.) only modify their left-hand side.
//! - Matrices are stored row-major, without padding, and can be viewed as a flat slice or as a
//!   slice of row vectors.
//! - Arithmetic follows the native semantics of the element type: float division by zero yields
//!   infinities and NaNs, integer division by zero panics. Checked alternatives that return
//!   [`Option`] are provided where a failure is expected to be handled ([`Vector::try_normalize`],
//!   [`Vector::checked_div`], [`Matrix::try_invert`]).
//!
//! # Examples
//!
//! ```
//! use varia_linalg::*;
//!
//! let rot = Mat3f::rotation(Axis::Z, std::f32::consts::FRAC_PI_2);
//! let v = rot * vec3(1.0, 0.0, 0.0);
//! assert_approx_eq!(v, Vec3f::Y);
//!
//! let n = Vec3f::Y;
//! let bounced = vec3(1.0, -1.0, 0.0).reflect(n);
//! assert_eq!(bounced, vec3(1.0, 1.0, 0.0));
//! ```

pub mod approx;
mod matrix;
pub mod scalar;
pub mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;

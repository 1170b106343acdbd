//! Named field access for [`Vector`]s.
//!
//! `Vector<T, N>` dereferences to one of the `#[repr(C)]` structs in this module, whose fields
//! occupy the same memory as the vector's elements. 3- and 4-element views dereference once more,
//! to a struct with color names for the same fields.

use std::ops::{Deref, DerefMut};

use crate::Vector;

/// Field view of a 2-element [`Vector`].
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// Field view of a 3-element [`Vector`].
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// Field view of a 4-element [`Vector`].
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

/// Color-named field view of a 3-element [`Vector`].
#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

/// Color-named field view of a 4-element [`Vector`].
#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Implements `Deref` and `DerefMut` from `$from` to `$to`.
///
/// Both types must have the same layout: `N` consecutive `T`s, optionally followed by a
/// zero-sized private field.
macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: both types are laid out as the same number of consecutive `T`s.
                unsafe { &*(self as *const Self as *const $to<T>) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self as *mut $to<T>) }
            }
        }
    };
}

view!(Vector<T, 2> => XY);
view!(Vector<T, 3> => XYZ);
view!(Vector<T, 4> => XYZW);
view!(XYZ<T> => RGB);
view!(XYZW<T> => RGBA);

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(size_of::<XY<f64>>(), size_of::<Vector<f64, 2>>());
        assert_eq!(size_of::<XYZ<u32>>(), size_of::<Vector<u32, 3>>());
        assert_eq!(size_of::<XYZW<f32>>(), size_of::<Vector<f32, 4>>());
        assert_eq!(size_of::<RGBA<i32>>(), size_of::<XYZW<i32>>());
        assert_eq!(align_of::<RGB<f64>>(), align_of::<Vector<f64, 3>>());
    }

    #[test]
    fn aliasing() {
        let mut v = Vector::from([1.0f32, 2.0, 3.0, 4.0]);
        v.g = 20.0;
        v.w *= 10.0;
        assert_eq!(v.y, 20.0);
        assert_eq!(v.a, 40.0);
        assert_eq!(v, [1.0, 20.0, 3.0, 40.0]);

        let mut p = Vector::from([5u32, 6]);
        p.y += 1;
        assert_eq!(p[1], 7);
    }
}

//! Named field access (`v.x`, `v.y`, ...) for vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! field_view {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T, S> Deref for Vector<T, $n, S> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `Vector` is `repr(transparent)` over `[T; N]`, and the view is
                    // `repr(C)` with `N` fields of type `T` followed by a ZST.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T, S> DerefMut for Vector<T, $n, S> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see above.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

field_view!(2 => XY, 3 => XYZ, 4 => XYZW);

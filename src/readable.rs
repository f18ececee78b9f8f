//! Read-only views of vector-like and matrix-like values.
//!
//! These traits let constructors accept any value that can *report* its components, without
//! caring how it stores them. They are implemented for [`Vector`], [`Matrix`], [`Quat`] and plain
//! arrays.
//!
//! A value with more components can always be read as one with fewer: every
//! [`ReadableVector4`] is also a [`ReadableVector3`] and a [`ReadableVector2`].
//!
//! ```
//! # use zaru_tensors::*;
//! let q = Quat::from_components(1, 2, 3, 4);
//! assert_eq!(Vector::<_, 3>::from_readable(&q), vec3(1, 2, 3));
//! assert_eq!(Vector::<_, 2>::from_readable(&[5, 6, 7, 8]), vec2(5, 6));
//! ```

use crate::{Dim, Matrix, Quat, SupportedDim, Vector};

/// A value with readable `x` and `y` components.
pub trait ReadableVector2<T> {
    fn x(&self) -> T;
    fn y(&self) -> T;
}

/// A value with readable `x`, `y` and `z` components.
pub trait ReadableVector3<T>: ReadableVector2<T> {
    fn z(&self) -> T;
}

/// A value with readable `x`, `y`, `z` and `w` components.
pub trait ReadableVector4<T>: ReadableVector3<T> {
    fn w(&self) -> T;
}

/// A square `N`x`N` matrix whose elements can be read by position.
pub trait ReadableMatrix<T, const N: usize> {
    /// Returns the element in row `row` and column `col`.
    ///
    /// Implementations may panic if either index is out of bounds.
    fn element(&self, row: usize, col: usize) -> T;

    /// Writes row `row` into `out`.
    fn row_into<'a>(&self, row: usize, out: &'a mut Vector<T, N>) -> &'a mut Vector<T, N> {
        for (col, elem) in out.as_mut_array().iter_mut().enumerate() {
            *elem = self.element(row, col);
        }
        out
    }

    /// Writes column `col` into `out`.
    fn column_into<'a>(&self, col: usize, out: &'a mut Vector<T, N>) -> &'a mut Vector<T, N> {
        for (row, elem) in out.as_mut_array().iter_mut().enumerate() {
            *elem = self.element(row, col);
        }
        out
    }
}

macro_rules! readable_components {
    ($ty:ty, [$($generics:tt)*], $index:ident) => {
        impl<$($generics)*> ReadableVector2<T> for $ty {
            fn x(&self) -> T {
                $index!(self, 0)
            }
            fn y(&self) -> T {
                $index!(self, 1)
            }
        }
    };
}

macro_rules! by_index {
    ($this:expr, $i:literal) => {
        $this[$i]
    };
}

macro_rules! by_field {
    ($this:expr, 0) => {
        $this.x
    };
    ($this:expr, 1) => {
        $this.y
    };
}

readable_components!(Vector<T, 2, S>, [T: Copy, S], by_index);
readable_components!(Vector<T, 3, S>, [T: Copy, S], by_index);
readable_components!(Vector<T, 4, S>, [T: Copy, S], by_index);
readable_components!([T; 2], [T: Copy], by_index);
readable_components!([T; 3], [T: Copy], by_index);
readable_components!([T; 4], [T: Copy], by_index);
readable_components!(Quat<T>, [T: Copy], by_field);

impl<T: Copy, S> ReadableVector3<T> for Vector<T, 3, S> {
    fn z(&self) -> T {
        self[2]
    }
}

impl<T: Copy, S> ReadableVector3<T> for Vector<T, 4, S> {
    fn z(&self) -> T {
        self[2]
    }
}

impl<T: Copy, S> ReadableVector4<T> for Vector<T, 4, S> {
    fn w(&self) -> T {
        self[3]
    }
}

impl<T: Copy> ReadableVector3<T> for [T; 3] {
    fn z(&self) -> T {
        self[2]
    }
}

impl<T: Copy> ReadableVector3<T> for [T; 4] {
    fn z(&self) -> T {
        self[2]
    }
}

impl<T: Copy> ReadableVector4<T> for [T; 4] {
    fn w(&self) -> T {
        self[3]
    }
}

impl<T: Copy> ReadableVector3<T> for Quat<T> {
    fn z(&self) -> T {
        self.z
    }
}

impl<T: Copy> ReadableVector4<T> for Quat<T> {
    fn w(&self) -> T {
        self.w
    }
}

impl<T: Copy, const N: usize, S, D> ReadableMatrix<T, N> for Matrix<T, N, S, D> {
    fn element(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

/// Arrays are read as a list of *columns*, matching the storage order of [`Matrix`].
impl<T: Copy, const N: usize> ReadableMatrix<T, N> for [[T; N]; N] {
    fn element(&self, row: usize, col: usize) -> T {
        self[col][row]
    }
}

impl<T, S> Vector<T, 2, S> {
    /// Copies the `x` and `y` components of `src`.
    pub fn from_readable<R: ReadableVector2<T> + ?Sized>(src: &R) -> Self {
        Self::wrap([src.x(), src.y()])
    }
}

impl<T, S> Vector<T, 3, S> {
    /// Copies the `x`, `y` and `z` components of `src`.
    pub fn from_readable<R: ReadableVector3<T> + ?Sized>(src: &R) -> Self {
        Self::wrap([src.x(), src.y(), src.z()])
    }
}

impl<T, S> Vector<T, 4, S> {
    /// Copies the `x`, `y`, `z` and `w` components of `src`.
    pub fn from_readable<R: ReadableVector4<T> + ?Sized>(src: &R) -> Self {
        Self::wrap([src.x(), src.y(), src.z(), src.w()])
    }
}

impl<T, const N: usize, S, D> Matrix<T, N, S, D>
where
    Dim<N>: SupportedDim,
{
    /// Copies every element of `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let columns = [[1, 2], [3, 4]];
    /// let mat = Mat2i::from_readable(&columns);
    /// assert_eq!(mat.row(0), vec2(1, 3));
    /// assert_eq!(mat.as_columns(), &columns);
    /// ```
    pub fn from_readable<R: ReadableMatrix<T, N> + ?Sized>(src: &R) -> Self {
        Self::from_fn(|row, col| src.element(row, col))
    }
}

impl<T> Quat<T> {
    /// Copies the `x`, `y`, `z` and `w` components of `src`.
    pub fn from_readable<R: ReadableVector4<T> + ?Sized>(src: &R) -> Self {
        Self::from_components(src.x(), src.y(), src.z(), src.w())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, Mat3i, Vec2f, Vec3i, Vec4d};

    use super::*;

    #[test]
    fn vectors() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vec2f::from_readable(&[9.0, 8.0]), [9.0, 8.0]);
        assert_eq!(Vec3i::from_readable(&vec4(1, 2, 3, 4)), vec3(1, 2, 3));
        assert_eq!(Vec4d::from_readable(&Quat::<f64>::IDENTITY), Vec4d::W);

        let as_dyn: &dyn ReadableVector3<i32> = &[7, 8, 9];
        assert_eq!(Vec3i::from_readable(as_dyn), vec3(7, 8, 9));
    }

    #[test]
    fn quat() {
        let q = Quat::from_readable(&vec4(1, 2, 3, 4));
        assert_eq!(q, Quat::from_components(1, 2, 3, 4));
        assert_eq!(q.w(), 4);
    }

    #[test]
    fn matrices() {
        #[rustfmt::skip]
        let m = Mat3i::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(m.element(1, 2), 6);
        assert_eq!(Mat3i::from_readable(&m), m);
        assert_eq!(Mat3i::from_readable(&m.into_columns()), m);

        let mut out = Vec3i::ZERO;
        let columns = m.into_columns();
        assert_eq!(*ReadableMatrix::row_into(&columns, 1, &mut out), vec3(4, 5, 6));
        assert_eq!(*ReadableMatrix::column_into(&columns, 2, &mut out), vec3(3, 6, 9));
    }
}

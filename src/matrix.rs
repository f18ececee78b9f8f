use std::{array, cmp::Ordering, fmt, marker::PhantomData};

use itertools::Itertools;

use crate::{
    approx::{AlmostEqualContext, DefaultTolerances},
    kernel, Dim, IntoValue, One, Quat, Real, Scalar, SingularMatrix, SupportedDim, Untagged, Vector,
    Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T, S = Untagged, D = S> = Matrix<T, 2, S, D>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 2x2 matrix with overflow-checked [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 2x2 matrix with overflow-checked [`i64`] elements.
pub type Mat2l = Mat2<i64>;
/// A 3x3 matrix.
pub type Mat3<T, S = Untagged, D = S> = Matrix<T, 3, S, D>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 3x3 matrix with overflow-checked [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 3x3 matrix with overflow-checked [`i64`] elements.
pub type Mat3l = Mat3<i64>;
/// A 4x4 matrix.
pub type Mat4<T, S = Untagged, D = S> = Matrix<T, 4, S, D>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;
/// A 4x4 matrix with overflow-checked [`i32`] elements.
pub type Mat4i = Mat4<i32>;
/// A 4x4 matrix with overflow-checked [`i64`] elements.
pub type Mat4l = Mat4<i64>;

/// A square, column-major `N`x`N` matrix with element type `T`, transforming column vectors from
/// the coordinate space `S` into the coordinate space `D`.
///
/// Matrices act on column vectors: `m * v` transforms `v`, and in `a * b`, `b` is applied first.
/// Composition checks the coordinate spaces at compile time: a `Matrix<_, _, B, C>` can only be
/// multiplied with a `Matrix<_, _, A, B>`, yielding a `Matrix<_, _, A, C>`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::from_readable`] copies any [`ReadableMatrix`][crate::ReadableMatrix].
/// - [`Mat2::rotation`], [`Mat4::translation`], [`Mat4::scaling`] and [`Mat4::rotation`] build
///   common transforms.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use zaru_tensors::*;
/// let mut mat = Mat2i::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use zaru_tensors::*;
/// let mat = Mat2i::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[repr(transparent)]
pub struct Matrix<T, const N: usize, S = Untagged, D = S>([[T; N]; N], PhantomData<fn(S) -> D>);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const N: usize, S, D> bytemuck::Zeroable for Matrix<T, N, S, D> {}
unsafe impl<T: bytemuck::Pod, const N: usize, S: 'static, D: 'static> bytemuck::Pod
    for Matrix<T, N, S, D>
{
}

impl<T: Zero + Copy, const N: usize, S, D> Matrix<T, N, S, D>
where
    Dim<N>: SupportedDim,
{
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N], PhantomData);
}

impl<T: Zero + One + Copy, const N: usize, S, D> Matrix<T, N, S, D>
where
    Dim<N>: SupportedDim,
{
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns, PhantomData)
    };
}

impl<T, const N: usize, S, D> Matrix<T, N, S, D>
where
    Dim<N>: SupportedDim,
{
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let rows = Mat2i::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self
    where
        T: Copy,
    {
        let rows = rows.map(|row| row.into().into_array());
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()), PhantomData)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat: Mat2i = Matrix::from_fn(|row, col| (row * 10 + col) as i32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(
            array::from_fn(|col| array::from_fn(|row| cb(row, col))),
            PhantomData,
        )
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let diag = Mat3i::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<V: Into<Vector<T, N>>>(diag: V) -> Self
    where
        T: Zero + Copy,
    {
        let diag: Vector<T, N> = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T, const N: usize, S, D> Matrix<T, N, S, D> {
    #[inline]
    pub(crate) const fn wrap(columns: [[T; N]; N]) -> Self {
        Self(columns, PhantomData)
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat = Mat2i::from_rows([
    ///     [0, 1],
    ///     [3, 4],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [6, 8],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N, S, D>
    where
        F: FnMut(T) -> U,
    {
        Matrix::wrap(self.0.map(|column| column.map(&mut f)))
    }

    /// Discards both coordinate-space tags.
    #[inline]
    pub fn untag(self) -> Matrix<T, N> {
        Matrix::wrap(self.0)
    }

    /// Reinterprets this matrix as mapping from space `S2` to space `D2`.
    #[inline]
    pub fn retag<S2, D2>(self) -> Matrix<T, N, S2, D2> {
        Matrix::wrap(self.0)
    }

    /// Returns the columns of this matrix.
    #[inline]
    pub fn as_columns(&self) -> &[[T; N]; N] {
        &self.0
    }

    /// Converts this matrix into an array of its columns.
    #[inline]
    pub fn into_columns(self) -> [[T; N]; N] {
        self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mut mat = Mat2i::from_rows([
    ///     [0, 1],
    ///     [3, 4],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1],
    ///     [999, 4],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns a reference to the element at `(row, col)`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` and `col` must both be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        // Safety: guaranteed by the caller.
        unsafe { self.0.get_unchecked(col).get_unchecked(row) }
    }

    /// Overwrites the element at `(row, col)`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` and `col` must both be less than `N`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, value: T) {
        // Safety: guaranteed by the caller.
        unsafe { *self.0.get_unchecked_mut(col).get_unchecked_mut(row) = value }
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// The transpose maps in the opposite direction, so the tags are swapped as well.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat = Mat2i::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, N, D, S>
    where
        T: Copy,
    {
        Matrix::wrap(kernel::transpose(self.0))
    }
}

/// Rows and columns.
///
/// Indices are 0-based; all of these methods panic if the index is out of bounds.
impl<T: Copy, const N: usize, S, D> Matrix<T, N, S, D> {
    /// Returns row `r` as a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat = Mat2i::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.row(1), vec2(3, 4));
    /// assert_eq!(mat.column(1), vec2(2, 4));
    /// ```
    pub fn row(&self, r: usize) -> Vector<T, N> {
        assert!(r < N, "row index {r} out of bounds for {N}x{N} matrix");
        Vector::wrap(array::from_fn(|col| self.0[col][r]))
    }

    /// Returns column `c` as a vector.
    pub fn column(&self, c: usize) -> Vector<T, N> {
        Vector::wrap(self.0[c])
    }

    /// Writes row `r` into `out`.
    pub fn row_into<'a>(&self, r: usize, out: &'a mut Vector<T, N>) -> &'a mut Vector<T, N> {
        *out = self.row(r);
        out
    }

    /// Writes column `c` into `out`.
    pub fn column_into<'a>(&self, c: usize, out: &'a mut Vector<T, N>) -> &'a mut Vector<T, N> {
        *out = self.column(c);
        out
    }

    /// Replaces row `r` with `row`.
    pub fn set_row(&mut self, r: usize, row: Vector<T, N>) -> &mut Self {
        assert!(r < N, "row index {r} out of bounds for {N}x{N} matrix");
        for (column, elem) in self.0.iter_mut().zip(row.into_array()) {
            column[r] = elem;
        }
        self
    }

    /// Replaces column `c` with `column`.
    pub fn set_column(&mut self, c: usize, column: Vector<T, N>) -> &mut Self {
        self.0[c] = column.into_array();
        self
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat = Mat2i::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N> {
        Vector::wrap(array::from_fn(|i| self.0[i][i]))
    }
}

impl<T: Scalar, const N: usize, S, D> Matrix<T, N, S, D> {
    /// Element-wise sum of `self` and `rhs`.
    pub fn add(self, rhs: Self) -> Result<Self, T::Overflow> {
        kernel::mat_add(self.0, rhs.0).map(Self::wrap)
    }

    /// Element-wise difference of `self` and `rhs`.
    pub fn subtract(self, rhs: Self) -> Result<Self, T::Overflow> {
        kernel::mat_subtract(self.0, rhs.0).map(Self::wrap)
    }

    /// Multiplies every element with `r`.
    pub fn scale(self, r: T::Factor) -> Result<Self, T::Overflow> {
        kernel::mat_scale(self.0, r).map(Self::wrap)
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let diag = Mat3i::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), Ok(1 + 2 + 3));
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace().into_value(), 3.0);
    /// ```
    pub fn trace(&self) -> Result<T, T::Overflow> {
        kernel::trace(self.0)
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// The product first applies `rhs` (mapping `S0` to `S`), then `self` (mapping `S` to `D`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let a = Mat2i::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let b = Mat2i::from_rows([
    ///     [0, 1],
    ///     [1, 0],
    /// ]);
    /// assert_eq!(a.multiply(b), Ok(Matrix::from_rows([
    ///     [2, 1],
    ///     [4, 3],
    /// ])));
    /// ```
    pub fn multiply<S0>(self, rhs: Matrix<T, N, S0, S>) -> Result<Matrix<T, N, S0, D>, T::Overflow> {
        kernel::mat_multiply(self.0, rhs.0).map(Matrix::wrap)
    }

    /// Transforms the column vector `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mat = Mat2i::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.multiply_vector(vec2(4, 5)), Ok(vec2(5, 23)));
    /// ```
    pub fn multiply_vector(self, v: Vector<T, N, S>) -> Result<Vector<T, N, D>, T::Overflow> {
        kernel::mat_multiply_vector(self.0, v.into_array()).map(Vector::wrap)
    }

    /// In-place version of [`Matrix::add`].
    pub fn add_in_place(&mut self, rhs: Self) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::mat_add(self.0, rhs.0)?;
        Ok(self)
    }

    /// In-place version of [`Matrix::subtract`].
    pub fn subtract_in_place(&mut self, rhs: Self) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::mat_subtract(self.0, rhs.0)?;
        Ok(self)
    }

    /// In-place version of [`Matrix::scale`].
    pub fn scale_in_place(&mut self, r: T::Factor) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::mat_scale(self.0, r)?;
        Ok(self)
    }

    /// Replaces `self` with `self * rhs`.
    ///
    /// `rhs` has to stay within the source space, so that the tags of `self` are preserved.
    pub fn multiply_in_place(&mut self, rhs: Matrix<T, N, S, S>) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::mat_multiply(self.0, rhs.0)?;
        Ok(self)
    }
}

impl<T: Copy, const N: usize, S> Matrix<T, N, S, S> {
    /// In-place version of [`Matrix::transpose`].
    ///
    /// Only available for matrices mapping a space onto itself, since the transpose of a
    /// `Matrix<_, _, S, D>` has the type `Matrix<_, _, D, S>`.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.0 = kernel::transpose(self.0);
        self
    }
}

macro_rules! determinant_and_inverse {
    ($($n:literal => $det:ident, $m:literal, $det_minor:expr);+ $(;)?) => {
        $(
            impl<T: Scalar, S, D> Matrix<T, $n, S, D> {
                /// Returns the [determinant] of the matrix.
                ///
                /// [determinant]: https://en.wikipedia.org/wiki/Determinant
                pub fn determinant(&self) -> Result<T, T::Overflow> {
                    kernel::$det(&self.0)
                }
            }

            impl<T: Real, S, D> Matrix<T, $n, S, D> {
                /// Inverts this matrix.
                ///
                /// The matrix is treated as singular if its determinant is not larger than
                /// [`DefaultTolerances::DEFAULT_REL_TOLERANCE`] times the product of its column
                /// magnitudes (see [`Matrix::invert_with`]). The test does not depend on the scale
                /// of the matrix, so `Mat3f::from_diagonal([0.001; 3])` is invertible.
                ///
                /// The inverse maps in the opposite direction, so its tags are swapped.
                pub fn invert(&self) -> Result<Matrix<T, $n, D, S>, SingularMatrix> {
                    let context =
                        AlmostEqualContext::new(T::ZERO, <T as DefaultTolerances>::DEFAULT_REL_TOLERANCE);
                    self.invert_with(&context)
                }

                /// Inverts this matrix, using `context` to decide whether it is singular.
                ///
                /// The product of the column magnitudes bounds `|det|` from above ([Hadamard's
                /// inequality]), with equality for orthogonal columns. The matrix is singular if
                ///
                /// `|det| <= max_abs_diff + max_rel_diff * |c_0| * ... * |c_(N-1)|`.
                ///
                /// [Hadamard's inequality]: https://en.wikipedia.org/wiki/Hadamard%27s_inequality
                pub fn invert_with(
                    &self,
                    context: &AlmostEqualContext<T>,
                ) -> Result<Matrix<T, $n, D, S>, SingularMatrix> {
                    let det = self.determinant().into_value();
                    let bound = self
                        .0
                        .iter()
                        .fold(T::ONE, |acc, col| acc * kernel::magnitude(*col).into_value());
                    let threshold = context.max_abs_diff() + context.max_rel_diff() * bound;
                    // Also rejects a NaN determinant.
                    let abs_det = Scalar::absolute(det).into_value();
                    if abs_det.partial_cmp(&threshold) != Some(Ordering::Greater) {
                        log::debug!(
                            "cannot invert {n}x{n} matrix with determinant {det:?} (threshold {threshold:?})",
                            n = $n,
                        );
                        return Err(SingularMatrix);
                    }

                    Ok(Matrix::wrap(kernel::adjugate_inverse::<T, $n, $m>(
                        &self.0, det, $det_minor,
                    )))
                }
            }

            impl<T: Real, S> Matrix<T, $n, S, S> {
                /// In-place version of [`Matrix::invert`].
                ///
                /// If the matrix is singular, it is left unmodified.
                pub fn invert_in_place(&mut self) -> Result<&mut Self, SingularMatrix> {
                    *self = self.invert()?;
                    Ok(self)
                }
            }
        )+
    };
}

determinant_and_inverse! {
    2 => determinant2, 1, |m| m[0][0];
    3 => determinant3, 2, |m| kernel::determinant2(m).into_value();
    4 => determinant4, 3, |m| kernel::determinant3(m).into_value();
}

impl<T: Real, S> Matrix<T, 2, S, S> {
    /// Creates a 2x2 rotation matrix for a counterclockwise rotation by `radians` in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let v = Mat2f::rotation(FRAC_PI_2) * Vec2f::X;
    /// assert_approx_eq!(v, Vec2f::Y).abs(1e-6);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Zero + One + Copy, S> Matrix<T, 4, S, S> {
    /// Creates a homogeneous translation matrix that moves points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let m = Mat4::translation(vec3(10, 20, 30));
    /// assert_eq!(m.multiply_vector(vec4(1, 1, 1, 1)), Ok(vec4(11, 21, 31, 1)));
    /// // Directions (w = 0) are not affected.
    /// assert_eq!(m.multiply_vector(vec4(1, 1, 1, 0)), Ok(vec4(1, 1, 1, 0)));
    /// ```
    pub fn translation(offset: Vector<T, 3, S>) -> Self {
        let mut this = Self::IDENTITY;
        this.0[3] = offset.extend(T::ONE).into_array();
        this
    }

    /// Creates a homogeneous matrix scaling each axis by the corresponding element of `factors`.
    pub fn scaling(factors: Vector<T, 3, S>) -> Self {
        Self::from_diagonal(factors.untag().extend(T::ONE))
    }
}

impl<T: Real, S> Matrix<T, 4, S, S> {
    /// Creates a homogeneous matrix rotating by `radians` around the normalized `axis`.
    ///
    /// The rotation is right-handed: looking down `axis` towards the origin, positive angles turn
    /// counterclockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let m = Mat4f::rotation(Vec3f::Z, FRAC_PI_2);
    /// assert_approx_eq!(m * Vec4f::X, Vec4f::Y).abs(1e-6);
    /// ```
    pub fn rotation(axis: Vector<T, 3, S>, radians: T) -> Self {
        Quat::from_axis_angle(axis.untag(), radians)
            .rotation_matrix()
            .into_value()
            .retag()
    }
}

impl<T, const N: usize, S, D> Default for Matrix<T, N, S, D>
where
    T: Default,
    Dim<N>: SupportedDim,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const N: usize, S, D> fmt::Debug for Matrix<T, N, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a [[T; N]; N], usize);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[col][self.1])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(&self.0, row));
        }
        list.finish()
    }
}

/// Prints the matrix row by row, one row per line.
impl<T: fmt::Display, const N: usize, S, D> fmt::Display for Matrix<T, N, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..N).format_with("\n", |row, f| {
            f(&format_args!(
                "[{}]",
                (0..N).map(|col| &self.0[col][row]).format(", ")
            ))
        });
        write!(f, "{rows}")
    }
}

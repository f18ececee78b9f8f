use std::{array, fmt, marker::PhantomData};

use crate::{kernel, Dim, One, Real, Scalar, SupportedDim, Untagged, Zero};

mod ops;
pub(crate) mod view;

/// A 2-dimensional vector.
pub type Vec2<T, S = Untagged> = Vector<T, 2, S>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with overflow-checked [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with overflow-checked [`i64`] elements.
pub type Vec2l = Vec2<i64>;
/// A 3-dimensional vector.
pub type Vec3<T, S = Untagged> = Vector<T, 3, S>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with overflow-checked [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with overflow-checked [`i64`] elements.
pub type Vec3l = Vec3<i64>;
/// A 4-dimensional vector.
pub type Vec4<T, S = Untagged> = Vector<T, 4, S>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with overflow-checked [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with overflow-checked [`i64`] elements.
pub type Vec4l = Vec4<i64>;

/// An `N`-element column vector storing elements of type `T`, living in the coordinate space `S`.
///
/// `N` is 2, 3, or 4. The tag `S` only exists at compile time (see the [`tag`][crate::tag]
/// module); it defaults to [`Untagged`].
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create untagged vectors.
/// - [`Vector::new`] creates a vector with any tag from an array.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::from_readable`] copies the components of any [`ReadableVector2`],
///   [`ReadableVector3`] or [`ReadableVector4`].
/// - [`Vector::ZERO`], and `Vector::X`, `Vector::Y`, `Vector::Z`, `Vector::W` for unit vectors.
///
/// [`ReadableVector2`]: crate::ReadableVector2
/// [`ReadableVector3`]: crate::ReadableVector3
/// [`ReadableVector4`]: crate::ReadableVector4
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, and `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::get_unchecked`] and [`Vector::set_unchecked`] skip the bounds check.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`].
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` allows it.
///
/// # Arithmetic
///
/// Every operation that can overflow returns `Result<_, T::Overflow>`. For `f32` and `f64` the
/// error type is [`Infallible`][std::convert::Infallible], and [`IntoValue::into_value`] extracts the
/// value; the usual operators (`+`, `-`, `*` by a scalar, unary `-`) are implemented for them too.
/// For `i32` and `i64` the error is [`ArithmeticOverflow`].
///
/// Methods taking `self` return new vectors. The `*_in_place` methods write their result back into
/// `self` and return `&mut Self`; if they fail, `self` is left unmodified.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`IntoValue::into_value`]: crate::IntoValue::into_value
/// [`ArithmeticOverflow`]: crate::ArithmeticOverflow
#[repr(transparent)]
pub struct Vector<T, const N: usize, S = Untagged>([T; N], PhantomData<fn() -> S>);

unsafe impl<T: bytemuck::Zeroable, const N: usize, S> bytemuck::Zeroable for Vector<T, N, S> {}
unsafe impl<T: bytemuck::Pod, const N: usize, S: 'static> bytemuck::Pod for Vector<T, N, S> {}

impl<T: Zero, const N: usize, S> Vector<T, N, S>
where
    Dim<N>: SupportedDim,
{
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N], PhantomData);
}

impl<T: Zero + One, S> Vector<T, 2, S> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, S> Vector<T, 3, S> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, S> Vector<T, 4, S> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T, const N: usize, S> Vector<T, N, S>
where
    Dim<N>: SupportedDim,
{
    /// Creates a vector from an array of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// enum Local {}
    /// let v = Vector::<_, 3, Local>::new([1, 2, 3]);
    /// assert_eq!(v.untag(), vec3(1, 2, 3));
    /// ```
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        Self(elems, PhantomData)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let v: Vec3i = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::new([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let v: Vec3i = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(array::from_fn(cb))
    }
}

impl<T, const N: usize, S> Vector<T, N, S> {
    #[inline]
    pub(crate) const fn wrap(elems: [T; N]) -> Self {
        Self(elems, PhantomData)
    }

    /// Applies a closure to each element, returning a new vector in the same space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N, S>
    where
        F: FnMut(T) -> U,
    {
        Vector::wrap(self.0.map(f))
    }

    /// Discards the coordinate-space tag.
    #[inline]
    pub fn untag(self) -> Vector<T, N> {
        Vector::wrap(self.0)
    }

    /// Reinterprets this vector as living in the coordinate space `S2`.
    ///
    /// This is the only way to move a vector between spaces; it never happens implicitly.
    #[inline]
    pub fn retag<S2>(self) -> Vector<T, N, S2> {
        Vector::wrap(self.0)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // Safety: guaranteed by the caller.
        unsafe { self.0.get_unchecked(index) }
    }

    /// Overwrites the element at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        // Safety: guaranteed by the caller.
        unsafe { *self.0.get_unchecked_mut(index) = value }
    }
}

impl<T: Scalar, const N: usize, S> Vector<T, N, S> {
    /// Element-wise sum of `self` and `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec2(1, 2).add(vec2(10, 20)), Ok(vec2(11, 22)));
    /// assert!(vec2(i32::MAX, 0).add(vec2(1, 0)).is_err());
    /// ```
    pub fn add(self, rhs: Self) -> Result<Self, T::Overflow> {
        kernel::add(self.0, rhs.0).map(Self::wrap)
    }

    /// Element-wise difference of `self` and `rhs`.
    pub fn subtract(self, rhs: Self) -> Result<Self, T::Overflow> {
        kernel::subtract(self.0, rhs.0).map(Self::wrap)
    }

    /// Multiplies every element with the real factor `r`.
    ///
    /// Integer vectors round each product to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec2(3, -5).scale(0.5), Ok(vec2(2, -3)));
    /// assert_eq!(vec2(3.0, -5.0).scale(0.5).into_value(), vec2(1.5, -2.5));
    /// ```
    pub fn scale(self, r: T::Factor) -> Result<Self, T::Overflow> {
        kernel::scale(self.0, r).map(Self::wrap)
    }

    /// Computes `self + rhs * r`.
    pub fn add_scaled(self, rhs: Self, r: T::Factor) -> Result<Self, T::Overflow> {
        kernel::add_scaled(self.0, rhs.0, r).map(Self::wrap)
    }

    /// Element-wise absolute value.
    pub fn absolute(self) -> Result<Self, T::Overflow> {
        kernel::absolute(self.0).map(Self::wrap)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are accumulated in element order (x, y, z, w), so floating-point results are
    /// reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), Ok(3));
    /// ```
    pub fn dot(self, other: Self) -> Result<T, T::Overflow> {
        kernel::dot(self.0, other.0)
    }

    /// Returns the squared magnitude (length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec2(4, 0).magnitude_squared(), Ok(16));
    /// ```
    pub fn magnitude_squared(self) -> Result<T, T::Overflow> {
        kernel::magnitude_squared(self.0)
    }

    /// Returns the magnitude (length) of this vector.
    ///
    /// For integer vectors the result is truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude().into_value(), 5.0);
    /// assert_eq!(vec2(3, 5).magnitude(), Ok(5));
    /// ```
    pub fn magnitude(self) -> Result<T, T::Overflow> {
        kernel::magnitude(self.0)
    }

    /// Returns the magnitude of `self - other`.
    pub fn distance(self, other: Self) -> Result<T, T::Overflow> {
        kernel::distance(self.0, other.0)
    }

    /// Linearly interpolates between `self` (at `alpha = 0`) and `other` (at `alpha = 1`).
    ///
    /// Both endpoints are reproduced exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let a = vec2(0.1, 7.3);
    /// let b = vec2(-3.3, 1e9);
    /// assert_eq!(a.interpolate_linear(b, 0.0).into_value(), a);
    /// assert_eq!(a.interpolate_linear(b, 1.0).into_value(), b);
    /// assert_eq!(vec2(0, 10).interpolate_linear(vec2(10, 20), 0.5), Ok(vec2(5, 15)));
    /// ```
    #[doc(alias = "lerp")]
    pub fn interpolate_linear(self, other: Self, alpha: T::Factor) -> Result<Self, T::Overflow> {
        kernel::interpolate_linear(self.0, other.0, alpha).map(Self::wrap)
    }

    /// Projects `self` onto `onto`: `(dot(self, onto) / |onto|²) * onto`.
    ///
    /// `onto` must have non-zero magnitude. For floating-point vectors a zero `onto` yields NaN
    /// elements; integer vectors report [`ArithmeticOverflow`][crate::ArithmeticOverflow], since
    /// the result is not representable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let p = vec2(3.0, 4.0);
    /// assert_eq!(p.projection(Vec2f::X).into_value(), vec2(3.0, 0.0));
    /// ```
    pub fn projection(self, onto: Self) -> Result<Self, T::Overflow> {
        kernel::projection(self.0, onto.0).map(Self::wrap)
    }

    /// Clamps every element to the range `min..=max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// assert_eq!(vec3(-5, 2, 9).clamp(0, 4), vec3(0, 2, 4));
    /// ```
    pub fn clamp(self, min: T, max: T) -> Self {
        Self::wrap(kernel::clamp(self.0, min, max))
    }

    /// Clamps every element to the range given by the corresponding elements of `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let v = vec3(-5, 2, 9).clamp_by_vector(vec3(0, 3, 0), vec3(1, 4, 5));
    /// assert_eq!(v, vec3(0, 3, 5));
    /// ```
    pub fn clamp_by_vector(self, min: Self, max: Self) -> Self {
        Self::wrap(kernel::clamp_by(self.0, min.0, max.0))
    }

    /// Raises every element to at least `min`.
    pub fn clamp_minimum(self, min: T) -> Self {
        Self::wrap(kernel::clamp_minimum(self.0, min))
    }

    /// Raises every element to at least the corresponding element of `min`.
    pub fn clamp_minimum_by_vector(self, min: Self) -> Self {
        Self::wrap(kernel::clamp_minimum_by(self.0, min.0))
    }

    /// Lowers every element to at most `max`.
    pub fn clamp_maximum(self, max: T) -> Self {
        Self::wrap(kernel::clamp_maximum(self.0, max))
    }

    /// Lowers every element to at most the corresponding element of `max`.
    pub fn clamp_maximum_by_vector(self, max: Self) -> Self {
        Self::wrap(kernel::clamp_maximum_by(self.0, max.0))
    }

    /// In-place version of [`Vector::add`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mut acc = vec2(i32::MAX - 1, 0);
    /// acc.add_in_place(vec2(1, 1)).unwrap();
    /// assert_eq!(acc, vec2(i32::MAX, 1));
    ///
    /// // On overflow, the accumulator is left as it was.
    /// assert!(acc.add_in_place(vec2(1, 1)).is_err());
    /// assert_eq!(acc, vec2(i32::MAX, 1));
    /// ```
    pub fn add_in_place(&mut self, rhs: Self) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::add(self.0, rhs.0)?;
        Ok(self)
    }

    /// In-place version of [`Vector::subtract`].
    pub fn subtract_in_place(&mut self, rhs: Self) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::subtract(self.0, rhs.0)?;
        Ok(self)
    }

    /// In-place version of [`Vector::scale`].
    pub fn scale_in_place(&mut self, r: T::Factor) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::scale(self.0, r)?;
        Ok(self)
    }

    /// In-place version of [`Vector::add_scaled`].
    pub fn add_scaled_in_place(&mut self, rhs: Self, r: T::Factor) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::add_scaled(self.0, rhs.0, r)?;
        Ok(self)
    }

    /// In-place version of [`Vector::absolute`].
    pub fn absolute_in_place(&mut self) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::absolute(self.0)?;
        Ok(self)
    }

    /// In-place version of [`Vector::interpolate_linear`].
    pub fn interpolate_linear_in_place(
        &mut self,
        other: Self,
        alpha: T::Factor,
    ) -> Result<&mut Self, T::Overflow> {
        self.0 = kernel::interpolate_linear(self.0, other.0, alpha)?;
        Ok(self)
    }

    /// In-place version of [`Vector::clamp`].
    pub fn clamp_in_place(&mut self, min: T, max: T) -> &mut Self {
        self.0 = kernel::clamp(self.0, min, max);
        self
    }

    /// In-place version of [`Vector::clamp_by_vector`].
    pub fn clamp_by_vector_in_place(&mut self, min: Self, max: Self) -> &mut Self {
        self.0 = kernel::clamp_by(self.0, min.0, max.0);
        self
    }

    /// In-place version of [`Vector::clamp_minimum`].
    pub fn clamp_minimum_in_place(&mut self, min: T) -> &mut Self {
        self.0 = kernel::clamp_minimum(self.0, min);
        self
    }

    /// In-place version of [`Vector::clamp_minimum_by_vector`].
    pub fn clamp_minimum_by_vector_in_place(&mut self, min: Self) -> &mut Self {
        self.0 = kernel::clamp_minimum_by(self.0, min.0);
        self
    }

    /// In-place version of [`Vector::clamp_maximum`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let mut v = vec3(-5, 2, 9);
    /// v.clamp_minimum_in_place(0).clamp_maximum_in_place(4);
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn clamp_maximum_in_place(&mut self, max: T) -> &mut Self {
        self.0 = kernel::clamp_maximum(self.0, max);
        self
    }

    /// In-place version of [`Vector::clamp_maximum_by_vector`].
    pub fn clamp_maximum_by_vector_in_place(&mut self, max: Self) -> &mut Self {
        self.0 = kernel::clamp_maximum_by(self.0, max.0);
        self
    }
}

impl<T: Real, const N: usize, S> Vector<T, N, S> {
    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// A vector whose squared magnitude is not positive (the zero vector, or one containing NaN)
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        Self::wrap(kernel::normalize(self.0))
    }

    /// In-place version of [`Vector::normalize`].
    pub fn normalize_in_place(&mut self) -> &mut Self {
        self.0 = kernel::normalize(self.0);
        self
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero magnitude for the result to be meaningful. The cosine is
    /// clamped to `[-1, 1]` before taking its arc cosine, so rounding errors never produce NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.angle(b), TAU / 4.0);
    /// assert_approx_eq!(a.angle(-a), TAU / 2.0);
    /// ```
    #[doc(alias = "abs_angle_to")]
    pub fn angle(self, other: Self) -> T {
        kernel::angle(self.0, other.0)
    }

    /// Orthonormalizes the pair `(self, other)` with the Gram-Schmidt process.
    ///
    /// Returns `normalize(self)`, and `other` minus its projection onto `normalize(self)`,
    /// normalized. If the vectors are parallel, the second vector is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let (a, b) = vec2(2.0, 0.0).ortho_normalize(vec2(1.0, 1.0));
    /// assert_eq!(a, Vec2f::X);
    /// assert_eq!(b, Vec2f::Y);
    /// ```
    pub fn ortho_normalize(self, other: Self) -> (Self, Self) {
        let (a, b) = kernel::ortho_normalize(self.0, other.0);
        (Self::wrap(a), Self::wrap(b))
    }
}

impl<T, S> Vector<T, 2, S> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3, S> {
        let [x, y] = self.0;
        Vector::wrap([x, y, value])
    }
}

impl<T, S> Vector<T, 3, S> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2, S> {
        let [x, y, _] = self.0;
        Vector::wrap([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// Often used to obtain homogeneous coordinates:
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let p = vec3(1.0, 2.0, 3.0);
    /// let moved = Mat4f::translation(vec3(1.0, 1.0, 1.0)) * p.extend(1.0);
    /// assert_eq!(moved.truncate(), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4, S> {
        let [x, y, z] = self.0;
        Vector::wrap([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping them inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y).into_value(), z);
    /// assert_eq!(y.cross(x).into_value(), -z);
    /// ```
    pub fn cross(self, other: Self) -> Result<Self, T::Overflow>
    where
        T: Scalar,
    {
        kernel::cross(self.0, other.0).map(Self::wrap)
    }
}

impl<T, S> Vector<T, 4, S> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3, S> {
        let [x, y, z, _] = self.0;
        Vector::wrap([x, y, z])
    }
}

impl<T, const N: usize, S> Default for Vector<T, N, S>
where
    T: Default,
    Dim<N>: SupportedDim,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize, S> From<[T; N]> for Vector<T, N, S>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize, S> From<Vector<T, N, S>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, S>) -> Self {
        value.0
    }
}

impl<T, const N: usize, S> fmt::Debug for Vector<T, N, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize, S> fmt::Display for Vector<T, N, S>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize, S> AsRef<[T]> for Vector<T, N, S> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize, S> AsRef<[T; N]> for Vector<T, N, S> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

/// Constructs an untagged [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y], PhantomData)
}

/// Constructs an untagged [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z], PhantomData)
}

/// Constructs an untagged [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w], PhantomData)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, ArithmeticOverflow, IntoValue};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
    }

    #[test]
    fn unchecked_access() {
        let mut v = vec4(1, 2, 3, 4);
        unsafe {
            v.set_unchecked(2, 30);
            assert_eq!(*v.get_unchecked(2), 30);
            assert_eq!(*v.get_unchecked(3), 4);
        }
        assert_eq!(v, vec4(1, 2, 30, 4));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), Ok(3));
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), Ok(35));

        assert_eq!(Vec2f::X.dot(Vec2f::X).into_value(), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y).into_value(), 0.0);
    }

    #[test]
    fn integer_overflow() {
        let err = vec2(i32::MAX, 0).add(vec2(1, 0)).unwrap_err();
        assert_eq!(err, ArithmeticOverflow::new("add"));
        assert!(vec2(i64::MIN, 0).subtract(vec2(1, 0)).is_err());
        assert!(vec2(i32::MIN, 0).absolute().is_err());
        assert!(vec2(65536, 0).magnitude_squared().is_err());
        assert!(vec3(i32::MAX, 0, 0).scale(1.5).is_err());
        assert!(vec2(i32::MAX, 0).distance(vec2(-1, 0)).is_err());
    }

    #[test]
    fn in_place_failure_leaves_value_unmodified() {
        let mut v = vec3(1, i32::MAX, 3);
        assert!(v.scale_in_place(2.0).is_err());
        assert_eq!(v, vec3(1, i32::MAX, 3));
        assert!(v.add_scaled_in_place(vec3(0, 1, 0), 1.0).is_err());
        assert_eq!(v, vec3(1, i32::MAX, 3));

        let mut v = vec2(i64::MIN, 5);
        assert!(v.absolute_in_place().is_err());
        assert_eq!(v, vec2(i64::MIN, 5));
    }

    #[test]
    fn in_place_chaining() {
        let mut v = vec3(1.0, 2.0, 2.0);
        v.scale_in_place(2.0)
            .into_value()
            .add_in_place(Vec3f::X)
            .into_value()
            .normalize_in_place();
        assert_approx_eq!(v.magnitude().into_value(), 1.0);
        assert_approx_eq!(v, vec3(3.0, 4.0, 4.0).normalize());
    }

    #[test]
    fn add_scaled() {
        assert_eq!(vec2(1, 1).add_scaled(vec2(2, 3), 2.0), Ok(vec2(5, 7)));
        assert_eq!(
            vec2(1.0, 1.0).add_scaled(vec2(2.0, 3.0), 0.5).into_value(),
            vec2(2.0, 2.5)
        );
    }

    #[test]
    fn distance() {
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)).into_value(), 5.0);
        assert_eq!(vec3(1, 2, 3).distance(vec3(1, 2, 3)), Ok(0));
    }

    #[test]
    fn clamps() {
        let v = vec4(-2.0, 0.5, 3.0, 9.0);
        assert_eq!(v.clamp(0.0, 1.0), vec4(0.0, 0.5, 1.0, 1.0));
        assert_eq!(v.clamp_minimum(1.0), vec4(1.0, 1.0, 3.0, 9.0));
        assert_eq!(v.clamp_maximum(1.0), vec4(-2.0, 0.5, 1.0, 1.0));
        assert_eq!(
            v.clamp_minimum_by_vector(vec4(0.0, 1.0, 0.0, 10.0)),
            vec4(0.0, 1.0, 3.0, 10.0)
        );
        assert_eq!(
            v.clamp_maximum_by_vector(vec4(-3.0, 1.0, 0.0, 10.0)),
            vec4(-3.0, 0.5, 0.0, 9.0)
        );

        let mut w = vec2(-7, 7);
        w.clamp_in_place(-1, 1);
        assert_eq!(w, vec2(-1, 1));
        w.clamp_by_vector_in_place(vec2(0, 0), vec2(5, 0));
        assert_eq!(w, vec2(0, 0));

        let mut u = v;
        u.clamp_minimum_in_place(1.0);
        assert_eq!(u, v.clamp_minimum(1.0));
        let mut u = v;
        u.clamp_maximum_in_place(1.0);
        assert_eq!(u, v.clamp_maximum(1.0));

        let mut u = v;
        u.clamp_minimum_by_vector_in_place(vec4(0.0, 1.0, 0.0, 10.0))
            .clamp_maximum_by_vector_in_place(vec4(-3.0, 1.0, 0.0, 10.0));
        assert_eq!(u, vec4(-3.0, 1.0, 0.0, 10.0));

        let mut n = Vec3l::new([i64::MIN, 0, i64::MAX]);
        n.clamp_minimum_in_place(-1).clamp_maximum_in_place(1);
        assert_eq!(n, vec3(-1, 0, 1));
    }

    #[test]
    fn interpolation() {
        let a = vec3(1.0f64, -2.0, 1e-3);
        let b = vec3(7.25, 1e12, -0.1);
        assert_eq!(a.interpolate_linear(b, 0.0).into_value(), a);
        assert_eq!(a.interpolate_linear(b, 1.0).into_value(), b);
        assert_approx_eq!(
            a.interpolate_linear(b, 0.5).into_value(),
            vec3(4.125, 5e11 - 1.0, -0.0495)
        );

        let a = vec2(i64::MAX, i64::MIN);
        let b = vec2(0, 0);
        assert_eq!(a.interpolate_linear(b, 0.0), Ok(a));
        assert_eq!(b.interpolate_linear(a, 1.0), Ok(a));
        assert_eq!(vec2(0, 0).interpolate_linear(vec2(3, -3), 0.5), Ok(vec2(2, -2)));

        // Each component is rounded once, after blending.
        assert_eq!(vec2(1, 3).interpolate_linear(vec2(1, 3), 0.5), Ok(vec2(1, 3)));
        assert_eq!(vec2(1, 3).interpolate_linear(vec2(2, 4), 0.5), Ok(vec2(2, 4)));
        assert_eq!(vec3(5, -5, 0).interpolate_linear(vec3(5, -5, 0), 0.7), Ok(vec3(5, -5, 0)));
        let mut v = vec2(1, 3);
        v.interpolate_linear_in_place(vec2(1, 3), 0.25).unwrap();
        assert_eq!(v, vec2(1, 3));
    }

    #[test]
    fn projection() {
        let p = vec3(2.0, 3.0, 4.0);
        let q = vec3(1.0, 1.0, 0.0);
        let proj = p.projection(q).into_value();
        assert_eq!(proj, vec3(2.5, 2.5, 0.0));
        assert_approx_eq!(p.subtract(proj).into_value().dot(q).into_value(), 0.0);

        assert_eq!(vec2(7, 3).projection(vec2(2, 0)), Ok(vec2(7, 0)));
        assert!(vec2(7, 3).projection(vec2(0, 0)).is_err());
    }

    #[test]
    fn normalize() {
        assert_eq!(vec2(0.0, -8.0).normalize(), vec2(0.0, -1.0));
        assert_eq!(Vec4d::ZERO.normalize(), Vec4d::ZERO);
        let nan = vec2(f32::NAN, 1.0).normalize();
        assert!(nan.x.is_nan());
        assert_eq!(nan.y, 1.0);
    }

    #[test]
    fn angle() {
        assert_approx_eq!(Vec3f::Y.angle(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.angle(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.angle(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle(vec2(1.0, -1.0)), TAU / 4.0);

        // The cosine of these rounds to slightly above 1.
        let v = vec3(0.1f32, 0.2, 0.3);
        assert!(!v.angle(v.scale(3.0).into_value()).is_nan());
    }

    #[test]
    fn ortho_normalize() {
        let (a, b) = vec3(1.0, 1.0, 0.0).ortho_normalize(vec3(0.0, 3.0, 1.0));
        assert_approx_eq!(a.magnitude().into_value(), 1.0);
        assert_approx_eq!(b.magnitude().into_value(), 1.0);
        assert_approx_eq!(a.dot(b).into_value(), 0.0);

        // Parallel input degenerates to the zero vector.
        let (a, b) = vec2(2.0, 0.0).ortho_normalize(vec2(-4.0, 0.0));
        assert_eq!(a, Vec2f::X);
        assert_eq!(b.magnitude_squared().into_value(), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), Ok(vec3(0, 0, 1)));
        assert_eq!(vec3(2, 3, 4).cross(vec3(5, 6, 7)), Ok(vec3(-3, 6, -3)));
        assert!(vec3(i32::MAX, 2, 0).cross(vec3(0, i32::MAX, 2)).is_err());
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }
}

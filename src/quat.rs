mod ops;

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{kernel, vec4, vector::view::XYZW, IntoValue, Matrix, One, Real, Scalar, Vector, Zero};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, where `w` is the real part. The components can be accessed as fields.
///
/// As with [`Vector`], every operation that can overflow returns `Result<_, T::Overflow>`, and the
/// `*_in_place` methods leave `self` unmodified if they fail.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    fn from_array(components: [T; 4]) -> Self {
        Self {
            vec: Vector::wrap(components),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }
}

impl<T: Scalar> Quat<T> {
    pub fn add(self, rhs: Self) -> Result<Self, T::Overflow> {
        self.vec.add(rhs.vec).map(Self::from_vec)
    }

    pub fn subtract(self, rhs: Self) -> Result<Self, T::Overflow> {
        self.vec.subtract(rhs.vec).map(Self::from_vec)
    }

    /// Multiplies every component with `r`.
    pub fn scale(self, r: T::Factor) -> Result<Self, T::Overflow> {
        self.vec.scale(r).map(Self::from_vec)
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Result<Self, T::Overflow> {
        kernel::quat_conjugate(self.vec.into_array()).map(Self::from_array)
    }

    pub fn dot(self, other: Self) -> Result<T, T::Overflow> {
        self.vec.dot(other.vec)
    }

    /// Returns the squared magnitude of this quaternion.
    ///
    /// If the squared magnitude is not equal to one, the rotation matrix of this quaternion will
    /// scale vectors in addition to rotating them.
    pub fn magnitude_squared(self) -> Result<T, T::Overflow> {
        self.vec.magnitude_squared()
    }

    #[doc(alias = "norm", alias = "length")]
    pub fn magnitude(self) -> Result<T, T::Overflow> {
        self.vec.magnitude()
    }

    /// Component-wise linear interpolation between `self` and `other`.
    ///
    /// The result is generally not of unit length; [`normalize`][Quat::normalize] it to obtain a
    /// rotation.
    pub fn interpolate_linear(self, other: Self, alpha: T::Factor) -> Result<Self, T::Overflow> {
        self.vec
            .interpolate_linear(other.vec, alpha)
            .map(Self::from_vec)
    }

    /// Computes the Hamilton product `self * rhs`.
    ///
    /// When used as rotations, the product applies `rhs` first, then `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// let i = Quat::from_components(1, 0, 0, 0);
    /// let j = Quat::from_components(0, 1, 0, 0);
    /// let k = Quat::from_components(0, 0, 1, 0);
    /// assert_eq!(i.multiply(j), Ok(k));
    /// assert_eq!(j.multiply(i), Ok(Quat::from_components(0, 0, -1, 0)));
    /// ```
    pub fn multiply(self, rhs: Self) -> Result<Self, T::Overflow> {
        kernel::quat_multiply(self.vec.into_array(), rhs.vec.into_array()).map(Self::from_array)
    }

    /// In-place version of [`Quat::multiply`].
    pub fn multiply_in_place(&mut self, rhs: Self) -> Result<&mut Self, T::Overflow> {
        *self = self.multiply(rhs)?;
        Ok(self)
    }

    /// Returns the 4x4 rotation matrix of this quaternion.
    ///
    /// For unit quaternions, the upper left 3x3 block is a right-handed rotation acting on column
    /// vectors, and the last row and column are `(0, 0, 0, 1)`.
    ///
    /// # Examples
    ///
    /// A quarter turn around the Z axis maps X onto Y:
    ///
    /// ```
    /// # use zaru_tensors::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3d::Z, FRAC_PI_2);
    /// let m = q.rotation_matrix().into_value();
    /// assert_approx_eq!(m * Vec4d::X, Vec4d::Y).abs(1e-15);
    /// ```
    pub fn rotation_matrix(self) -> Result<Matrix<T, 4>, T::Overflow> {
        kernel::quat_rotation_matrix(self.vec.into_array()).map(Matrix::wrap)
    }

    /// Writes the rotation matrix of this quaternion into `out`.
    ///
    /// On overflow, `out` is left unmodified.
    pub fn rotation_matrix_into<'a, S, D>(
        self,
        out: &'a mut Matrix<T, 4, S, D>,
    ) -> Result<&'a mut Matrix<T, 4, S, D>, T::Overflow> {
        *out = self.rotation_matrix()?.retag();
        Ok(out)
    }
}

impl<T: Real> Quat<T> {
    fn half() -> T {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` is expected to be normalized; otherwise the resulting quaternion is not a unit
    /// quaternion.
    #[doc(alias = "from_angle_axis")]
    pub fn from_axis_angle<S>(axis: Vector<T, 3, S>, radians: T) -> Self {
        let (sin, cos) = (radians * Self::half()).sin_cos();
        let [x, y, z] = axis.into_array();
        Self::from_components(x * sin, y * sin, z * sin, cos)
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * Self::half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * Self::half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * Self::half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Extracts the rotation from the upper left 3x3 block of `m`.
    ///
    /// `m` should be a pure rotation (orthonormal, with a determinant of 1). The result is a unit
    /// quaternion whose [`rotation_matrix`][Quat::rotation_matrix] reproduces that block.
    pub fn from_rotation_matrix<S, D>(m: &Matrix<T, 4, S, D>) -> Self {
        let e = |row: usize, col: usize| m[(row, col)];
        let one = T::ONE;
        let half = Self::half();
        let quarter = half * half;

        let trace = e(0, 0) + e(1, 1) + e(2, 2);
        // Pick the largest of w, x, y, z to divide by, to avoid cancellation.
        let q = if trace > T::ZERO {
            let s = (trace + one).sqrt() * (one + one);
            Self::from_components(
                (e(2, 1) - e(1, 2)) / s,
                (e(0, 2) - e(2, 0)) / s,
                (e(1, 0) - e(0, 1)) / s,
                s * quarter,
            )
        } else if e(0, 0) > e(1, 1) && e(0, 0) > e(2, 2) {
            let s = (one + e(0, 0) - e(1, 1) - e(2, 2)).sqrt() * (one + one);
            Self::from_components(
                s * quarter,
                (e(0, 1) + e(1, 0)) / s,
                (e(0, 2) + e(2, 0)) / s,
                (e(2, 1) - e(1, 2)) / s,
            )
        } else if e(1, 1) > e(2, 2) {
            let s = (one + e(1, 1) - e(0, 0) - e(2, 2)).sqrt() * (one + one);
            Self::from_components(
                (e(0, 1) + e(1, 0)) / s,
                s * quarter,
                (e(1, 2) + e(2, 1)) / s,
                (e(0, 2) - e(2, 0)) / s,
            )
        } else {
            let s = (one + e(2, 2) - e(0, 0) - e(1, 1)).sqrt() * (one + one);
            Self::from_components(
                (e(0, 2) + e(2, 0)) / s,
                (e(1, 2) + e(2, 1)) / s,
                s * quarter,
                (e(1, 0) - e(0, 1)) / s,
            )
        };
        q.normalize()
    }

    /// Returns a normalized copy of this quaternion (whose magnitude equals one).
    ///
    /// The zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    /// In-place version of [`Quat::normalize`].
    pub fn normalize_in_place(&mut self) -> &mut Self {
        self.vec.normalize_in_place();
        self
    }
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> From<Quat<T>> for Matrix<T, 4> {
    fn from(q: Quat<T>) -> Self {
        q.rotation_matrix().into_value()
    }
}

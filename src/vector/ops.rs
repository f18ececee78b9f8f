//! Trait implementations.
//!
//! None of these look at the coordinate-space tag, so they are written by hand instead of derived
//! (a derive would require the tag to implement the trait too).

use std::{
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{approx::ApproxEq, kernel, IntoValue, Real};

use super::Vector;

impl<T: Clone, const N: usize, S> Clone for Vector<T, N, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self::wrap(self.0.clone())
    }
}

impl<T: Copy, const N: usize, S> Copy for Vector<T, N, S> {}

impl<T: Hash, const N: usize, S> Hash for Vector<T, N, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, const N: usize, S> Index<usize> for Vector<T, N, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize, S> IndexMut<usize> for Vector<T, N, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Comparing vectors from different spaces is almost certainly a mistake, so `S` must match.
impl<T, U, const N: usize, S> PartialEq<Vector<U, N, S>> for Vector<T, N, S>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, S>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize, S> Eq for Vector<T, N, S> {}

impl<T, U, const N: usize, S> PartialEq<[U; N]> for Vector<T, N, S>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize, S> PartialEq<Vector<U, N, S>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, S>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize, S> ApproxEq for Vector<T, N, S>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

// Operators are only provided for the floating-point domains. Integer vectors have to go through
// the named methods, which surface overflow.

/// Element-wise negation.
impl<T: Real, const N: usize, S> Neg for Vector<T, N, S> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::wrap(kernel::negate(self.0).into_value())
    }
}

/// Element-wise addition.
impl<T: Real, const N: usize, S> Add for Vector<T, N, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::wrap(kernel::add(self.0, rhs.0).into_value())
    }
}

impl<T: Real, const N: usize, S> AddAssign for Vector<T, N, S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T: Real, const N: usize, S> Sub for Vector<T, N, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::wrap(kernel::subtract(self.0, rhs.0).into_value())
    }
}

impl<T: Real, const N: usize, S> SubAssign for Vector<T, N, S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Real, const N: usize, S> Mul<T> for Vector<T, N, S> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::wrap(kernel::scale(self.0, rhs).into_value())
    }
}

impl<T: Real, const N: usize, S> MulAssign<T> for Vector<T, N, S> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Vector-Scalar division.
impl<T: Real, const N: usize, S> Div<T> for Vector<T, N, S> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T: Real, const N: usize, S> DivAssign<T> for Vector<T, N, S> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use crate::{vec2, vec3, Vec3f};

    use super::*;

    enum World {}

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn tags_are_invisible() {
        let untagged = vec3(1, 2, 3);
        let tagged = untagged.retag::<World>();
        assert_eq!(hash_of(&untagged), hash_of(&tagged));
        assert_eq!(tagged.untag(), untagged);
        assert_eq!(tagged, [1, 2, 3]);
        assert_eq!(format!("{tagged:?}"), format!("{untagged:?}"));
        assert_eq!(
            bytemuck::bytes_of(&tagged),
            bytemuck::bytes_of(&[1i32, 2, 3])
        );
        assert_eq!(
            std::mem::size_of::<Vector<f64, 4, World>>(),
            std::mem::size_of::<[f64; 4]>()
        );
    }

    #[test]
    fn operators_match_methods() {
        let a = vec3(1.5, -2.0, 0.25);
        let b = Vec3f::Z;
        assert_eq!(a + b, a.add(b).into_value());
        assert_eq!(a - b, a.subtract(b).into_value());
        assert_eq!(a * 3.0, a.scale(3.0).into_value());
        assert_eq!(a / 2.0, vec3(0.75, -1.0, 0.125));
        assert_eq!(-a, vec3(-1.5, 2.0, -0.25));

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        c /= 2.0;
        assert_eq!(c, a);
    }

    #[test]
    fn array_comparisons() {
        assert_eq!(vec2(1, 2), [1, 2]);
        assert_eq!([1, 2], vec2(1, 2));
        assert_ne!(vec2(1, 2), [2, 1]);
    }
}

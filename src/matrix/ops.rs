use std::{
    hash::{Hash, Hasher},
    ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub},
};

use crate::{approx::ApproxEq, kernel, IntoValue, Matrix, Real, Vector};

impl<T: Clone, const N: usize, S, D> Clone for Matrix<T, N, S, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self::wrap(self.0.clone())
    }
}

impl<T: Copy, const N: usize, S, D> Copy for Matrix<T, N, S, D> {}

impl<T: Hash, const N: usize, S, D> Hash for Matrix<T, N, S, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, const N: usize, S, D> Index<(usize, usize)> for Matrix<T, N, S, D> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const N: usize, S, D> IndexMut<(usize, usize)> for Matrix<T, N, S, D> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<T, U, const N: usize, S, D> PartialEq<Matrix<U, N, S, D>> for Matrix<T, N, S, D>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N, S, D>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T: Eq, const N: usize, S, D> Eq for Matrix<T, N, S, D> {}

impl<T, const N: usize, S, D> ApproxEq for Matrix<T, N, S, D>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// Matrix * Column Vector.
impl<T: Real, const N: usize, S, D> Mul<Vector<T, N, S>> for Matrix<T, N, S, D> {
    type Output = Vector<T, N, D>;

    fn mul(self, rhs: Vector<T, N, S>) -> Self::Output {
        self.multiply_vector(rhs).into_value()
    }
}

/// Matrix * Matrix.
impl<T: Real, const N: usize, S0, S, D> Mul<Matrix<T, N, S0, S>> for Matrix<T, N, S, D> {
    type Output = Matrix<T, N, S0, D>;

    fn mul(self, rhs: Matrix<T, N, S0, S>) -> Self::Output {
        self.multiply(rhs).into_value()
    }
}

impl<T: Real, const N: usize, S, D> MulAssign<Matrix<T, N, S, S>> for Matrix<T, N, S, D> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, S, S>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T: Real, const N: usize, S, D> Mul<T> for Matrix<T, N, S, D> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::wrap(kernel::mat_scale(self.0, rhs).into_value())
    }
}

impl<T: Real, const N: usize, S, D> Add for Matrix<T, N, S, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::wrap(kernel::mat_add(self.0, rhs.0).into_value())
    }
}

impl<T: Real, const N: usize, S, D> Sub for Matrix<T, N, S, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::wrap(kernel::mat_subtract(self.0, rhs.0).into_value())
    }
}

impl<T: Real, const N: usize, S, D> Neg for Matrix<T, N, S, D> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

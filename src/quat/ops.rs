use std::ops::{Mul, MulAssign};

use crate::{approx::ApproxEq, IntoValue, Quat, Real};

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_vec().abs_diff_eq(other.as_vec(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_vec().rel_diff_eq(other.as_vec(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_vec().ulps_diff_eq(other.as_vec(), ulps_tolerance)
    }
}

/// Hamilton product.
impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs).into_value()
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, IntoValue, Quat};

    #[test]
    fn operator_matches_method() {
        let a = Quat::from_rotation_x(0.5f32);
        let b = Quat::from_rotation_z(-1.0);
        assert_eq!(a * b, a.multiply(b).into_value());

        let mut c = a;
        c *= Quat::IDENTITY;
        assert_eq!(c, a);
        c *= a.conjugate().into_value();
        assert_approx_eq!(c, Quat::IDENTITY).abs(1e-6);
    }
}

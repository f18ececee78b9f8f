//! Numeric domain policy.
//!
//! The kernel is generic over [`Scalar`], which supplies the primitive arithmetic of one element
//! domain together with that domain's failure semantics. [`Real`] refines it for the
//! floating-point domains, which can never fail and additionally support square roots and
//! trigonometry.

use std::{convert::Infallible, fmt, ops};

use crate::{
    approx::{ApproxEq, DefaultTolerances},
    ArithmeticOverflow, Error,
};

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// An element domain of the kernel.
///
/// Each primitive returns a [`Result`] whose error type is [`Scalar::Overflow`]. Integer domains
/// use [`ArithmeticOverflow`] and never wrap silently; floating-point domains use [`Infallible`]
/// and follow plain IEEE 754 arithmetic.
///
/// Implementing this trait (together with its supertraits) is all a new domain, for example a
/// fixed-point type, needs to do to participate in every vector, matrix and quaternion operation.
pub trait Scalar:
    Copy
    + PartialEq
    + fmt::Debug
    + Zero
    + One
    + MinMax
    + DefaultTolerances
    + ApproxEq<Tolerance = Self>
{
    /// The error signalled by the arithmetic primitives.
    type Overflow: std::error::Error + Into<Error> + Copy + Send + Sync + 'static;

    /// The real number type used for scaling factors and interpolation weights.
    type Factor: Real;

    fn add(self, rhs: Self) -> Result<Self, Self::Overflow>;
    fn subtract(self, rhs: Self) -> Result<Self, Self::Overflow>;
    fn multiply(self, rhs: Self) -> Result<Self, Self::Overflow>;
    fn absolute(self) -> Result<Self, Self::Overflow>;
    fn negate(self) -> Result<Self, Self::Overflow>;

    /// Multiplies `self` with a real-valued factor.
    ///
    /// Integer domains round the exact product to the nearest integer (halfway cases away from
    /// zero) before checking that it is representable.
    fn scale(self, factor: Self::Factor) -> Result<Self, Self::Overflow>;

    /// Computes `self * (1 - alpha) + other * alpha`.
    ///
    /// `alpha = 0` yields `self` and `alpha = 1` yields `other`, exactly. Integer domains evaluate
    /// the blend in [`Scalar::Factor`] and round once (halfway cases away from zero), so
    /// interpolating a value with itself returns it unchanged.
    fn interpolate_linear(self, other: Self, alpha: Self::Factor) -> Result<Self, Self::Overflow>;

    /// Square root, truncated towards zero for integer domains.
    fn square_root(self) -> Self;

    /// Converts `self` to the [`Scalar::Factor`] type.
    fn to_factor(self) -> Self::Factor;
}

/// The floating-point domains ([`f32`] and [`f64`]).
pub trait Real:
    Scalar<Overflow = Infallible, Factor = Self>
    + Sqrt
    + Trig
    + PartialOrd
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Neg<Output = Self>
{
}

macro_rules! float_domain {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    <$ty>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$ty>::max(self, other)
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                fn asin(self) -> Self {
                    <$ty>::asin(self)
                }

                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn atan(self) -> Self {
                    <$ty>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$ty>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }
            }

            impl Scalar for $ty {
                type Overflow = Infallible;
                type Factor = $ty;

                #[inline]
                fn add(self, rhs: Self) -> Result<Self, Infallible> {
                    Ok(self + rhs)
                }

                #[inline]
                fn subtract(self, rhs: Self) -> Result<Self, Infallible> {
                    Ok(self - rhs)
                }

                #[inline]
                fn multiply(self, rhs: Self) -> Result<Self, Infallible> {
                    Ok(self * rhs)
                }

                #[inline]
                fn absolute(self) -> Result<Self, Infallible> {
                    Ok(<$ty>::abs(self))
                }

                #[inline]
                fn negate(self) -> Result<Self, Infallible> {
                    Ok(-self)
                }

                #[inline]
                fn scale(self, factor: Self) -> Result<Self, Infallible> {
                    Ok(self * factor)
                }

                #[inline]
                fn interpolate_linear(self, other: Self, alpha: Self) -> Result<Self, Infallible> {
                    Ok(self * (1.0 - alpha) + other * alpha)
                }

                #[inline]
                fn square_root(self) -> Self {
                    <$ty>::sqrt(self)
                }

                #[inline]
                fn to_factor(self) -> Self {
                    self
                }
            }

            impl Real for $ty {}
        )+
    };
}
float_domain!(f32, f64);

// `$limit` is 2^(BITS-1), the smallest power of two that no longer fits. It is exact in `f64`,
// unlike `MAX as f64`, which rounds up for `i64`.
macro_rules! checked_int_domain {
    ($($ty:ty: $limit:literal),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $ty {
                type Overflow = ArithmeticOverflow;
                type Factor = f64;

                #[inline]
                fn add(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
                    self.checked_add(rhs).ok_or_else(|| ArithmeticOverflow::new("add"))
                }

                #[inline]
                fn subtract(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
                    self.checked_sub(rhs).ok_or_else(|| ArithmeticOverflow::new("subtract"))
                }

                #[inline]
                fn multiply(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
                    self.checked_mul(rhs).ok_or_else(|| ArithmeticOverflow::new("multiply"))
                }

                #[inline]
                fn absolute(self) -> Result<Self, ArithmeticOverflow> {
                    self.checked_abs().ok_or_else(|| ArithmeticOverflow::new("absolute"))
                }

                #[inline]
                fn negate(self) -> Result<Self, ArithmeticOverflow> {
                    self.checked_neg().ok_or_else(|| ArithmeticOverflow::new("negate"))
                }

                fn scale(self, factor: f64) -> Result<Self, ArithmeticOverflow> {
                    const LIMIT: f64 = $limit;

                    if factor.fract() == 0.0 && (-LIMIT..LIMIT).contains(&factor) {
                        // Integral factors get an exact product.
                        return self
                            .checked_mul(factor as $ty)
                            .ok_or_else(|| ArithmeticOverflow::new("scale"));
                    }

                    // `f64::round` rounds halfway cases away from zero. NaN and infinities fail
                    // the range check.
                    let product = (self as f64 * factor).round();
                    if (-LIMIT..LIMIT).contains(&product) {
                        Ok(product as $ty)
                    } else {
                        Err(ArithmeticOverflow::new("scale"))
                    }
                }

                fn interpolate_linear(self, other: Self, alpha: f64) -> Result<Self, ArithmeticOverflow> {
                    const LIMIT: f64 = $limit;

                    if alpha == 0.0 || self == other {
                        return Ok(self);
                    }
                    if alpha == 1.0 {
                        return Ok(other);
                    }

                    let blend = (self as f64 * (1.0 - alpha) + other as f64 * alpha).round();
                    if (-LIMIT..LIMIT).contains(&blend) {
                        Ok(blend as $ty)
                    } else {
                        Err(ArithmeticOverflow::new("interpolate_linear"))
                    }
                }

                fn square_root(self) -> Self {
                    if self <= 0 {
                        return 0;
                    }

                    // The `f64` estimate can be off by one for large values.
                    let mut root = (self as f64).sqrt() as $ty;
                    while root.checked_mul(root).map_or(true, |sq| sq > self) {
                        root -= 1;
                    }
                    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= self) {
                        root += 1;
                    }
                    root
                }

                #[inline]
                fn to_factor(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
checked_int_domain!(i32: 2147483648.0, i64: 9223372036854775808.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_overflows() {
        assert_eq!(Scalar::add(2147483646i32, 1), Ok(i32::MAX));
        let err = Scalar::add(2147483647i32, 1).unwrap_err();
        assert_eq!(err.operation(), "add");
        assert!(Scalar::add(i64::MAX, 1).is_err());
        assert!(Scalar::subtract(i64::MIN, 1).is_err());
        assert!(Scalar::multiply(i32::MAX, 2).is_err());
    }

    #[test]
    fn checked_abs_and_negate() {
        assert_eq!(Scalar::absolute(-5i32), Ok(5));
        assert!(Scalar::absolute(i32::MIN).is_err());
        assert!(Scalar::negate(i64::MIN).is_err());
        assert_eq!(Scalar::negate(7i64), Ok(-7));
    }

    #[test]
    fn float_ops_never_fail() {
        assert_eq!(Scalar::add(f32::MAX, f32::MAX), Ok(f32::INFINITY));
        assert_eq!(Scalar::absolute(-2.5f64), Ok(2.5));
    }

    #[test]
    fn integer_scale_rounds_half_away_from_zero() {
        assert_eq!(Scalar::scale(5i32, 0.5), Ok(3));
        assert_eq!(Scalar::scale(-5i32, 0.5), Ok(-3));
        assert_eq!(Scalar::scale(3i32, 0.5), Ok(2));
        assert_eq!(Scalar::scale(10i64, 0.25), Ok(3));
        assert_eq!(Scalar::scale(10i64, 0.24), Ok(2));
    }

    #[test]
    fn integer_scale_is_exact_for_integral_factors() {
        assert_eq!(Scalar::scale(i64::MAX, 1.0), Ok(i64::MAX));
        assert_eq!(Scalar::scale(i64::MIN, 1.0), Ok(i64::MIN));
        assert_eq!(Scalar::scale(i64::MAX - 1, 0.0), Ok(0));
        assert_eq!(Scalar::scale(-3i32, -2.0), Ok(6));
    }

    #[test]
    fn integer_scale_overflow() {
        assert!(Scalar::scale(i32::MAX, 2.0).is_err());
        assert!(Scalar::scale(i32::MAX, 1.5).is_err());
        assert!(Scalar::scale(1i32, f64::NAN).is_err());
        assert!(Scalar::scale(1i64, f64::INFINITY).is_err());
        assert!(Scalar::scale(1i32, 4294967296.0).is_err());
    }

    #[test]
    fn integer_interpolation_rounds_once() {
        assert_eq!(Scalar::interpolate_linear(1i32, 1, 0.5), Ok(1));
        assert_eq!(Scalar::interpolate_linear(3i32, 3, 0.5), Ok(3));
        assert_eq!(Scalar::interpolate_linear(-7i64, -7, 0.3), Ok(-7));
        // 1 * 0.5 + 2 * 0.5 = 1.5, not round(0.5) + round(1.0) = 2.
        assert_eq!(Scalar::interpolate_linear(1i32, 2, 0.5), Ok(2));
        assert_eq!(Scalar::interpolate_linear(0i32, 3, 0.5), Ok(2));
        assert_eq!(Scalar::interpolate_linear(0i32, -3, 0.5), Ok(-2));
        assert_eq!(Scalar::interpolate_linear(1i32, 4, 0.25), Ok(2));
        assert_eq!(Scalar::interpolate_linear(i64::MAX, i64::MIN, 0.0), Ok(i64::MAX));
        assert_eq!(Scalar::interpolate_linear(i64::MAX, i64::MIN, 1.0), Ok(i64::MIN));
    }

    #[test]
    fn integer_interpolation_overflow() {
        assert!(Scalar::interpolate_linear(i32::MAX, 0, -1.0).is_err());
        assert!(Scalar::interpolate_linear(0i32, i32::MIN, 1.5).is_err());
        assert!(Scalar::interpolate_linear(0i64, 1, f64::NAN).is_err());
        assert_eq!(Scalar::interpolate_linear(i32::MAX, i32::MAX, 2.0), Ok(i32::MAX));
    }

    #[test]
    fn integer_square_root_truncates() {
        assert_eq!(Scalar::square_root(0i32), 0);
        assert_eq!(Scalar::square_root(-4i32), 0);
        assert_eq!(Scalar::square_root(15i32), 3);
        assert_eq!(Scalar::square_root(16i32), 4);
        assert_eq!(Scalar::square_root(i32::MAX), 46340);
        assert_eq!(Scalar::square_root(i64::MAX), 3037000499);
    }
}

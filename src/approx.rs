//! Approximate equality.
//!
//! Two comparison strategies are offered, and they are deliberately *not* interchangeable:
//!
//! - [`almost_equal`] compares under a caller-supplied [`AlmostEqualContext`], whose relative
//!   tolerance scales with the magnitude of the operands.
//! - [`approximately_equal`] uses a fixed heuristic built from the [`DefaultTolerances`] of the
//!   compared type: a small number of ULPs, or a tiny absolute difference.
//!
//! Integer types implement [`ApproxEq`] too; with their default tolerance of 0, both strategies
//! reduce to exact equality for them.
//!
//! Tests mostly go through [`assert_approx_eq!`][crate::assert_approx_eq], which picks the
//! comparison from the methods called on the returned [`Asserter`].

mod impls;

use std::{fmt, panic::Location};

/// Comparison of values that may differ by rounding errors.
///
/// Vectors, matrices, quaternions, arrays and slices compare element-wise: they are equal if every
/// pair of elements is.
///
/// Background on comparing floats:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The type of the absolute and relative tolerances (the element type itself for all built-in
    /// implementations).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([units in the last place]).
    ///
    /// `NaN` equals nothing. `-0.0` equals `+0.0`, but no other values of opposite sign are equal.
    ///
    /// [units in the last place]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances of an [`ApproxEq::Tolerance`] type.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

macro_rules! default_tolerances {
    ($($ty:ty => $tol:expr, $ulps:expr;)+) => {
        $(
            impl DefaultTolerances for $ty {
                const DEFAULT_ABS_TOLERANCE: Self = $tol;
                const DEFAULT_REL_TOLERANCE: Self = $tol;
                const DEFAULT_ULPS_TOLERANCE: u32 = $ulps;
            }
        )+
    };
}

default_tolerances! {
    f32 => f32::EPSILON, 4;
    f64 => f64::EPSILON, 4;
    i32 => 0, 0;
    i64 => 0, 0;
}

/// Tolerances for [`almost_equal`].
///
/// Two values are *almost equal* if their absolute difference is at most
/// [`max_abs_diff`][Self::max_abs_diff], *or* if it is at most the larger of their magnitudes
/// times [`max_rel_diff`][Self::max_rel_diff]. The absolute bound matters for values near zero,
/// where any relative bound becomes useless.
///
/// The [`Default`] context uses [`DefaultTolerances::DEFAULT_ABS_TOLERANCE`] and
/// [`DefaultTolerances::DEFAULT_REL_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmostEqualContext<T> {
    max_abs_diff: T,
    max_rel_diff: T,
}

impl<T: Copy> AlmostEqualContext<T> {
    pub fn new(max_abs_diff: T, max_rel_diff: T) -> Self {
        Self {
            max_abs_diff,
            max_rel_diff,
        }
    }

    pub fn max_abs_diff(&self) -> T {
        self.max_abs_diff
    }

    pub fn max_rel_diff(&self) -> T {
        self.max_rel_diff
    }

    pub fn with_max_abs_diff(mut self, max_abs_diff: T) -> Self {
        self.max_abs_diff = max_abs_diff;
        self
    }

    pub fn with_max_rel_diff(mut self, max_rel_diff: T) -> Self {
        self.max_rel_diff = max_rel_diff;
        self
    }
}

impl<T: DefaultTolerances> Default for AlmostEqualContext<T> {
    fn default() -> Self {
        Self {
            max_abs_diff: T::DEFAULT_ABS_TOLERANCE,
            max_rel_diff: T::DEFAULT_REL_TOLERANCE,
        }
    }
}

/// Compares `a` and `b` under the tolerances in `context`.
///
/// # Examples
///
/// ```
/// # use zaru_tensors::approx::*;
/// let context = AlmostEqualContext::new(0.0, 1e-5);
/// assert!(almost_equal(&context, &1000.0, &1000.001));
/// assert!(!almost_equal(&context, &1e-20, &2e-20));
/// ```
pub fn almost_equal<T>(context: &AlmostEqualContext<T::Tolerance>, a: &T, b: &T) -> bool
where
    T: ApproxEq + ?Sized,
{
    a.abs_diff_eq(b, context.max_abs_diff) || a.rel_diff_eq(b, context.max_rel_diff)
}

/// Compares `a` and `b` using a fixed heuristic.
///
/// The values are considered equal if at most [`DefaultTolerances::DEFAULT_ULPS_TOLERANCE`]
/// representable values lie between them, or if their absolute difference is at most
/// [`DefaultTolerances::DEFAULT_ABS_TOLERANCE`]. Unlike [`almost_equal`], the permitted difference
/// does not grow with the magnitude of the operands beyond a few ULPs.
///
/// # Examples
///
/// ```
/// # use zaru_tensors::approx::*;
/// assert!(approximately_equal(&1e-20, &2e-20));
/// assert!(!approximately_equal(&1000.0, &1000.001));
/// assert!(approximately_equal(&1.0f32, &(1.0 + f32::EPSILON)));
/// ```
pub fn approximately_equal<T>(a: &T, b: &T) -> bool
where
    T: ApproxEq + ?Sized,
{
    a.ulps_diff_eq(b, T::Tolerance::DEFAULT_ULPS_TOLERANCE)
        || a.abs_diff_eq(b, T::Tolerance::DEFAULT_ABS_TOLERANCE)
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the value is dropped, at the end of the assertion statement. Calling
/// [`abs`][Self::abs], [`rel`][Self::rel] or [`ulps`][Self::ulps] selects a comparison and its
/// tolerance; if several are selected, the values are equal when *any* of them says so. With none
/// selected, an absolute and a relative comparison with the [`DefaultTolerances`] are used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expectation: Expectation,
    location: &'static Location<'static>,
    message: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expectation: Expectation,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expectation,
            location: Location::caller(),
            message,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Suited to values near zero, including values of opposite sign.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.abs = Some(tolerance);
        self
    }

    /// Compares the absolute difference against `tolerance` times the larger magnitude.
    ///
    /// Any non-zero value needs a relative tolerance of at least 1 to equal zero.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.rel = Some(tolerance);
        self
    }

    /// Counts the representable values between the operands, allowing at most `tolerance`.
    pub fn ulps(&mut self, tolerance: u32) -> &mut Self {
        self.ulps = Some(tolerance);
        self
    }

    fn compare(&self) -> bool {
        let (left, right) = (self.left, self.right);
        match (self.abs, self.rel, self.ulps) {
            (None, None, None) => {
                left.abs_diff_eq(right, T::Tolerance::DEFAULT_ABS_TOLERANCE)
                    || left.rel_diff_eq(right, T::Tolerance::DEFAULT_REL_TOLERANCE)
            }
            (abs, rel, ulps) => {
                abs.map_or(false, |tol| left.abs_diff_eq(right, tol))
                    || rel.map_or(false, |tol| left.rel_diff_eq(right, tol))
                    || ulps.map_or(false, |tol| left.ulps_diff_eq(right, tol))
            }
        }
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` instead.
    fn drop(&mut self) {
        let expected = self.expectation == Expectation::Equal;
        if self.compare() != expected {
            fail(
                self.left,
                self.right,
                self.expectation,
                self.location,
                self.message,
            );
        }
    }
}

#[cold]
#[inline(never)]
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expectation: Expectation,
    location: &Location<'_>,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match expectation {
        Expectation::Equal => "==",
        Expectation::NotEqual => "!=",
    };
    let message = message.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{message}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Equal,
    NotEqual,
}

/// Asserts that two values are approximately equal, according to [`ApproxEq`].
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] whose methods choose the comparison.
/// See also [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use zaru_tensors::*;
/// let sum = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(sum, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
///
/// let m = Mat2d::rotation(std::f64::consts::PI);
/// assert_approx_eq!(m * vec2(1.0, 0.0), vec2(-1.0, 0.0), "rotating {:?}", m).abs(1e-15);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expectation::Equal,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expectation::Equal,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two values are *not* approximately equal, according to [`ApproxEq`].
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use zaru_tensors::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// assert_approx_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expectation::NotEqual,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expectation::NotEqual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

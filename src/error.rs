//! Error signals raised by the kernel.
//!
//! Floating-point domains never fail: their [`Scalar::Overflow`] type is [`Infallible`], and
//! [`IntoValue::into_value`] unwraps such results without a panic path. Integer domains report
//! [`ArithmeticOverflow`], and matrix inversion reports [`SingularMatrix`].
//!
//! [`Scalar::Overflow`]: crate::Scalar::Overflow

use std::convert::Infallible;

use thiserror::Error;

/// An integer primitive produced a result outside of its type's representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arithmetic overflow in `{operation}`")]
pub struct ArithmeticOverflow {
    operation: &'static str,
}

impl ArithmeticOverflow {
    pub(crate) fn new(operation: &'static str) -> Self {
        log::trace!("integer overflow detected in `{operation}`");
        Self { operation }
    }

    /// Returns the name of the primitive operation that overflowed (eg. `"add"`).
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// A matrix could not be inverted because its determinant is (almost) zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempt to invert a singular matrix")]
pub struct SingularMatrix;

/// Any failure the kernel can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    ArithmeticOverflow(#[from] ArithmeticOverflow),
    #[error(transparent)]
    SingularMatrix(#[from] SingularMatrix),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Convenience alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Extracts the value of a [`Result`] that cannot fail.
///
/// Every fallible kernel operation returns `Result<_, T::Overflow>`; for `f32` and `f64` that error
/// type is [`Infallible`], so the result can be unwrapped for free.
///
/// # Examples
///
/// ```
/// # use zaru_tensors::*;
/// let v = vec3(1.0, 2.0, 3.0).add(Vec3f::X).into_value();
/// assert_eq!(v, vec3(2.0, 2.0, 3.0));
/// ```
pub trait IntoValue<T> {
    fn into_value(self) -> T;
}

impl<T> IntoValue<T> for std::result::Result<T, Infallible> {
    #[inline]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ArithmeticOverflow::new("add").to_string(),
            "arithmetic overflow in `add`"
        );
        assert_eq!(
            Error::from(SingularMatrix).to_string(),
            "attempt to invert a singular matrix"
        );
    }

    #[test]
    fn conversions() {
        let err: Error = ArithmeticOverflow::new("multiply").into();
        assert!(matches!(err, Error::ArithmeticOverflow(e) if e.operation() == "multiply"));

        let result: Result<(), Error> = Err(SingularMatrix.into());
        assert_eq!(result, Err(Error::SingularMatrix(SingularMatrix)));
    }
}

//! Small fixed-size linear algebra with checked integer arithmetic and coordinate-space tags.
//!
//! This crate provides 2-, 3- and 4-dimensional [`Vector`]s, square [`Matrix`] types of the same
//! sizes, and [`Quat`]ernions. All of them are generic over their element type, which can be
//! [`f32`], [`f64`], [`i32`] or [`i64`] (or any other type implementing [`Scalar`]).
//!
//! # Numeric Domains
//!
//! Every operation behaves the same in every element domain, except for how failure is reported:
//!
//! - Floating-point arithmetic follows IEEE 754 and never fails. Operations still return a
//!   [`Result`], but its error type is [`Infallible`][std::convert::Infallible]; use
//!   [`IntoValue::into_value`] to unwrap it. The usual operators (`+`, `-`, `*`) are implemented for
//!   floating-point types only.
//! - Integer arithmetic is checked. Any intermediate result that does not fit into the element type
//!   makes the operation return [`ArithmeticOverflow`] instead of wrapping around.
//!
//! ```
//! # use zaru_tensors::*;
//! let v = vec3(1.0, 2.0, 2.0);
//! assert_eq!(v.magnitude().into_value(), 3.0);
//! assert_eq!(v + v, v.scale(2.0).into_value());
//!
//! let big = vec2(i32::MAX, 0);
//! assert!(big.add(vec2(1, 0)).is_err());
//! ```
//!
//! # Coordinate Spaces
//!
//! Vectors and matrices carry zero-sized type-level tags that name the coordinate space they live
//! in, so that mixing up spaces is a compile-time error. See the [`tag`] module.
//!
//! # Immutable and In-Place Operations
//!
//! All types are [`Copy`]. Methods taking `self` return a new value, while the methods ending in
//! `_in_place` modify `self` and return `&mut Self` for chaining. A failed in-place operation
//! leaves its receiver unmodified.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Dimensions are const generics, and only
//!   2, 3 and 4 are accepted.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").

pub mod approx;
mod error;
mod kernel;
mod matrix;
mod quat;
mod readable;
pub mod tag;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use readable::*;
pub use tag::{Dim, SupportedDim, Untagged};
pub use traits::*;
pub use vector::*;

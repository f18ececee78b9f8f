//! Coordinate-space tags and the supported dimensions.
//!
//! [`Vector`] and [`Matrix`] carry zero-sized *tag* type parameters naming the coordinate space
//! their values live in. Any type can serve as a tag; uninhabited enums are customary:
//!
//! ```
//! # use zaru_tensors::*;
//! enum World {}
//! enum Eye {}
//!
//! let a = Vector::<f32, 3, World>::new([1.0, 2.0, 3.0]);
//! let b = Vector::<f32, 3, World>::new([0.5, 0.5, 0.5]);
//! assert_eq!(a.add(b).into_value(), vec3(1.5, 2.5, 3.5).retag::<World>());
//! # let _ = Vector::<f32, 3, Eye>::ZERO;
//! ```
//!
//! Operations that combine two values require them to have the same tag. There is no runtime
//! check; the mistake is a type error:
//!
//! ```compile_fail
//! # use zaru_tensors::*;
//! enum World {}
//! enum Eye {}
//!
//! let a = Vector::<f32, 3, World>::ZERO;
//! let b = Vector::<f32, 3, Eye>::ZERO;
//! let _ = a.add(b);
//! ```
//!
//! A [`Matrix`] has a *source* and a *destination* tag. It accepts vectors tagged with its source
//! space and produces vectors tagged with its destination space, so transforms can only be chained
//! when the spaces line up:
//!
//! ```compile_fail
//! # use zaru_tensors::*;
//! enum World {}
//! enum Eye {}
//! enum Clip {}
//!
//! let world_to_eye = Matrix::<f32, 4, World, Eye>::IDENTITY;
//! let clip_to_eye = Matrix::<f32, 4, Clip, Eye>::IDENTITY;
//! // `world_to_eye` produces `Eye` vectors, but `clip_to_eye` expects `Clip` vectors.
//! let _ = clip_to_eye.multiply(world_to_eye);
//! ```
//!
//! Values whose coordinate space does not matter use the default tag, [`Untagged`]. Conversion
//! between tags is always explicit, via `retag` and `untag`. Tags are never observable at runtime:
//! they do not participate in equality, hashing, formatting, or the in-memory representation.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

/// The tag of values that do not belong to any particular coordinate space.
#[derive(Debug)]
pub enum Untagged {}

/// Type-level representation of a vector or matrix dimension.
///
/// Together with [`SupportedDim`], this restricts every constructor to the dimensions the kernel
/// is defined for (2, 3 and 4):
///
/// ```compile_fail
/// # use zaru_tensors::*;
/// let v = Vector::<f32, 5>::ZERO;
/// ```
pub struct Dim<const N: usize>;

/// Implemented for [`Dim<2>`], [`Dim<3>`] and [`Dim<4>`].
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait SupportedDim: private::Sealed {}

impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}
impl SupportedDim for Dim<4> {}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Dim<2> {}
    impl Sealed for super::Dim<3> {}
    impl Sealed for super::Dim<4> {}
}

//! Small fixed-size vector, matrix and rotation math for interactive 3D applications.
//!
//! The crate provides 2- to 4-dimensional [`Vector`]s, square [`Matrix`] types up to 4x4, and
//! two interchangeable rotation representations, the familiar [`Quat`]ernion and the
//! geometric-algebra [`Rotor`]. All types are generic over their element type and usable with
//! both floating-point and integer elements where that makes sense.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors,
//!   further simplifying their API.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types
//!   (eg. "big decimals").
//! - Make integer arithmetic overflow observable instead of undefined: the
//!   [`Integer`]-element operations report overflow alongside a wrapped result rather than
//!   aborting or silently truncating.
//! - Interoperate with the wider ecosystem behind Cargo features (`wide` for SIMD types,
//!   `mint` for interchange types, `fastrand` for random generation) without forcing those
//!   dependencies on every user.

pub mod approx;
mod matrix;
mod quat;
mod rotor;
mod traits;
mod vector;

#[cfg(feature = "mint")]
mod interop;
#[cfg(feature = "fastrand")]
mod random;
#[cfg(feature = "wide")]
mod simd;

pub use matrix::*;
pub use quat::*;
pub use rotor::*;
pub use traits::*;
pub use vector::*;

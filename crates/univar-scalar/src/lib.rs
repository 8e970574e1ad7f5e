//! # univar-scalar
//!
//! Coefficient abstraction for the univar polynomial library.
//!
//! This crate provides:
//! - The [`Scalar`] trait: the operations a coefficient type must support
//!   for polynomial arithmetic, differentiation, and rendering
//! - Implementations for the primitive numeric types `i64` and `f64`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod primitive;
pub mod traits;

pub use traits::Scalar;

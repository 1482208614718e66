//! Core geometry types for affinekit
//!
//! This crate provides the homogeneous-coordinate kernel used by the rest of
//! the pipeline: positions ([`Point`]), free displacements ([`Vector`]),
//! surface orientations ([`Normal`]), and the [`AffineTransform`] that moves
//! each of them by its own rule. All three entity kinds share one
//! 4-component single-precision representation with the homogeneous slot
//! pinned to 0; the transform's point rule re-injects translation
//! explicitly.

pub mod normal;
pub mod point;
pub mod traits;
pub mod transform;
pub mod vector;

pub use normal::*;
pub use point::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

//! Some shared linear algebra concepts

use crate::numeric::Float;
use nalgebra::{SMatrix, SVector};

// ### BASIC VECTOR TYPES ###

/// Number of spatial dimensions
pub const SPACE_DIM: usize = 3;

/// Number of space-time dimensions
pub const SPACETIME_DIM: usize = SPACE_DIM + 1;

/// 3-vectors of real numbers
pub type Vector3R = SVector<Float, SPACE_DIM>;

/// 4-vectors of real numbers, as used by special relativity
pub type Vector4R = SVector<Float, SPACETIME_DIM>;

/// Linear maps between 4-vectors (e.g. Lorentz boosts)
pub type Matrix4R = SMatrix<Float, SPACETIME_DIM, SPACETIME_DIM>;

// ### 4-VECTOR COORDINATES ###

/// Convenience const for accessing the temporal coordinate of a 4-vector
pub const T: usize = 0;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 1;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 2;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 3;

/// Extract the spatial part of a 4-vector
pub fn xyz(v: &Vector4R) -> Vector3R {
    v.fixed_rows::<SPACE_DIM>(X).into_owned()
}

/// Assemble a 4-vector from its temporal and spatial parts
pub fn txyz(t: Float, xyz: &Vector3R) -> Vector4R {
    Vector4R::new(t, xyz[0], xyz[1], xyz[2])
}

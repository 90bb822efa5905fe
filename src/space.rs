//! Ordinary 3-dimensional vectors (positions, forces...)

use crate::{
    linalg::Vector3R,
    numeric::Float,
    output::{write_column, SIG_DIGITS},
};
use num_traits::Zero;
use prefix_num_ops::real::*;

use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Neg, Sub},
};

/// Spatial 3-vector
///
/// The type is unit-agnostic: it stores whatever three numbers it is given,
/// and it is up to the user to keep these consistent.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceVector(Vector3R);
//
impl SpaceVector {
    /// Build a vector from its three cartesian components
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self(Vector3R::new(x, y, z))
    }

    /// Wrap an existing nalgebra 3-vector
    pub fn from_coordinates(coords: Vector3R) -> Self {
        Self(coords)
    }

    /// Access the underlying nalgebra vector
    pub fn coordinates(&self) -> &Vector3R {
        &self.0
    }

    /// Euclidean scalar product
    pub fn dot(&self, other: &Self) -> Float {
        self.0.dot(&other.0)
    }

    /// Euclidean norm
    pub fn norm(&self) -> Float {
        sqrt(self.dot(self))
    }

    /// Unit vector pointing in the same direction, if there is one
    pub fn direction(&self) -> Option<Self> {
        let norm = self.norm();
        (norm > 0. && norm.is_finite()).then(|| Self(self.0 / norm))
    }

    /// Non-oriented angle between the lines carrying two vectors, in [0, π/2]
    ///
    /// Returns NaN if either vector is zero, since no direction is defined.
    ///
    pub fn angle(&self, other: &Self) -> Float {
        let norms = self.norm() * other.norm();
        if norms == 0. {
            return Float::NAN;
        }
        let cos = self.dot(other).abs() / norms;
        // Rounding can push the cosine of nearly parallel vectors above 1
        cos.min(1.).acos()
    }
}

impl From<Vector3R> for SpaceVector {
    fn from(coords: Vector3R) -> Self {
        Self(coords)
    }
}

impl Add for SpaceVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for SpaceVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for SpaceVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Float> for SpaceVector {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<SpaceVector> for Float {
    type Output = SpaceVector;

    fn mul(self, rhs: SpaceVector) -> SpaceVector {
        rhs * self
    }
}

impl Zero for SpaceVector {
    fn zero() -> Self {
        Self(Vector3R::zeros())
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0.)
    }
}

impl Display for SpaceVector {
    /// Display as a 3x1 column
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sig_digits = fmt.precision().unwrap_or(SIG_DIGITS);
        write_column(fmt, self.0.iter().copied(), sig_digits)
    }
}

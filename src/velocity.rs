//! Velocity 3-vectors and the associated relativistic factors

use crate::{
    constants::LIGHT_VELOCITY,
    error::{BetaRequirement, Error, Result},
    linalg::Vector3R,
    numeric::{functions::is_subluminal, Float},
    space::SpaceVector,
};
use num_traits::Zero;
use prefix_num_ops::real::*;

use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Neg},
};

/// Velocity of a particle or reference frame (m/s)
///
/// Construction does not check that the velocity is physical: a norm above
/// `LIGHT_VELOCITY` is accepted and simply yields β > 1. It is up to the
/// consumers of the velocity (four-vector constructors, Lorentz boosts) to
/// reject it when it makes no sense for them.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityVector(SpaceVector);
//
impl VelocityVector {
    /// Build a velocity from its three cartesian components
    pub fn new(vx: Float, vy: Float, vz: Float) -> Self {
        Self(SpaceVector::new(vx, vy, vz))
    }

    /// Build a velocity from components expressed as fractions of light speed
    pub fn from_beta(bx: Float, by: Float, bz: Float) -> Self {
        LIGHT_VELOCITY * Self::new(bx, by, bz)
    }

    /// Access the velocity as a plain spatial vector
    pub fn as_space_vector(&self) -> &SpaceVector {
        &self.0
    }

    /// Access the underlying nalgebra vector
    pub fn coordinates(&self) -> &Vector3R {
        self.0.coordinates()
    }

    /// Speed, i.e. Euclidean norm of the velocity
    pub fn norm(&self) -> Float {
        self.0.norm()
    }

    /// Euclidean scalar product with another velocity
    pub fn dot(&self, other: &Self) -> Float {
        self.0.dot(&other.0)
    }

    /// Unit vector along the velocity, if the velocity is nonzero
    pub fn direction(&self) -> Option<SpaceVector> {
        self.0.direction()
    }

    /// Speed ratio β = |v| / c
    ///
    /// Superluminal velocities are not rejected here, they give β > 1.
    ///
    pub fn compute_beta(&self) -> Float {
        self.norm() / LIGHT_VELOCITY
    }

    /// Per-axis speed ratios β_i = v_i / c
    pub fn beta_vector(&self) -> Vector3R {
        self.coordinates() / LIGHT_VELOCITY
    }

    /// Lorentz factor γ = 1 / √(1 - β²)
    ///
    /// Only defined for velocities strictly below light speed.
    ///
    pub fn compute_gamma(&self) -> Result<Float> {
        let beta = self.compute_beta();
        if is_subluminal(beta) {
            Ok(1. / sqrt(1. - beta.powi(2)))
        } else {
            Err(Error::domain(beta, BetaRequirement::BelowLight))
        }
    }
}

impl From<SpaceVector> for VelocityVector {
    fn from(space: SpaceVector) -> Self {
        Self(space)
    }
}

impl Add for VelocityVector {
    type Output = Self;

    /// Galilean (component-wise) sum, not the relativistic velocity addition
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Neg for VelocityVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Float> for VelocityVector {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<VelocityVector> for Float {
    type Output = VelocityVector;

    fn mul(self, rhs: VelocityVector) -> VelocityVector {
        rhs * self
    }
}

impl Zero for VelocityVector {
    fn zero() -> Self {
        Self(SpaceVector::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Display for VelocityVector {
    /// Display as a 3x1 column
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, fmt)
    }
}

//! Lorentz boosts between inertial reference frames

use crate::{
    error::{BetaRequirement, Error, Result},
    linalg::{Matrix4R, Vector3R, Vector4R, SPACE_DIM, T, X},
    numeric::{functions::is_superluminal, Float},
    velocity::VelocityVector,
};
use log::trace;
use prefix_num_ops::real::*;

/// Boost matrix Λ mapping the components of a four-vector (temporal first)
/// from one inertial frame to another one, moving with respect to the first
/// at some relative velocity
///
/// For a relative speed ratio β (per-axis β_i) and Lorentz factor γ:
///
/// - Λ₀₀ = γ
/// - Λ₀ⱼ = Λⱼ₀ = -γ·β_j
/// - Λᵢⱼ = δᵢⱼ + (γ - 1)·β_i·β_j / β²
///
/// The matrix reduces to the identity for β = 0. Light speed is accepted as a
/// relative velocity, but γ is then infinite. The matrix mixes infinite and
/// zero entries, so every boosted component comes out NaN (not ±inf) and the
/// result has `Causality::Undefined`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct LorentzBoost {
    /// Velocity of the target frame relative to the source one
    relative_velocity: VelocityVector,

    /// Lorentz factor of the relative velocity
    gamma: Float,

    /// Boost matrix
    matrix: Matrix4R,
}
//
impl LorentzBoost {
    /// Prepare the boost towards a frame moving at `relative_velocity`
    ///
    /// Fails if the relative velocity exceeds light speed.
    ///
    pub fn new(relative_velocity: VelocityVector) -> Result<Self> {
        let beta = relative_velocity.compute_beta();
        if is_superluminal(beta) {
            return Err(Error::domain(beta, BetaRequirement::AtMostLight));
        }
        Ok(Self::new_unchecked(relative_velocity))
    }

    /// Build the boost matrix, assuming that the velocity is at most luminal
    fn new_unchecked(relative_velocity: VelocityVector) -> Self {
        let beta_vec: Vector3R = relative_velocity.beta_vector();
        let beta2 = beta_vec.norm_squared();

        // Null boost is special, both because it allows exact results and
        // because the spatial block formula divides by β²
        let mut matrix = Matrix4R::identity();
        if beta2 == 0. {
            return Self {
                relative_velocity,
                gamma: 1.,
                matrix,
            };
        }

        // Rounding may bring a light-speed β² slightly above 1
        let gamma = 1. / sqrt((1. - beta2).max(0.));
        matrix[(T, T)] = gamma;
        for i in 0..SPACE_DIM {
            matrix[(T, X + i)] = -gamma * beta_vec[i];
            matrix[(X + i, T)] = -gamma * beta_vec[i];
            for j in 0..SPACE_DIM {
                matrix[(X + i, X + j)] += (gamma - 1.) * beta_vec[i] * beta_vec[j] / beta2;
            }
        }
        trace!("Lorentz boost for β = {:?}: {}", beta_vec, matrix);

        Self {
            relative_velocity,
            gamma,
            matrix,
        }
    }

    /// Boost back to the source frame
    pub fn inverse(&self) -> Self {
        Self::new_unchecked(-self.relative_velocity)
    }

    /// Velocity of the target frame relative to the source one
    pub fn relative_velocity(&self) -> &VelocityVector {
        &self.relative_velocity
    }

    /// Lorentz factor of the boost
    pub fn gamma(&self) -> Float {
        self.gamma
    }

    /// Access the boost matrix
    pub fn matrix(&self) -> &Matrix4R {
        &self.matrix
    }

    /// Express four-vector components in the target frame
    pub fn apply(&self, components: &Vector4R) -> Vector4R {
        self.matrix * components
    }
}

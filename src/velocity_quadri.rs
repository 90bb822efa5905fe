//! Four-velocities

use crate::{
    constants::LIGHT_VELOCITY,
    error::Result,
    quadri::{QuadriVector, Velocity},
    velocity::VelocityVector,
};
use log::debug;

/// Four-velocity (γc, γv)
pub type VelocityQuadriVector = QuadriVector<Velocity>;
//
impl QuadriVector<Velocity> {
    /// Four-velocity of a particle moving at `velocity_vector`
    ///
    /// Fails with a domain error for velocities at or above light speed,
    /// where the four-velocity is not defined.
    ///
    pub fn from_space_vector(velocity_vector: VelocityVector) -> Result<Self> {
        let gamma = velocity_vector.compute_gamma()?;
        let result = Self::from_parts(
            gamma * LIGHT_VELOCITY,
            &(gamma * *velocity_vector.as_space_vector()),
        );
        debug!("Built four-velocity with γ = {}", gamma);
        Ok(result)
    }

    /// Ordinary velocity of the particle in the current frame, v = c·u / u⁰
    pub fn to_velocity_vector(&self) -> VelocityVector {
        (LIGHT_VELOCITY / self.temporal() * self.to_space_vector()).into()
    }
}

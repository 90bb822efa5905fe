//! Four-forces

use crate::{
    constants::LIGHT_VELOCITY,
    error::Result,
    quadri::{Force, QuadriVector},
    space::SpaceVector,
    velocity::VelocityVector,
};

/// Four-force (γF·v/c, γF)
pub type ForceQuadriVector = QuadriVector<Force>;
//
impl QuadriVector<Force> {
    /// Four-force felt by a particle moving at `velocity_vector` under an
    /// ordinary 3-force `force` (N)
    ///
    /// Like the four-velocity, this is undefined at or above light speed.
    ///
    pub fn from_space_vector(velocity_vector: VelocityVector, force: SpaceVector) -> Result<Self> {
        let gamma = velocity_vector.compute_gamma()?;
        let power = force.dot(velocity_vector.as_space_vector());
        Ok(Self::from_parts(
            gamma * power / LIGHT_VELOCITY,
            &(gamma * force),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::velocity_quadri::VelocityQuadriVector;
    use approx::assert_abs_diff_eq;
    use num_traits::Zero;

    #[test]
    fn orthogonal_to_four_velocity() {
        let v = VelocityVector::from_beta(0.2, -0.6, 0.3);
        let force = SpaceVector::new(1e3, 2.5e2, -4e2);
        let k = ForceQuadriVector::from_space_vector(v, force).unwrap();
        let u = VelocityQuadriVector::from_space_vector(v).unwrap();
        let scale = k.temporal().abs() * u.temporal();
        assert_abs_diff_eq!(k.minkowski_dot(&u) / scale, 0., epsilon = 1e-12);
    }

    #[test]
    fn at_rest() {
        let force = SpaceVector::new(0., 0., -9.81);
        let k = ForceQuadriVector::from_space_vector(VelocityVector::zero(), force).unwrap();
        assert_eq!(k.temporal(), 0.);
        assert_eq!(k.to_space_vector(), force);
    }

    #[test]
    fn light_speed_is_rejected() {
        let v = VelocityVector::from_beta(0., 0., 1.);
        assert!(ForceQuadriVector::from_space_vector(v, SpaceVector::new(1., 0., 0.)).is_err());
    }
}

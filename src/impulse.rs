//! Four-momenta (energy-impulse four-vectors)

use crate::{
    constants::{LIGHT_VELOCITY, PLANCK_CONSTANT},
    error::{BetaRequirement, Error, Result},
    numeric::{functions::is_luminal, Float},
    quadri::{Impulse, QuadriVector},
    space::SpaceVector,
    velocity::VelocityVector,
};
use log::debug;
use prefix_num_ops::real::*;

/// What we know about a particle besides its velocity
///
/// Massive particles are described by their rest mass, from which energy is
/// deduced. Light-speed particles have no rest mass, so their energy must be
/// given directly.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MassSpec {
    /// Rest mass (kg) of a massive particle
    Mass(Float),

    /// Total energy (J) of a massless particle
    Energy(Float),
}
//
impl MassSpec {
    /// Build from a pair of optional parameters, exactly one of which must
    /// be specified
    pub fn from_options(mass: Option<Float>, energy: Option<Float>) -> Result<Self> {
        match (mass, energy) {
            (Some(mass), None) => Ok(MassSpec::Mass(mass)),
            (None, Some(energy)) => Ok(MassSpec::Energy(energy)),
            (Some(_), Some(_)) => Err(Error::invalid(
                "a mass and an energy were both given, only one of them is allowed",
            )),
            (None, None) => Err(Error::invalid("either a mass or an energy must be given")),
        }
    }
}

/// Four-momentum (E/c, p)
pub type ImpulseQuadriVector = QuadriVector<Impulse>;
//
impl QuadriVector<Impulse> {
    // ### CONSTRUCTION ###

    /// Four-momentum of a particle moving at `velocity_vector`, given either
    /// its rest mass or (for massless particles) its energy
    ///
    /// Giving both or none of them is an error.
    ///
    pub fn from_space_vector(
        velocity_vector: VelocityVector,
        mass: Option<Float>,
        energy: Option<Float>,
    ) -> Result<Self> {
        Self::from_mass_spec(velocity_vector, MassSpec::from_options(mass, energy)?)
    }

    /// Four-momentum of a particle moving at `velocity_vector`
    pub fn from_mass_spec(velocity_vector: VelocityVector, spec: MassSpec) -> Result<Self> {
        match spec {
            MassSpec::Mass(mass) => Self::massive(velocity_vector, mass),
            MassSpec::Energy(energy) => Self::massless(velocity_vector, energy),
        }
    }

    /// Four-momentum (γmc, γmv) of a massive particle
    ///
    /// The mass must be positive and the velocity must be below light speed.
    ///
    pub fn massive(velocity_vector: VelocityVector, mass: Float) -> Result<Self> {
        if !(mass > 0. && mass.is_finite()) {
            return Err(Error::invalid(format!(
                "rest mass must be positive and finite, got {}",
                mass
            )));
        }
        let gamma = velocity_vector.compute_gamma()?;
        let result = Self::from_parts(
            gamma * mass * LIGHT_VELOCITY,
            &(gamma * mass * *velocity_vector.as_space_vector()),
        );
        debug!("Built four-momentum of mass {} kg with γ = {}", mass, gamma);
        Ok(result)
    }

    /// Four-momentum (E/c, E/c·n) of a massless particle of energy E moving
    /// along the unit direction n of `velocity_vector`
    ///
    /// The velocity must be exactly light speed, up to rounding.
    ///
    pub fn massless(velocity_vector: VelocityVector, energy: Float) -> Result<Self> {
        if !(energy >= 0. && energy.is_finite()) {
            return Err(Error::invalid(format!(
                "energy must be nonnegative and finite, got {}",
                energy
            )));
        }
        let beta = velocity_vector.compute_beta();
        let direction = velocity_vector
            .direction()
            .filter(|_| is_luminal(beta))
            .ok_or_else(|| Error::domain(beta, BetaRequirement::EqualToLight))?;
        let temporal = energy / LIGHT_VELOCITY;
        debug!("Built massless four-momentum of energy {} J", energy);
        Ok(Self::from_parts(temporal, &(temporal * direction)))
    }

    /// Four-momentum of a photon of a given wavelength (m), E = hc/λ
    pub fn photon(direction: SpaceVector, wavelength: Float) -> Result<Self> {
        if !(wavelength > 0. && wavelength.is_finite()) {
            return Err(Error::invalid(format!(
                "wavelength must be positive and finite, got {}",
                wavelength
            )));
        }
        let direction = direction
            .direction()
            .ok_or_else(|| Error::invalid("photon direction must be a nonzero vector"))?;
        let energy = LIGHT_VELOCITY * PLANCK_CONSTANT / wavelength;
        Self::massless(VelocityVector::from(LIGHT_VELOCITY * direction), energy)
    }

    // ### DERIVED QUANTITIES ###

    /// Total energy E (J) in the current frame
    pub fn compute_energy(&self) -> Float {
        self.temporal() * LIGHT_VELOCITY
    }

    /// Invariant (rest) mass (kg), zero for massless particles
    pub fn compute_mass(&self) -> Float {
        sqrt(self.minkowski_norm_sqr().max(0.)) / LIGHT_VELOCITY
    }
}

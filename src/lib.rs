//! quadrivectors: special relativity kinematics
//!
//!
//! # Introduction (for the physicist)
//!
//! This small library lets one describe the motion of a particle with an
//! ordinary velocity 3-vector, derive the associated four-velocity and
//! four-momentum (for massive particles given their rest mass, or for
//! massless ones given their energy), and express any of these four-vectors
//! in another inertial reference frame through a Lorentz boost.
//!
//! Space-time is flat (Minkowski) and 3+1 dimensional. The metric signature
//! is (+, -, -, -), and four-vector components are stored temporal first.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Everything here is a small immutable value: operations never mutate their
//! inputs, they build new vectors. Fallible constructors return a `Result`
//! whose error distinguishes inconsistent arguments from physically
//! impossible requests (e.g. a massive particle at light speed).
//!
//! All four-vectors share the `QuadriVector` type and its Lorentz transform.
//! What they represent is tracked at the type level by a zero-sized `Kind`
//! marker, so that e.g. energy can only be asked from a four-momentum.
//!
//!
//! # Example
//!
//! ```
//! use quadrivectors::{Constants, ImpulseQuadriVector, VelocityQuadriVector, VelocityVector};
//!
//! let velocity = Constants::LIGHT_VELOCITY * VelocityVector::new(1. / 9., 1. / 2., 1. / 4.);
//! let four_velocity = VelocityQuadriVector::from_space_vector(velocity)?;
//! let proper = four_velocity.lorentz_transform(velocity)?;
//! assert!((proper.temporal() / Constants::LIGHT_VELOCITY - 1.).abs() < 1e-12);
//!
//! let impulse = ImpulseQuadriVector::from_space_vector(velocity, Some(2.), None)?;
//! assert!(impulse.compute_energy() > 2. * Constants::LIGHT_VELOCITY.powi(2));
//! # Ok::<(), quadrivectors::Error>(())
//! ```

#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod force;
pub mod impulse;
pub mod linalg;
pub mod lorentz;
pub mod numeric;
pub mod output;
pub mod quadri;
pub mod space;
pub mod velocity;
pub mod velocity_quadri;

pub use crate::{
    constants::{Constants, LIGHT_VELOCITY, PLANCK_CONSTANT},
    error::{BetaRequirement, Error, Result},
    force::ForceQuadriVector,
    impulse::{ImpulseQuadriVector, MassSpec},
    lorentz::LorentzBoost,
    numeric::Float,
    quadri::{Causality, Kind, QuadriVector},
    space::SpaceVector,
    velocity::VelocityVector,
    velocity_quadri::VelocityQuadriVector,
};

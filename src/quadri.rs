//! Four-vectors (quadri-vectors) of special relativity
//!
//! All four-vectors share the same storage and the same Lorentz transform
//! logic, but it is useful to keep track of what they represent, so that
//! e.g. energy can only be queried from a four-momentum, and a boosted
//! four-velocity remains a four-velocity. This is done by tagging the common
//! `QuadriVector` type with a zero-sized `Kind` marker.

use crate::{
    error::Result,
    linalg::{txyz, xyz, Vector4R, T},
    lorentz::LorentzBoost,
    numeric::{Float, BETA_TOLERANCE},
    output::{write_column, SIG_DIGITS},
    space::SpaceVector,
    velocity::VelocityVector,
};
use log::debug;

use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};

/// Physical quantity represented by a four-vector
pub trait Kind: Clone + Copy + Debug + PartialEq + 'static {
    /// Human-readable name, used in diagnostics
    const NAME: &'static str;
}

/// Four-vector with no specific physical meaning (e.g. a space-time event)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generic;
//
impl Kind for Generic {
    const NAME: &'static str = "generic";
}

/// Four-velocity (γc, γv)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity;
//
impl Kind for Velocity {
    const NAME: &'static str = "velocity";
}

/// Four-momentum (E/c, p)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Impulse;
//
impl Kind for Impulse {
    const NAME: &'static str = "impulse";
}

/// Four-force (γF·v/c, γF)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Force;
//
impl Kind for Force {
    const NAME: &'static str = "force";
}

/// Causal character of a four-vector, as given by its Minkowski norm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Causality {
    /// Positive squared norm: massive particles, subluminal motion
    Timelike,

    /// Zero squared norm (up to rounding): light-speed motion
    Null,

    /// Negative squared norm: not the four-vector of a physical particle
    Spacelike,

    /// Some component is not finite, e.g. after a boost to light speed
    Undefined,
}

/// Four-vector, stored as a column of components with the temporal one first
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadriVector<K: Kind> {
    components: Vector4R,
    kind: PhantomData<K>,
}
//
impl<K: Kind> QuadriVector<K> {
    // ### CONSTRUCTION ###

    /// Wrap raw components, temporal first
    pub(crate) fn from_vector(components: Vector4R) -> Self {
        Self {
            components,
            kind: PhantomData,
        }
    }

    /// Assemble a four-vector from its temporal and spatial parts
    pub(crate) fn from_parts(temporal: Float, spatial: &SpaceVector) -> Self {
        Self::from_vector(txyz(temporal, spatial.coordinates()))
    }

    /// Forget about the physical meaning of this four-vector
    pub fn into_generic(self) -> QuadriVector<Generic> {
        QuadriVector::from_vector(self.components)
    }

    // ### COMPONENT ACCESS ###

    /// Access the full component column
    pub fn components(&self) -> &Vector4R {
        &self.components
    }

    /// Temporal component (ct-like: γc, E/c...)
    pub fn temporal(&self) -> Float {
        self.components[T]
    }

    /// Spatial components, as a 3-vector
    pub fn to_space_vector(&self) -> SpaceVector {
        xyz(&self.components).into()
    }

    // ### LORENTZ TRANSFORM ###

    /// Express this four-vector in the frame moving at `relative_velocity`
    /// with respect to the current one
    ///
    /// Fails if the relative velocity exceeds light speed.
    ///
    pub fn lorentz_transform(&self, relative_velocity: VelocityVector) -> Result<Self> {
        let boost = LorentzBoost::new(relative_velocity)?;
        Ok(self.boost(&boost))
    }

    /// Apply a precomputed Lorentz boost
    pub fn boost(&self, boost: &LorentzBoost) -> Self {
        let result = Self::from_vector(boost.apply(&self.components));
        debug!(
            "Boosted {} four-vector {:?} by γ = {} into {:?}",
            K::NAME,
            self.components.as_slice(),
            boost.gamma(),
            result.components.as_slice()
        );
        result
    }

    // ### MINKOWSKI GEOMETRY ###

    /// Minkowski scalar product, with signature (+, -, -, -)
    pub fn minkowski_dot<K2: Kind>(&self, other: &QuadriVector<K2>) -> Float {
        self.temporal() * other.temporal() - self.to_space_vector().dot(&other.to_space_vector())
    }

    /// Minkowski squared norm, temporal² - |spatial|²
    ///
    /// This is invariant under Lorentz transforms.
    ///
    pub fn minkowski_norm_sqr(&self) -> Float {
        self.minkowski_dot(self)
    }

    /// Classify this four-vector according to its Minkowski squared norm
    ///
    /// Physical four-velocities and four-momenta are timelike or null.
    /// Four-vectors with infinite or NaN components are `Undefined`.
    ///
    pub fn causality(&self) -> Causality {
        let norm_sqr = self.minkowski_norm_sqr();
        if !norm_sqr.is_finite() || self.components.iter().any(|x| !x.is_finite()) {
            return Causality::Undefined;
        }
        let scale = self.temporal().powi(2) + self.to_space_vector().dot(&self.to_space_vector());
        if norm_sqr.abs() <= BETA_TOLERANCE * scale {
            Causality::Null
        } else if norm_sqr > 0. {
            Causality::Timelike
        } else {
            Causality::Spacelike
        }
    }
}

impl QuadriVector<Generic> {
    /// Build a four-vector from its temporal component (e.g. ct) and its
    /// spatial components
    pub fn from_components(temporal: Float, spatial: SpaceVector) -> Self {
        Self::from_parts(temporal, &spatial)
    }

    /// Build a four-vector from its four components, temporal first
    pub fn new(t: Float, x: Float, y: Float, z: Float) -> Self {
        Self::from_vector(Vector4R::new(t, x, y, z))
    }
}

impl<K: Kind> Add for QuadriVector<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.components + rhs.components)
    }
}

impl<K: Kind> Sub for QuadriVector<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vector(self.components - rhs.components)
    }
}

impl<K: Kind> Neg for QuadriVector<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vector(-self.components)
    }
}

impl<K: Kind> Mul<Float> for QuadriVector<K> {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self::from_vector(self.components * rhs)
    }
}

impl<K: Kind> Mul<QuadriVector<K>> for Float {
    type Output = QuadriVector<K>;

    fn mul(self, rhs: QuadriVector<K>) -> QuadriVector<K> {
        rhs * self
    }
}

impl<K: Kind> Display for QuadriVector<K> {
    /// Display as a 4x1 column
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sig_digits = fmt.precision().unwrap_or(SIG_DIGITS);
        write_column(fmt, self.components.iter().copied(), sig_digits)
    }
}

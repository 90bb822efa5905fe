//! Physical constants consumed by the kinematics
//!
//! Values follow the 2019 redefinition of the SI base units, where both of
//! them are exact by definition.

use crate::numeric::Float;

/// Speed of light in vacuum (m/s)
pub const LIGHT_VELOCITY: Float = 299_792_458.;

/// Planck constant (J·s)
pub const PLANCK_CONSTANT: Float = 6.626_070_15e-34;

/// Namespace carrying the constants as associated items, so that they can be
/// spelled `Constants::LIGHT_VELOCITY` at the call site
pub struct Constants;
//
impl Constants {
    /// Speed of light in vacuum (m/s)
    pub const LIGHT_VELOCITY: Float = LIGHT_VELOCITY;

    /// Planck constant (J·s)
    pub const PLANCK_CONSTANT: Float = PLANCK_CONSTANT;
}

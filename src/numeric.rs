//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
pub type Float = f64;
pub use std::f64 as floats;

/// Absolute tolerance used when comparing a speed ratio to the light barrier
///
/// A vector built as `LIGHT_VELOCITY * (0.6, 0.8, 0.)` does not have a norm of
/// exactly `LIGHT_VELOCITY` once rounded, so comparisons against β = 1 must
/// leave some slack. This is a few thousand ulps around 1, far below any
/// speed ratio that a massive particle could meaningfully be given.
///
pub const BETA_TOLERANCE: Float = 1e-12;

/// Mathematical functions
pub mod functions {
    use super::{Float, BETA_TOLERANCE};

    /// Truth that a speed ratio is strictly below light speed
    pub fn is_subluminal(beta: Float) -> bool {
        beta < 1. - BETA_TOLERANCE
    }

    /// Truth that a speed ratio is light speed, up to rounding
    pub fn is_luminal(beta: Float) -> bool {
        (beta - 1.).abs() <= BETA_TOLERANCE
    }

    /// Truth that a speed ratio exceeds light speed beyond rounding
    pub fn is_superluminal(beta: Float) -> bool {
        beta > 1. + BETA_TOLERANCE
    }
}

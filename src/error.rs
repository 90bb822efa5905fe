//! Failure modes of the kinematic constructors and transforms

use crate::numeric::Float;
use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Physical precondition that a speed ratio failed to satisfy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetaRequirement {
    /// Massive particles and four-velocities need β < 1
    BelowLight,

    /// Energy-only (massless) construction needs β = 1
    EqualToLight,

    /// Reference frames cannot move faster than light, so β ≤ 1
    AtMostLight,
}

impl std::fmt::Display for BetaRequirement {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BetaRequirement::BelowLight => write!(fmt, "β < 1"),
            BetaRequirement::EqualToLight => write!(fmt, "β = 1"),
            BetaRequirement::AtMostLight => write!(fmt, "β ≤ 1"),
        }
    }
}

/// Errors raised by the kinematics library
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A constructor received an inconsistent set of parameters
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A physical precondition on the speed ratio was violated
    #[error("speed ratio β = {beta} is out of domain (expected {requirement})")]
    Domain {
        /// Offending speed ratio
        beta: Float,

        /// What the speed ratio should have been
        requirement: BetaRequirement,
    },
}
//
impl Error {
    /// Shorthand for building an InvalidArguments error
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArguments(message.into())
    }

    /// Shorthand for building a domain error
    pub(crate) fn domain(beta: Float, requirement: BetaRequirement) -> Self {
        Error::Domain { beta, requirement }
    }
}

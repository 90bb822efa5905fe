//! Demonstration of the quadrivectors library
//!
//! This replays a simple scenario, whose parameters are read from a
//! configuration file (`valeurs` by default, or the file named by the
//! `QUADRIVECTORS_CONFIG` environment variable):
//!
//! * build the velocity of a massive particle, and its four-velocity
//! * move to the particle's proper frame, where the four-velocity reduces to
//!   (c, 0, 0, 0)
//! * build the particle's four-momentum, and check that its energy reduces to
//!   the rest energy mc² in the proper frame
//! * build the four-momentum of a photon of known wavelength, and look at it
//!   from the massive particle's proper frame (relativistic Doppler effect).
//!
//! Set `RUST_LOG=debug` to follow the computation.

#![warn(missing_docs)]

mod config;

use crate::config::Configuration;

use eyre::WrapErr;
use log::info;
use quadrivectors::{
    output::Engineering, ImpulseQuadriVector, MassSpec, SpaceVector, VelocityQuadriVector,
    LIGHT_VELOCITY,
};

use std::env;

/// We'll use eyre's type-erased result type throughout the application
type Result<T> = eyre::Result<T>;

/// Configuration file used when none is specified
const DEFAULT_CONFIG: &str = "valeurs";

/// Environment variable which can be used to pick another configuration file
const CONFIG_VAR: &str = "QUADRIVECTORS_CONFIG";

/// This will act as our main function, with suitable error handling
fn main() -> Result<()> {
    // ### INITIALIZATION ###

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::var(CONFIG_VAR).unwrap_or_else(|_| DEFAULT_CONFIG.to_owned());
    let cfg = Configuration::load(&config_path)
        .wrap_err_with(|| format!("Failed to load the configuration from {}", config_path))?;
    info!("Loaded configuration from {}", config_path);

    // ### MASSIVE PARTICLE ###

    let velocity = cfg.velocity();
    println!("Velocity (m/s):\n{}", velocity);
    println!("β = {:.9}", Engineering(velocity.compute_beta()));

    let four_velocity = VelocityQuadriVector::from_space_vector(velocity)
        .wrap_err("Failed to compute the four-velocity")?;
    println!("Four-velocity:\n{}", four_velocity);

    let proper_four_velocity = four_velocity
        .lorentz_transform(velocity)
        .wrap_err("Failed to boost the four-velocity to the proper frame")?;
    println!("Four-velocity in the proper frame:\n{:.9}", proper_four_velocity);

    let impulse = ImpulseQuadriVector::from_mass_spec(velocity, MassSpec::Mass(cfg.mass))
        .wrap_err("Failed to compute the four-momentum")?;
    println!("Four-momentum:\n{}", impulse);
    println!("Energy (J): {:.9}", Engineering(impulse.compute_energy()));

    let proper_impulse = impulse
        .lorentz_transform(velocity)
        .wrap_err("Failed to boost the four-momentum to the proper frame")?;
    println!("Four-momentum in the proper frame:\n{:.9}", proper_impulse);
    println!(
        "Energy (J): {:.9} (mc² = {:.9})",
        Engineering(proper_impulse.compute_energy()),
        Engineering(cfg.mass * LIGHT_VELOCITY.powi(2))
    );

    // ### PHOTON ###

    let photon = ImpulseQuadriVector::photon(SpaceVector::new(1., 0., 0.), cfg.wavelength)
        .wrap_err("Failed to compute the photon's four-momentum")?;
    println!("Photon four-momentum:\n{}", photon);
    println!("Photon energy (J): {:.9}", Engineering(photon.compute_energy()));

    let seen_photon = photon
        .lorentz_transform(velocity)
        .wrap_err("Failed to boost the photon's four-momentum")?;
    println!("Photon four-momentum in the particle's frame:\n{}", seen_photon);
    println!(
        "Photon energy in the particle's frame (J): {:.9}",
        Engineering(seen_photon.compute_energy())
    );

    // ...and we're done
    Ok(())
}

//! End-to-end checks of the relativistic kinematics

use approx::assert_relative_eq;
use num_traits::Zero;
use quadrivectors::{
    BetaRequirement, Causality, Constants, Error, Float, ImpulseQuadriVector, LorentzBoost,
    MassSpec, SpaceVector, VelocityQuadriVector, VelocityVector,
};

const C: Float = Constants::LIGHT_VELOCITY;

/// A spread of subluminal velocities, as fractions of light speed
const BETAS: [[Float; 3]; 7] = [
    [1. / 9., 1. / 2., 1. / 4.],
    [0.5, 0., 0.],
    [0., -0.9, 0.],
    [0.3, 0.3, 0.3],
    [-0.7, 0.1, -0.6],
    [1e-6, -2e-6, 3e-6],
    [0.99, 0.01, 0.],
];

fn velocities() -> impl Iterator<Item = VelocityVector> {
    BETAS
        .iter()
        .map(|&[bx, by, bz]| C * VelocityVector::new(bx, by, bz))
}

/// Check that a spatial part vanishes, relative to some natural scale
fn assert_vanishes(spatial: SpaceVector, scale: Float) {
    for &x in spatial.coordinates().iter() {
        assert!(
            x.abs() <= 1e-12 * scale,
            "spatial component {} does not vanish at scale {}",
            x,
            scale
        );
    }
}

#[test]
fn canonical_scenario() {
    let velocity = C * VelocityVector::new(1. / 9., 1. / 2., 1. / 4.);
    assert_relative_eq!(velocity.compute_beta(), 0.5699523480189775, max_relative = 1e-14);

    let four_velocity = VelocityQuadriVector::from_space_vector(velocity).unwrap();
    let spatial = four_velocity.to_space_vector();
    assert_relative_eq!(four_velocity.temporal(), 3.64854055e8, max_relative = 1e-8);
    assert_relative_eq!(spatial.coordinates()[0], 4.05393394e7, max_relative = 1e-8);
    assert_relative_eq!(spatial.coordinates()[1], 1.82427027e8, max_relative = 1e-8);
    assert_relative_eq!(spatial.coordinates()[2], 9.12135137e7, max_relative = 1e-8);
}

#[test]
fn four_velocity_in_proper_frame() {
    for v in velocities() {
        let u = VelocityQuadriVector::from_space_vector(v).unwrap();
        let proper = u.lorentz_transform(v).unwrap();
        assert_relative_eq!(proper.temporal(), C, max_relative = 1e-12);
        assert_vanishes(proper.to_space_vector(), u.temporal());
    }
}

#[test]
fn four_momentum_in_proper_frame() {
    let mass = 2.;
    for v in velocities() {
        let p = ImpulseQuadriVector::from_space_vector(v, Some(mass), None).unwrap();
        let proper = p.lorentz_transform(v).unwrap();
        assert_vanishes(proper.to_space_vector(), p.temporal());
        assert_relative_eq!(proper.compute_energy(), mass * C * C, max_relative = 1e-12);
    }
}

#[test]
fn rest_energy_is_minimal() {
    let v = C * VelocityVector::new(0.2, -0.4, 0.1);
    let p = ImpulseQuadriVector::from_mass_spec(v, MassSpec::Mass(1.5)).unwrap();
    let rest_energy = p.lorentz_transform(v).unwrap().compute_energy();
    assert!(rest_energy <= p.compute_energy());
    for frame in velocities() {
        let energy = p.lorentz_transform(frame).unwrap().compute_energy();
        assert!(
            rest_energy <= energy * (1. + 1e-12),
            "energy {} in frame {:?} is below rest energy {}",
            energy,
            frame,
            rest_energy
        );
    }
}

#[test]
fn null_boost_is_exact() {
    let u = VelocityQuadriVector::from_space_vector(C * VelocityVector::new(0.1, 0.2, 0.3)).unwrap();
    assert_eq!(u.lorentz_transform(VelocityVector::zero()).unwrap(), u);
    let p = ImpulseQuadriVector::from_space_vector(C * VelocityVector::new(0.1, 0.2, 0.3), Some(4.), None)
        .unwrap();
    assert_eq!(p.lorentz_transform(VelocityVector::zero()).unwrap(), p);
}

#[test]
fn boost_round_trip() {
    let p = ImpulseQuadriVector::massive(C * VelocityVector::new(-0.3, 0.5, 0.2), 1e-27).unwrap();
    for v in velocities() {
        let boost = LorentzBoost::new(v).unwrap();
        let back = p.boost(&boost).boost(&boost.inverse());
        assert_relative_eq!(*back.components(), *p.components(), max_relative = 1e-9);
        let back = p.lorentz_transform(v).unwrap().lorentz_transform(-v).unwrap();
        assert_relative_eq!(*back.components(), *p.components(), max_relative = 1e-9);
    }
}

#[test]
fn massless_particle() {
    let wavelength = 800e-9;
    let energy = C * Constants::PLANCK_CONSTANT / wavelength;
    let velocity = VelocityVector::new(C, 0., 0.);
    let photon = ImpulseQuadriVector::from_space_vector(velocity, None, Some(energy)).unwrap();
    let spatial = photon.to_space_vector();
    assert_relative_eq!(photon.temporal(), 8.28258755e-28, max_relative = 1e-7);
    assert_relative_eq!(spatial.coordinates()[0], 8.28258755e-28, max_relative = 1e-7);
    assert_eq!(spatial.coordinates()[1], 0.);
    assert_eq!(spatial.coordinates()[2], 0.);
    assert_relative_eq!(spatial.norm(), photon.temporal(), max_relative = 1e-15);
    assert_relative_eq!(photon.compute_energy(), energy, max_relative = 1e-15);
    assert_eq!(
        photon,
        ImpulseQuadriVector::photon(SpaceVector::new(1., 0., 0.), wavelength).unwrap()
    );
}

#[test]
fn photon_stays_null_under_boosts() {
    let photon = ImpulseQuadriVector::photon(SpaceVector::new(1., 1., 0.), 500e-9).unwrap();
    for v in velocities() {
        let boosted = photon.lorentz_transform(v).unwrap();
        assert_eq!(boosted.causality(), Causality::Null);
        assert!(boosted.compute_energy() > 0.);
    }

    // Receding from the photon source redshifts it, chasing it blueshifts it
    let away = photon.lorentz_transform(C * VelocityVector::new(0.5, 0.5, 0.)).unwrap();
    let towards = photon.lorentz_transform(C * VelocityVector::new(-0.5, -0.5, 0.)).unwrap();
    assert!(away.compute_energy() < photon.compute_energy());
    assert!(towards.compute_energy() > photon.compute_energy());
}

#[test]
fn error_scenarios() {
    let v = C * VelocityVector::new(1. / 9., 1. / 2., 1. / 4.);
    assert!(matches!(
        ImpulseQuadriVector::from_space_vector(v, Some(2.), Some(1.)),
        Err(Error::InvalidArguments(_))
    ));
    assert!(matches!(
        ImpulseQuadriVector::from_space_vector(v, None, None),
        Err(Error::InvalidArguments(_))
    ));

    let light = C * VelocityVector::new(0., 0., 1.);
    assert!(matches!(
        ImpulseQuadriVector::from_space_vector(light, Some(2.), None),
        Err(Error::Domain {
            requirement: BetaRequirement::BelowLight,
            ..
        })
    ));
    assert!(matches!(
        VelocityQuadriVector::from_space_vector(light),
        Err(Error::Domain {
            requirement: BetaRequirement::BelowLight,
            ..
        })
    ));
    assert!(matches!(
        ImpulseQuadriVector::from_space_vector(v, None, Some(1.)),
        Err(Error::Domain {
            requirement: BetaRequirement::EqualToLight,
            ..
        })
    ));
}

#[test]
fn light_speed_within_rounding_is_accepted() {
    // |(0.6, 0.8, 0)| is not exactly 1 in floating-point arithmetic
    let light = C * VelocityVector::new(0.6, 0.8, 0.);
    let p = ImpulseQuadriVector::from_space_vector(light, None, Some(1e-19)).unwrap();
    assert_eq!(p.causality(), Causality::Null);
    assert!(LorentzBoost::new(light).is_ok());
}

#[test]
fn photon_boosted_to_light_speed_is_undefined() {
    let photon = ImpulseQuadriVector::photon(SpaceVector::new(1., 0., 0.), 800e-9).unwrap();
    let boosted = photon.lorentz_transform(VelocityVector::new(0., C, 0.)).unwrap();
    assert!(boosted.components().iter().all(|x| x.is_nan()));
    assert_eq!(boosted.causality(), Causality::Undefined);
}

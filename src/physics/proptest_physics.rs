//! Property-based tests for the physics core using proptest.
//!
//! These tests verify physical invariants across a wide range of masses,
//! separations and step sizes.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::{Simulation, pairwise_force};
use crate::test_utils::{assertions, fixtures};
use crate::types::G;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The force on A from B has the same magnitude as the force on B from A.
    #[test]
    fn prop_newtons_third_law(
        mass_a in 1e10f64..1e30,
        mass_b in 1e10f64..1e30,
        x in -1e12f64..1e12,
        y in -1e12f64..1e12,
    ) {
        prop_assume!(x.abs() + y.abs() > 1.0);
        let a = fixtures::body_at("A", mass_a, DVec2::ZERO);
        let b = fixtures::body_at("B", mass_b, DVec2::new(x, y));

        let on_a = pairwise_force(&a, &b, G);
        let on_b = pairwise_force(&b, &a, G);

        let tolerance = 1e-12 * on_a.length().max(on_b.length());
        prop_assert!((on_a.length() - on_b.length()).abs() <= tolerance);
        prop_assert!((on_a + on_b).length() <= 2.0 * tolerance);
        // Attraction: the force on A points toward B.
        prop_assert!(on_a.dot(DVec2::new(x, y)) > 0.0);
    }

    /// Total momentum of an isolated two-body system does not change.
    #[test]
    fn prop_two_body_momentum_conserved(
        mass_a in 1e20f64..1e28,
        mass_b in 1e20f64..1e28,
        separation in 1e10f64..1e12,
        vy in -3e4f64..3e4,
        steps in 1u64..100,
    ) {
        let bodies = vec![
            fixtures::moving_body("A", mass_a, DVec2::ZERO, DVec2::ZERO),
            fixtures::moving_body("B", mass_b, DVec2::new(separation, 0.0), DVec2::new(0.0, vy)),
        ];
        let mut sim = Simulation::new(bodies).unwrap();
        let initial = sim.total_momentum();

        sim.run(60.0, steps).unwrap();

        // Round-off grows with the number of steps and the momentum exchanged.
        let exchanged = sim.bodies()[0].momentum().length().max(initial.length()).max(1.0);
        let tolerance = 1e-13 * steps as f64;
        assertions::assert_vec_close(sim.total_momentum(), initial, exchanged, tolerance);
    }

    /// Every body gets exactly one trace entry per completed step.
    #[test]
    fn prop_trace_length_matches_steps(
        steps in 0u64..50,
        dt in 1.0f64..86400.0,
    ) {
        let (sun, earth) = fixtures::sun_and_earth();
        let mut sim = Simulation::new(vec![sun, earth]).unwrap();
        sim.run(dt, steps).unwrap();

        prop_assert_eq!(sim.step_count(), steps);
        for body in sim.bodies() {
            let trace = sim.trace(body.name()).unwrap();
            prop_assert_eq!(trace.len() as u64, steps);
            if let Some(last) = trace.last() {
                prop_assert_eq!(*last, body.position());
            }
            prop_assert_eq!(body.force(), DVec2::ZERO);
        }
    }

    /// Coincident bodies contribute exactly zero force, never NaN.
    #[test]
    fn prop_coincident_pair_zero_force(
        mass_a in 1e-3f64..1e30,
        mass_b in 1e-3f64..1e30,
        x in -1e12f64..1e12,
        y in -1e12f64..1e12,
    ) {
        let pos = DVec2::new(x, y);
        let mut bodies = vec![
            fixtures::body_at("A", mass_a, pos),
            fixtures::body_at("B", mass_b, pos),
        ];
        crate::physics::compute_gravitational_forces(&mut bodies, G);
        for body in &bodies {
            prop_assert_eq!(body.force(), DVec2::ZERO);
        }
    }

    /// Equal masses at (±d, 0) end every step mirror images of each other.
    #[test]
    fn prop_symmetric_pair_stays_symmetric(
        mass in 1e20f64..1e27,
        d in 1e9f64..1e12,
        steps in 1u64..20,
    ) {
        let mut sim = Simulation::new(fixtures::symmetric_pair(mass, d)).unwrap();
        sim.run(60.0, steps).unwrap();

        let west = &sim.bodies()[0];
        let east = &sim.bodies()[1];
        prop_assert_eq!(west.velocity(), -east.velocity());
        prop_assert_eq!(west.position(), -east.position());
    }
}

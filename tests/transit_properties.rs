//! End-to-end properties of the transit simulation
//!
//! These tests exercise the full frame loop through the public API, from
//! configuration down to the light curve, for the properties the model
//! guarantees: brightness bounds, periodicity, and the shape of the curve
//! at the default parameters.

use approx::assert_relative_eq;
use rstest::rstest;

use transitfield::{OcclusionOrder, SimulationConfig, TransitSimulation};

#[test]
fn default_run_dips_below_one_but_stays_above_0_99() {
    let mut sim = TransitSimulation::new(SimulationConfig::default()).unwrap();
    let curve = sim.run();

    let min = curve
        .iter()
        .map(|s| s.brightness)
        .fold(f64::INFINITY, f64::min);

    // A 0.3-radius planet in front of a 5.0-radius star blocks well under
    // a percent of the light, but it does block some.
    assert!(min < 1.0, "no transit dip observed, min = {}", min);
    assert!(min > 0.99, "dip implausibly deep, min = {}", min);
}

#[test]
fn brightness_is_one_away_from_transit() {
    let mut sim = TransitSimulation::new(SimulationConfig::default()).unwrap();

    // Frame 0: planet on the far side of the star. Frames 50 and 150: the
    // planet is at the sides of the orbit, its disk clear of the star's.
    for frame in [0, 50, 150] {
        let state = sim.step(frame);
        assert_eq!(
            state.sample.brightness, 1.0,
            "unexpected occlusion at frame {}",
            frame
        );
    }
}

#[rstest]
#[case(SimulationConfig::default())]
#[case(SimulationConfig { planet_radius: 1.0, ..SimulationConfig::default() })]
#[case(SimulationConfig { star_radius: 0.5, camera_distance: 20.0, ..SimulationConfig::default() })]
#[case(SimulationConfig { num_frames: 17, ..SimulationConfig::default() })]
#[case(SimulationConfig { orbit_radius: 5.0, camera_distance: 30.0, ..SimulationConfig::default() })]
fn brightness_stays_in_unit_interval(#[case] config: SimulationConfig) {
    let mut sim = TransitSimulation::new(config).unwrap();
    for sample in sim.run() {
        assert!(
            (0.0..=1.0).contains(&sample.brightness),
            "frame {} out of bounds: {}",
            sample.frame,
            sample.brightness
        );
    }
}

#[test]
fn light_curve_repeats_over_a_second_period() {
    let config = SimulationConfig::default();
    let mut sim = TransitSimulation::new(config).unwrap();

    let mut first_period = Vec::new();
    for frame in 0..config.num_frames {
        first_period.push(sim.step(frame).sample.brightness);
    }
    for frame in config.num_frames..2 * config.num_frames {
        let brightness = sim.step(frame).sample.brightness;
        assert_eq!(
            brightness,
            first_period[frame - config.num_frames],
            "frame {} differs from one period earlier",
            frame
        );
    }
}

#[test]
fn occlusion_order_gates_the_dip() {
    let mut sim = TransitSimulation::new(SimulationConfig::default()).unwrap();

    let mut transit_frames = 0;
    for frame in 0..200 {
        let state = sim.step(frame);
        match state.occlusion {
            OcclusionOrder::StarInFront => assert_eq!(state.sample.brightness, 1.0),
            OcclusionOrder::PlanetInFront => transit_frames += 1,
        }
    }
    // The planet spends the near half of its orbit in front of the star.
    assert!(transit_frames > 0);
    assert!(transit_frames < 200);
}

#[test]
fn mid_transit_depth_matches_angular_size_ratio() {
    let config = SimulationConfig::default();
    let mut sim = TransitSimulation::new(config).unwrap();

    let mid = sim.step(config.num_frames / 2);
    assert_eq!(mid.occlusion, OcclusionOrder::PlanetInFront);

    // Concentric disks at mid-transit: the dip is the squared ratio of the
    // apparent radii. Planet at distance 6, star at distance 8.
    let expected = 1.0 - ((0.3_f64 / 6.0) / (5.0 / 8.0)).powi(2);
    assert_relative_eq!(mid.sample.brightness, expected, epsilon = 1e-9);
}

#[test]
fn degenerate_configurations_are_rejected_up_front() {
    for config in [
        SimulationConfig {
            num_frames: 0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            planet_radius: 0.0,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            camera_distance: 1.5,
            orbit_radius: 2.0,
            ..SimulationConfig::default()
        },
    ] {
        assert!(TransitSimulation::new(config).is_err(), "{:?}", config);
    }
}

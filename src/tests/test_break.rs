use std::f64::consts::PI;
use nalgebra::{Point2, distance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constraints::Constraints;
use crate::kinematic_traits::{Joints, Kinematics};
use crate::kinematics_impl::RPRKinematics;
use crate::limits::{self, BreakCause};
use crate::parameters::rpr_kinematics::{Parameters, Scene};
use crate::tests::test_utils::unit_robot;

#[test]
fn test_envelope_boundary() {
    let robot = RPRKinematics::new(unit_robot());
    let joints = [0.0, 0.0, 0.0];
    let pose = robot.forward(&joints);

    assert_eq!(pose.link2_end, Point2::new(1.0, 0.0));
    assert_eq!(distance(&pose.origin, &pose.link2_end), 1.0);
    // Exactly on the envelope is not broken
    assert!(!robot.is_broken(&joints, &pose));
}

#[test]
fn test_retracted_into_link1() {
    let robot = RPRKinematics::new(unit_robot());
    let joints = [0.0, -1.0, 0.0];
    let pose = robot.forward(&joints);

    assert_eq!(pose.slider_entry, Point2::new(-1.0, 0.0));
    assert_eq!(pose.link2_end, Point2::new(0.0, 0.0));
    // Still within limits, broken by geometry only
    assert!(robot.within_limits(&joints));
    assert!(robot.is_broken(&joints, &pose));
}

#[test]
fn test_retraction_threshold() {
    let robot = RPRKinematics::new(unit_robot());
    for (t2, broken) in [(-0.001, true), (-0.5, true), (-1.9, true), (0.001, false), (2.0, false)] {
        let joints = [1.0, t2, 0.0];
        let pose = robot.forward(&joints);
        assert_eq!(robot.is_broken(&joints, &pose), broken, "t2 = {}", t2);
    }
}

#[test]
fn test_limit_independence() {
    let parameters = unit_robot();
    let robot = RPRKinematics::new(parameters);
    let limits = *parameters.constraints();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..2048 {
        // Start from a compliant sample, then push exactly one coordinate outside
        let mut joints: Joints = std::array::from_fn(|i| rng.gen_range(limits.from[i]..=limits.to[i]));
        assert!(robot.within_limits(&joints));

        let joint = rng.gen_range(0..3);
        let excess = rng.gen_range(1e-6..10.0);
        joints[joint] = if rng.gen_bool(0.5) {
            limits.to[joint] + excess
        } else {
            limits.from[joint] - excess
        };

        assert!(!robot.within_limits(&joints));
        let pose = robot.forward(&joints);
        assert!(robot.is_broken(&joints, &pose));
        match limits::diagnose(&joints, &parameters, &pose) {
            Some(BreakCause::OutOfLimits { joint: reported, .. }) => assert_eq!(reported, joint),
            other => panic!("Expected joint {} out of limits, got {:?}", joint, other),
        }
    }
}

#[test]
fn test_slider_limits_are_not_angles() {
    // A slider range that would look like a full turn if it were an angle
    let parameters = Parameters::new(
        Point2::origin(),
        [1.0, 1.0, 1.0],
        Constraints::new([-PI, 0.0, -PI], [PI, 0.5, PI]),
        10.0,
    ).unwrap();
    let robot = RPRKinematics::new(parameters);
    assert!(robot.within_limits(&[0.0, 0.25, 0.0]));
    assert!(!robot.within_limits(&[0.0, 0.25 + 2.0 * PI, 0.0]));
    assert!(!robot.within_limits(&[0.0, 0.25 - 2.0 * PI, 0.0]));
}

#[test]
fn test_wall_is_not_an_obstacle() {
    // The end effector goes right through the demo wall at x = 2
    let robot = RPRKinematics::new(Parameters::rpr_demo());
    let wall = Scene::rpr_demo().wall;
    let joints = [0.0, 1.0, 0.0];
    let pose = robot.forward(&joints);

    assert!(pose.end_effector.x > wall[0].x);
    assert!(!robot.is_broken(&joints, &pose));
}

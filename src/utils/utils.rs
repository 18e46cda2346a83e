//! Helper functions

use nalgebra::Point2;
use crate::kinematic_traits::{Joints, Pose};
use crate::player::FrameResult;

/// Checks if all elements in the array are finite. Trajectory files must only hold such samples.
pub fn is_valid(joints: &Joints) -> bool {
    joints.iter().all(|&q| q.is_finite())
}

/// Allows to specify t1 and t3 in degrees (converted to radians). t2 is a length and
/// is passed through unchanged.
pub fn from_degrees(t1: f64, t2: f64, t3: f64) -> Joints {
    [t1.to_radians(), t2, t3.to_radians()]
}

/// Formats joint values, angles in degrees and the slider in meters.
pub fn format_joints(joints: &Joints) -> String {
    format!("t1: {:7.2}°, t2: {:6.3}, t3: {:7.2}°",
            joints[0].to_degrees(), joints[1], joints[2].to_degrees())
}

fn format_point(p: &Point2<f64>) -> String {
    format!("({:.4}, {:.4})", p.x, p.y)
}

pub fn format_pose(pose: &Pose) -> String {
    pose.points().iter()
        .map(format_point)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &Joints) {
    println!("[{}]", format_joints(joints));
}

/// Print all five points of the pose.
pub fn dump_pose(pose: &Pose) {
    println!("{}", format_pose(pose));
}

/// Print one playback frame: index, status and the pose.
pub fn dump_frame(frame: &FrameResult) {
    let status = match frame.cause {
        Some(cause) => format!("BROKEN ({})", cause),
        None => "OK".to_string(),
    };
    println!("{:5} {} [{}] {}", frame.index, status, format_joints(&frame.joints), format_pose(&frame.pose));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::Kinematics;
    use crate::kinematics_impl::RPRKinematics;
    use crate::parameters::rpr_kinematics::Parameters;

    #[test]
    fn test_from_degrees_keeps_slider() {
        let joints = from_degrees(180.0, 0.25, -90.0);
        assert_eq!(joints[1], 0.25);
        assert!((joints[0] - std::f64::consts::PI).abs() < 1e-12);
        assert!(is_valid(&joints));
        assert!(!is_valid(&[0.0, f64::INFINITY, 0.0]));
    }

    #[test]
    fn test_format_pose() {
        let pose = RPRKinematics::new(Parameters::rpr_demo()).forward(&[0.0, 0.0, 0.0]);
        assert_eq!(format_pose(&pose),
                   "(0.0000, 0.0000) (1.0000, 0.0000) (0.0000, 0.0000) (1.0000, 0.0000) (1.5000, 0.0000)");
    }
}

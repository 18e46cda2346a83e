//! Shared types and the kinematics trait

use nalgebra::{Point2, distance};
use crate::limits::BreakCause;

/// Generalized coordinates of the RPR robot: `[t1, t2, t3]`.
///
/// - `t1` is the world orientation angle of link 1 (radians).
/// - `t2` is the extension of the prismatic slider along link 1, a signed length (meters),
///   not an angle. It may be negative (slider retracted behind the origin).
/// - `t3` is the angle of link 3 relative to link 1 (radians).
pub type Joints = [f64; 3];

/// All coordinates at zero.
pub const JOINTS_AT_ZERO: Joints = [0.0; 3];

/// Positions of the five characteristic points of the planar RPR robot for one joint sample.
///
/// Link 2 starts at the slider entry point, not at the end of link 1. The end of link 1
/// is only the outer limit of the fixed envelope the slider moves in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Base of the robot (p0).
    pub origin: Point2<f64>,

    /// End of the fixed link 1 envelope (p1).
    pub link1_end: Point2<f64>,

    /// Point where the slider enters along the link 1 ray (pe).
    pub slider_entry: Point2<f64>,

    /// End of link 2, where the last revolute joint sits (p2).
    pub link2_end: Point2<f64>,

    /// End of link 3, the end effector (p3).
    pub end_effector: Point2<f64>,
}

impl Pose {
    /// Points in the order origin, link 1 end, slider entry, link 2 end, end effector.
    pub fn points(&self) -> [Point2<f64>; 5] {
        [self.origin, self.link1_end, self.slider_entry, self.link2_end, self.end_effector]
    }

    /// Distance from the origin to the end of link 2. Break detection compares this
    /// with the length of link 1.
    pub fn reach(&self) -> f64 {
        distance(&self.origin, &self.link2_end)
    }
}

pub trait Kinematics {
    /// Computes the pose of the robot for the given joint sample. Total over all
    /// finite inputs: joint limits are not checked here.
    fn forward(&self, joints: &Joints) -> Pose;

    /// True if every coordinate lies within its inclusive joint limits.
    fn within_limits(&self, joints: &Joints) -> bool;

    /// First reason the sample is broken (out of limits, or link 2 retracted into link 1),
    /// None if the configuration is valid. `pose` must be `forward(joints)`.
    fn diagnose(&self, joints: &Joints, pose: &Pose) -> Option<BreakCause>;

    /// True if the sample is out of limits or link 2 has retracted into link 1.
    fn is_broken(&self, joints: &Joints, pose: &Pose) -> bool {
        self.diagnose(joints, pose).is_some()
    }
}

use nalgebra::{Point2, Vector2};
use crate::kinematic_traits::{Joints, Kinematics, Pose};
use crate::limits::{self, BreakCause};
use crate::parameters::rpr_kinematics::Parameters;

/// Closed form kinematics of the planar RPR robot.
#[derive(Debug, Clone, Copy)]
pub struct RPRKinematics {
    /// The parameters that were used to construct this solver.
    parameters: Parameters,
}

impl RPRKinematics {
    /// Creates a new `RPRKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        RPRKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

/// Unit vector at the given world angle.
#[inline]
fn direction(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}

impl Kinematics for RPRKinematics {
    fn forward(&self, joints: &Joints) -> Pose {
        let p = &self.parameters;
        let [t1, t2, t3] = *joints;

        let origin: Point2<f64> = p.origin();
        let along_link1 = direction(t1);

        // Link 1 is rigid, its end only bounds the envelope
        let link1_end = origin + along_link1 * p.l1();

        // Link 2 keeps the link 1 direction and starts where the slider enters
        let slider_entry = origin + along_link1 * t2;
        let link2_end = slider_entry + along_link1 * p.l2();

        // t3 is relative to link 1
        let end_effector = link2_end + direction(t1 + t3) * p.l3();

        Pose {
            origin,
            link1_end,
            slider_entry,
            link2_end,
            end_effector,
        }
    }

    fn within_limits(&self, joints: &Joints) -> bool {
        limits::within_limits(joints, &self.parameters)
    }

    fn diagnose(&self, joints: &Joints, pose: &Pose) -> Option<BreakCause> {
        limits::diagnose(joints, &self.parameters, pose)
    }

    fn is_broken(&self, joints: &Joints, pose: &Pose) -> bool {
        limits::is_broken(joints, &self.parameters, pose)
    }
}

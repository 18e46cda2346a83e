//! Joint limit and break checks.
//!
//! A configuration is broken if any coordinate is outside its inclusive limits, or if the
//! slider has retracted so far that the end of link 2 lies strictly inside the link 1
//! envelope (closer to the origin than `L_1`). Being exactly on the envelope is not broken.
//! Each check looks at a single frame only.

use std::fmt;
use crate::kinematic_traits::{Joints, Pose};
use crate::parameters::rpr_kinematics::Parameters;

/// Why a configuration is broken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakCause {
    /// Coordinate `joint` (0 for t1, 1 for t2, 2 for t3) is outside `from ..= to`.
    OutOfLimits { joint: usize, value: f64, from: f64, to: f64 },

    /// Link 2 ends at `distance` from the origin, inside the link 1 envelope of radius `envelope`.
    Retracted { distance: f64, envelope: f64 },
}

impl fmt::Display for BreakCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BreakCause::OutOfLimits { joint, value, from, to } =>
                write!(f, "t{} = {:.4} outside [{:.4}, {:.4}]", joint + 1, value, from, to),
            BreakCause::Retracted { distance, envelope } =>
                write!(f, "link 2 retracted into link 1 ({:.4} < {:.4})", distance, envelope),
        }
    }
}

/// True iff all three coordinates are within their inclusive limits.
pub fn within_limits(joints: &Joints, parameters: &Parameters) -> bool {
    parameters.constraints().compliant(joints)
}

/// True iff the sample is out of limits or link 2 intersects link 1.
pub fn is_broken(joints: &Joints, parameters: &Parameters, pose: &Pose) -> bool {
    diagnose(joints, parameters, pose).is_some()
}

/// Returns the first reason the configuration is broken, or None if it is valid.
/// Limits are checked before the retraction.
pub fn diagnose(joints: &Joints, parameters: &Parameters, pose: &Pose) -> Option<BreakCause> {
    let constraints = parameters.constraints();
    if let Some(joint) = constraints.first_violation(joints) {
        return Some(BreakCause::OutOfLimits {
            joint,
            value: joints[joint],
            from: constraints.from[joint],
            to: constraints.to[joint],
        });
    }

    let distance = pose.reach();
    if distance < parameters.l1() {
        return Some(BreakCause::Retracted { distance, envelope: parameters.l1() });
    }
    None
}

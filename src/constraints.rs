use crate::kinematic_traits::Joints;

/// Inclusive bounds for the three generalized coordinates.
///
/// The same bounded scalar check is used for the angles t1, t3 and for the slider
/// extension t2. Bounds are taken literally: they are never normalized or wrapped
/// around, as t2 is a length and has no period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Lower limits, inclusive
    pub from: Joints,

    /// Upper limits, inclusive
    pub to: Joints,
}

impl Constraints {
    pub fn new(from: Joints, to: Joints) -> Self {
        Constraints { from, to }
    }

    /// Checks a single coordinate against its bounds. NaN is never within bounds.
    pub fn joint_compliant(&self, joint: usize, value: f64) -> bool {
        self.from[joint] <= value && value <= self.to[joint]
    }

    pub fn compliant(&self, joints: &Joints) -> bool {
        (0..3).all(|i| self.joint_compliant(i, joints[i]))
    }

    /// Index of the first coordinate out of its bounds, if any.
    pub fn first_violation(&self, joints: &Joints) -> Option<usize> {
        (0..3).find(|&i| !self.joint_compliant(i, joints[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn limits() -> Constraints {
        Constraints::new([-PI / 2.0, 0.0, -PI / 4.0], [PI / 2.0, 1.0, PI / 4.0])
    }

    #[test]
    fn test_inside() {
        assert!(limits().compliant(&[0.1, 0.5, -0.1]));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let limits = limits();
        assert!(limits.compliant(&limits.from));
        assert!(limits.compliant(&limits.to));
    }

    #[test]
    fn test_slider_not_wrapped() {
        // A length one full turn away from a valid value is still out of range
        let limits = limits();
        assert!(!limits.compliant(&[0.0, 0.5 + 2.0 * PI, 0.0]));
        assert!(!limits.compliant(&[0.0, -0.01, 0.0]));
    }

    #[test]
    fn test_angles_not_wrapped() {
        assert!(!limits().compliant(&[PI / 4.0 + 2.0 * PI, 0.5, 0.0]));
    }

    #[test]
    fn test_first_violation() {
        let limits = limits();
        assert_eq!(limits.first_violation(&[0.0, 0.5, 0.0]), None);
        assert_eq!(limits.first_violation(&[0.0, 2.0, 1.0]), Some(1));
        assert_eq!(limits.first_violation(&[0.0, 0.5, 1.0]), Some(2));
        assert_eq!(limits.first_violation(&[f64::NAN, 0.5, 0.0]), Some(0));
    }
}

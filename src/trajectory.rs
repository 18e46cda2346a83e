//! Ordered sequence of joint samples played back by the robot.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::kinematic_traits::{Joints, Kinematics};

/// Immutable, finite, ordered sequence of joint samples, one per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<Joints>,
}

impl Trajectory {
    pub fn new(samples: Vec<Joints>) -> Self {
        Trajectory { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Joints> {
        self.samples.get(index)
    }

    pub fn samples(&self) -> &[Joints] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Joints> {
        self.samples.iter()
    }

    /// Indices of all broken frames, ascending. Frames are independent, so with the
    /// `parallel` feature they are checked in parallel.
    pub fn broken_frames<K: Kinematics + Sync>(&self, robot: &K) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        let broken: Vec<usize> = (0..self.samples.len())
            .into_par_iter()
            .filter(|&i| is_broken_sample(robot, &self.samples[i]))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let broken: Vec<usize> = (0..self.samples.len())
            .filter(|&i| is_broken_sample(robot, &self.samples[i]))
            .collect();

        debug!("{} of {} frames are broken", broken.len(), self.samples.len());
        broken
    }

    /// Index of the first broken frame, or None if the whole trajectory is valid.
    pub fn first_broken<K: Kinematics + Sync>(&self, robot: &K) -> Option<usize> {
        #[cfg(feature = "parallel")]
        let first = (0..self.samples.len())
            .into_par_iter()
            .find_first(|&i| is_broken_sample(robot, &self.samples[i]));

        #[cfg(not(feature = "parallel"))]
        let first = (0..self.samples.len())
            .find(|&i| is_broken_sample(robot, &self.samples[i]));

        first
    }
}

fn is_broken_sample<K: Kinematics>(robot: &K, joints: &Joints) -> bool {
    let pose = robot.forward(joints);
    robot.is_broken(joints, &pose)
}

impl From<Vec<Joints>> for Trajectory {
    fn from(samples: Vec<Joints>) -> Self {
        Trajectory::new(samples)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Joints;
    type IntoIter = std::slice::Iter<'a, Joints>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics_impl::RPRKinematics;
    use crate::parameters::rpr_kinematics::Parameters;

    #[test]
    fn test_broken_frames() {
        // Demo robot: t2 in [0, 1], t3 in [-pi/2, pi/2]
        let robot = RPRKinematics::new(Parameters::rpr_demo());
        let trajectory = Trajectory::from(vec![
            [0.0, 0.5, 0.0],
            [0.0, -0.5, 0.0],
            [0.0, 0.5, 0.0],
            [0.0, 0.5, 3.0],
        ]);
        assert_eq!(trajectory.broken_frames(&robot), vec![1, 3]);
        assert_eq!(trajectory.first_broken(&robot), Some(1));
    }

    #[test]
    fn test_valid_trajectory() {
        let robot = RPRKinematics::new(Parameters::rpr_demo());
        let trajectory = Trajectory::from(vec![[0.1, 0.2, 0.3]; 16]);
        assert!(trajectory.broken_frames(&robot).is_empty());
        assert_eq!(trajectory.first_broken(&robot), None);
        assert_eq!(Trajectory::default().first_broken(&robot), None);
    }
}

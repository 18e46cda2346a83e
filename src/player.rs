//! Frame by frame playback of a trajectory.
//!
//! The player owns the playback position and the trail of end effector positions. Each call
//! to [TrajectoryPlayer::advance] consumes one sample, computes its pose and break status,
//! and appends the end effector to the trail. The player never loops on its own: once all
//! samples are consumed, `advance` fails until [TrajectoryPlayer::reset] is called.

use std::error::Error;
use std::fmt;
use nalgebra::Point2;
use tracing::{debug, trace, warn};

use crate::kinematic_traits::{Joints, Kinematics, Pose};
use crate::limits::BreakCause;
use crate::kinematics_impl::RPRKinematics;
use crate::trajectory::Trajectory;

/// Result of one playback step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    /// Index of the sample in the trajectory.
    pub index: usize,

    pub joints: Joints,

    pub pose: Pose,

    /// True if out of joint limits or link 2 retracted into link 1.
    pub broken: bool,

    /// Reason for `broken`, None when the frame is valid.
    pub cause: Option<BreakCause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// All samples have been played; reset the player to start over.
    Exhausted { length: usize },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Exhausted { length } =>
                write!(f, "Playback exhausted: all {} frames have been played", length),
        }
    }
}

impl Error for PlaybackError {}

/// Sequential player over a fixed trajectory. Both the robot and the trajectory are
/// borrowed; the playback index and the trail belong to the player. Any [Kinematics]
/// implementation can drive it, [RPRKinematics] unless stated otherwise.
pub struct TrajectoryPlayer<'a, K: Kinematics = RPRKinematics> {
    robot: &'a K,
    trajectory: &'a Trajectory,
    index: usize,
    trail: Vec<Point2<f64>>,
}

impl<'a, K: Kinematics> TrajectoryPlayer<'a, K> {
    pub fn new(robot: &'a K, trajectory: &'a Trajectory) -> Self {
        TrajectoryPlayer {
            robot,
            trajectory,
            index: 0,
            trail: Vec::with_capacity(trajectory.len()),
        }
    }

    /// Plays the next sample.
    pub fn advance(&mut self) -> Result<FrameResult, PlaybackError> {
        let Some(&joints) = self.trajectory.get(self.index) else {
            warn!("advance called after all {} frames were played", self.trajectory.len());
            return Err(PlaybackError::Exhausted { length: self.trajectory.len() });
        };

        let pose = self.robot.forward(&joints);
        let cause = self.robot.diagnose(&joints, &pose);
        let broken = cause.is_some();

        self.trail.push(pose.end_effector);
        let index = self.index;
        self.index += 1;

        trace!(index, broken, "frame played");
        Ok(FrameResult { index, joints, pose, broken, cause })
    }

    /// Rewinds to the first sample and clears the trail.
    pub fn reset(&mut self) {
        debug!("playback reset after {} of {} frames", self.index, self.trajectory.len());
        self.index = 0;
        self.trail.clear();
    }

    /// End effector positions of all frames played since the last reset, in order.
    pub fn trail(&self) -> &[Point2<f64>] {
        &self.trail
    }

    /// Index of the next sample to play.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of samples in the trajectory.
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.trajectory.len() - self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.trajectory.len()
    }
}

/// Plays the remaining frames; stops at the end without resetting.
impl<K: Kinematics> Iterator for TrajectoryPlayer<'_, K> {
    type Item = FrameResult;

    fn next(&mut self) -> Option<FrameResult> {
        if self.is_finished() {
            return None;
        }
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::rpr_kinematics::Parameters;

    #[test]
    fn test_empty_trajectory_is_exhausted() {
        let robot = RPRKinematics::new(Parameters::rpr_demo());
        let trajectory = Trajectory::default();
        let mut player = TrajectoryPlayer::new(&robot, &trajectory);
        assert!(player.is_finished());
        assert_eq!(player.advance(), Err(PlaybackError::Exhausted { length: 0 }));
        assert!(player.trail().is_empty());
    }

    #[test]
    fn test_iterator_stops_at_end() {
        let robot = RPRKinematics::new(Parameters::rpr_demo());
        let trajectory = Trajectory::from(vec![[0.0, 0.5, 0.0]; 3]);
        let mut player = TrajectoryPlayer::new(&robot, &trajectory);
        assert_eq!(player.size_hint(), (3, Some(3)));
        let indices: Vec<usize> = player.by_ref().map(|frame| frame.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(player.next(), None);
        assert_eq!(player.trail().len(), 3);
    }

    /// Same geometry as the wrapped robot, but no limits and no break checks.
    struct Unconstrained(RPRKinematics);

    impl Kinematics for Unconstrained {
        fn forward(&self, joints: &Joints) -> Pose {
            self.0.forward(joints)
        }

        fn within_limits(&self, _joints: &Joints) -> bool {
            true
        }

        fn diagnose(&self, _joints: &Joints, _pose: &Pose) -> Option<BreakCause> {
            None
        }
    }

    #[test]
    fn test_player_uses_given_kinematics() {
        let robot = RPRKinematics::new(Parameters::rpr_demo());
        // Out of limits for the demo robot
        let trajectory = Trajectory::from(vec![[0.0, -0.5, 0.0], [0.0, 0.5, 3.0]]);

        let checked: Vec<bool> = TrajectoryPlayer::new(&robot, &trajectory).map(|f| f.broken).collect();
        assert_eq!(checked, vec![true, true]);

        let unconstrained = Unconstrained(robot);
        let mut player = TrajectoryPlayer::new(&unconstrained, &trajectory);
        let frames: Vec<FrameResult> = player.by_ref().collect();
        assert!(frames.iter().all(|f| !f.broken && f.cause.is_none()));
        assert_eq!(frames[1].pose, robot.forward(&[0.0, 0.5, 3.0]));
        assert_eq!(player.trail().len(), 2);
    }

    #[test]
    fn test_display_exhausted() {
        let err = PlaybackError::Exhausted { length: 7 };
        assert_eq!(err.to_string(), "Playback exhausted: all 7 frames have been played");
    }
}

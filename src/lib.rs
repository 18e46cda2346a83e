//! Rust implementation of forward kinematics, joint limit checks and trajectory playback for
//! a planar RPR (revolute, prismatic, revolute) robot.
//!
//! The robot has a fixed link 1 of length `L_1` rotating about the origin by `t1`. A slider
//! of fixed length `L_2` moves along the link 1 direction; `t2` is the signed distance from
//! the origin to where the slider enters. Link 3 of length `L_3` is attached to the end of the
//! slider at angle `t3` relative to link 1.
//!
//! # Features
//!
//! - Closed form forward kinematics returning all five characteristic points of the robot.
//! - Inclusive joint limits for all three coordinates. The slider extension is a length and
//!   is never wrapped around like an angle.
//! - Break detection: out of limits, or link 2 retracted inside the link 1 envelope.
//! - Frame by frame playback of a trajectory with the trail of end effector positions.
//! - Validation of a complete trajectory ahead of playback, in parallel with the `parallel`
//!   feature.
//! - Reading parameters from `.par` or YAML files and trajectories from `.trj` files with the
//!   `allow_filesystem` feature.
//!
//! # Parameters
//!
//! Fill out [parameters::rpr_kinematics::Parameters] with `Parameters::new`, which refuses
//! non-positive link lengths and inverted joint ranges, or read it from a file.
//!
//! ```
//! use rs_rpr_kinematics::kinematic_traits::Kinematics;
//! use rs_rpr_kinematics::kinematics_impl::RPRKinematics;
//! use rs_rpr_kinematics::parameters::rpr_kinematics::Parameters;
//!
//! let robot = RPRKinematics::new(Parameters::rpr_demo());
//! let pose = robot.forward(&[0.0, 0.5, 0.0]);
//! assert!(!robot.is_broken(&[0.0, 0.5, 0.0], &pose));
//! ```
//!
//! ## Examples
//!
//! - **basic.rs**: Forward kinematics and break checks of single samples.
//! - **playback.rs**: Playing a trajectory loaded from files.

pub mod parameters;
pub mod parameters_robots;
pub mod parameter_error;
pub mod parameter_map;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod constraints;
pub mod limits;

pub mod trajectory;
pub mod player;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;

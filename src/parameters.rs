//! Defines the RPR parameter data structure

pub mod rpr_kinematics {
    use std::time::Duration;
    use nalgebra::Point2;
    use crate::constraints::Constraints;
    use crate::parameter_error::ParameterError;

    const JOINT_NAMES: [&str; 3] = ["t1", "t2", "t3"];

    /// Parameters for the kinematic model of the planar RPR robot. Validated once on
    /// construction and immutable afterwards. See [parameters_robots.rs](parameters_robots.rs)
    /// for a hardcoded example.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Base of the robot in world coordinates (x0, y0).
        pub(crate) origin: Point2<f64>,

        /// Length of the fixed link 1 envelope (L_1).
        pub(crate) l1: f64,

        /// Length of the sliding link 2 (L_2).
        pub(crate) l2: f64,

        /// Length of the end link 3 (L_3).
        pub(crate) l3: f64,

        /// Inclusive bounds of t1, t2 and t3.
        pub(crate) constraints: Constraints,

        /// Nominal frame interval in milliseconds. Not used by the kinematics.
        pub(crate) dt: f64,
    }

    impl Parameters {
        /// Creates validated parameters. Fails with [ParameterError::InvalidConfiguration]
        /// if any link length is not strictly positive, if any joint has `from > to`,
        /// if any value is not finite, or if `dt` does not fit a [Duration].
        pub fn new(
            origin: Point2<f64>,
            lengths: [f64; 3],
            constraints: Constraints,
            dt: f64,
        ) -> Result<Self, ParameterError> {
            if !origin.x.is_finite() || !origin.y.is_finite() {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "origin must be finite (got {}, {})", origin.x, origin.y
                )));
            }

            for (i, &length) in lengths.iter().enumerate() {
                // Also rejects NaN
                if !(length > 0.0 && length.is_finite()) {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "L_{} must be positive and finite (got {})", i + 1, length
                    )));
                }
            }

            for (i, name) in JOINT_NAMES.iter().enumerate() {
                let (from, to) = (constraints.from[i], constraints.to[i]);
                if !from.is_finite() || !to.is_finite() {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "{} limits must be finite (got {} .. {})", name, from, to
                    )));
                }
                if from > to {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "{}_min ({}) is greater than {}_max ({})", name, from, name, to
                    )));
                }
            }

            if !(dt >= 0.0 && dt.is_finite()) {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "dt must be non-negative and finite (got {})", dt
                )));
            }
            // Duration::MAX in f64 rounds up to 2^64 seconds, which no longer converts
            if dt / 1000.0 >= Duration::MAX.as_secs_f64() {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "dt is too large for a frame interval (got {})", dt
                )));
            }

            Ok(Parameters {
                origin,
                l1: lengths[0],
                l2: lengths[1],
                l3: lengths[2],
                constraints,
                dt,
            })
        }

        pub fn origin(&self) -> Point2<f64> {
            self.origin
        }

        pub fn l1(&self) -> f64 {
            self.l1
        }

        pub fn l2(&self) -> f64 {
            self.l2
        }

        pub fn l3(&self) -> f64 {
            self.l3
        }

        pub fn constraints(&self) -> &Constraints {
            &self.constraints
        }

        /// Nominal frame interval as given in the parameters (milliseconds).
        pub fn dt(&self) -> f64 {
            self.dt
        }

        /// Frame interval hint for the playback driver.
        pub fn frame_interval(&self) -> Duration {
            Duration::from_secs_f64(self.dt / 1000.0)
        }

        /// Convert to the `.par` text representation (quick viewing, etc).
        pub fn to_par(&self) -> String {
            let c = &self.constraints;
            format!(
                "{} # x0\n\
                 {} # y0\n\
                 {} # L_1\n\
                 {} # L_2\n\
                 {} # L_3\n\
                 {} # t1_min\n\
                 {} # t1_max\n\
                 {} # t2_min\n\
                 {} # t2_max\n\
                 {} # t3_min\n\
                 {} # t3_max\n\
                 {} # dt\n",
                self.origin.x, self.origin.y,
                self.l1, self.l2, self.l3,
                c.from[0], c.to[0],
                c.from[1], c.to[1],
                c.from[2], c.to[2],
                self.dt
            )
        }
    }

    /// Drawing context that comes with the parameters: the visible area and the wall.
    /// The wall is only drawn; it does not constrain the robot.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Scene {
        pub xmin: f64,
        pub xmax: f64,
        pub ymin: f64,
        pub ymax: f64,

        /// End points of the wall segment.
        pub wall: [Point2<f64>; 2],
    }

}

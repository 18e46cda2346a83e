//! Hardcoded RPR parameters

pub mod rpr_kinematics {
    use nalgebra::Point2;
    use crate::constraints::Constraints;
    use crate::parameters::rpr_kinematics::{Parameters, Scene};
    use std::f64::consts::PI;

    impl Parameters {
        /// Demonstration robot: 1 m envelope, 1 m slider, 0.5 m end link, base at the
        /// world origin, frames every 50 ms.
        pub fn rpr_demo() -> Self {
            Parameters {
                origin: Point2::origin(),
                l1: 1.0,
                l2: 1.0,
                l3: 0.5,
                constraints: Constraints::new([-PI, 0.0, -PI / 2.0], [PI, 1.0, PI / 2.0]),
                dt: 50.0,
            }
        }
    }

    impl Scene {
        /// Drawing area and wall matching [Parameters::rpr_demo].
        pub fn rpr_demo() -> Self {
            Scene {
                xmin: -3.0,
                xmax: 3.0,
                ymin: -3.0,
                ymax: 3.0,
                wall: [Point2::new(2.0, -1.5), Point2::new(2.0, 1.5)],
            }
        }
    }
}

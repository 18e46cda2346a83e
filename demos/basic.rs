use std::f64::consts::PI;
use nalgebra::Point2;
use rs_rpr_kinematics::constraints::Constraints;
use rs_rpr_kinematics::kinematic_traits::{Joints, Kinematics, Pose};
use rs_rpr_kinematics::kinematics_impl::RPRKinematics;
use rs_rpr_kinematics::limits::diagnose;
use rs_rpr_kinematics::parameters::rpr_kinematics::Parameters;
use rs_rpr_kinematics::utils::{dump_joints, dump_pose, from_degrees};

fn main() {
    // Base at (0.5, 0.0), 1 m envelope, 0.8 m slider, 0.3 m end link
    let parameters = match Parameters::new(
        Point2::new(0.5, 0.0),
        [1.0, 0.8, 0.3],
        Constraints::new([-PI, 0.0, -PI / 2.0], [PI, 1.2, PI / 2.0]),
        40.0,
    ) {
        Ok(parameters) => parameters,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let robot = RPRKinematics::new(parameters);

    let samples: [Joints; 3] = [
        from_degrees(30.0, 0.5, 45.0),  // valid
        from_degrees(30.0, 0.1, 45.0),  // link 2 ends inside the link 1 envelope
        from_degrees(30.0, 0.5, 120.0), // t3 out of limits
    ];

    for joints in samples {
        let pose: Pose = robot.forward(&joints);
        dump_joints(&joints);
        dump_pose(&pose);
        match diagnose(&joints, robot.parameters(), &pose) {
            Some(cause) => println!("  broken: {}", cause),
            None => println!("  ok"),
        }
    }

    println!("Parameters:\n{}", parameters.to_par());
}

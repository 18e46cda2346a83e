use anyhow::Result;
use rs_rpr_kinematics::kinematics_impl::RPRKinematics;
use rs_rpr_kinematics::parameters::rpr_kinematics::Parameters;
use rs_rpr_kinematics::player::TrajectoryPlayer;
use rs_rpr_kinematics::trajectory::Trajectory;
use rs_rpr_kinematics::utils::dump_frame;

/// Plays the test trajectory twice, as an animation loop restarting at the end would.
fn main() -> Result<()> {
    let parameters = Parameters::from_file("src/tests/data/robotRPR.par")?;
    let trajectory = Trajectory::from_trj_file("src/tests/data/exemple.trj")?;
    let robot = RPRKinematics::new(parameters);

    if let Some(first) = trajectory.first_broken(&robot) {
        println!("First broken frame: {}", first);
    }

    let mut player = TrajectoryPlayer::new(&robot, &trajectory);
    for _ in 0..2 {
        while !player.is_finished() {
            dump_frame(&player.advance()?);
        }
        println!("Trail: {:?}", player.trail().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
        player.reset();
    }
    Ok(())
}

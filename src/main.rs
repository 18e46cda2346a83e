use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rs_rpr_kinematics::kinematics_impl::RPRKinematics;
use rs_rpr_kinematics::parameters::rpr_kinematics::{Parameters, Scene};
use rs_rpr_kinematics::player::TrajectoryPlayer;
use rs_rpr_kinematics::trajectory::Trajectory;
use rs_rpr_kinematics::utils::dump_frame;

/// Plays back a trajectory of the planar RPR robot, printing the pose and the break status
/// of every frame.
#[derive(Parser, Debug)]
#[command(name = "rpr-sim", version, about)]
struct Args {
    /// Robot parameters (.par or .yaml)
    #[arg(short, long)]
    parameters: PathBuf,

    /// Trajectory, three columns t1 t2 t3 per line (.trj)
    #[arg(short, long)]
    trajectory: PathBuf,

    /// How many times to play the trajectory
    #[arg(long, default_value_t = 1)]
    loops: usize,

    /// Wait the frame interval (dt) between frames
    #[arg(long)]
    realtime: bool,

    /// Only list the broken frames, without playback
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let parameters = Parameters::from_file(&args.parameters)
        .with_context(|| format!("Failed to read parameters from {}", args.parameters.display()))?;
    let trajectory = Trajectory::from_trj_file(&args.trajectory)
        .with_context(|| format!("Failed to read trajectory from {}", args.trajectory.display()))?;

    match Scene::from_file(&args.parameters) {
        Ok(scene) => info!("scene x [{}, {}], y [{}, {}], wall {:?} .. {:?}",
                           scene.xmin, scene.xmax, scene.ymin, scene.ymax, scene.wall[0], scene.wall[1]),
        Err(e) => info!("no scene in parameters: {}", e),
    }

    let robot = RPRKinematics::new(parameters);
    info!("{} frames, dt {} ms", trajectory.len(), parameters.dt());

    if args.check {
        let broken = trajectory.broken_frames(&robot);
        if broken.is_empty() {
            println!("All {} frames are valid", trajectory.len());
        } else {
            println!("{} broken frames: {:?}", broken.len(), broken);
        }
        return Ok(());
    }

    let mut player = TrajectoryPlayer::new(&robot, &trajectory);
    for pass in 0..args.loops {
        if pass > 0 {
            player.reset();
        }
        while !player.is_finished() {
            let frame = player.advance()?;
            dump_frame(&frame);
            if args.realtime {
                thread::sleep(parameters.frame_interval());
            }
        }
        info!("pass {} done, trail of {} points", pass + 1, player.trail().len());
    }
    Ok(())
}

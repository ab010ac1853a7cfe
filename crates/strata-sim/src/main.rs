//! Headless simulation binary: generate a world, run a few seconds of
//! scripted input through the fixed-timestep loop, and report the outcome.

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use strata_config::{CliArgs, Config};
use strata_sim::{FixedTimestep, InputState, Session};
use strata_world::{TileKind, tile_coord};

/// Length of the scripted run in simulated seconds.
const RUN_SECONDS: u64 = 4;

fn main() {
    let args = CliArgs::parse();
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(Config::default_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load config from {}: {e}", config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    strata_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    let mut session = Session::new(&config);
    info!(
        seed = session.seed(),
        width = session.grid().width(),
        height = session.grid().height(),
        caves = session.grid().count(TileKind::Cave),
        "world ready"
    );

    run(&mut session, config.window.target_fps);

    let body = session.body();
    info!(
        x = body.pos.x,
        y = body.pos.y,
        grounded = body.grounded,
        "run finished"
    );
}

/// Drive the session in real time for [`RUN_SECONDS`] of simulated time.
///
/// The script settles for the first second, walks right for the next two,
/// jumping once, then breaks the tile under the player's feet.
fn run(session: &mut Session, target_fps: u32) {
    let fps = u64::from(if target_fps == 0 { 60 } else { target_fps });
    let total_steps = fps * RUN_SECONDS;
    let mut timestep = FixedTimestep::new(target_fps);

    while timestep.step_count() < total_steps {
        // Input is sampled once per frame, before the tick it feeds.
        let phase = timestep.step_count() / fps;
        let input = scripted_input(session, phase);
        timestep.tick(|dt| session.step(&input, dt));
        std::thread::sleep(Duration::from_millis(1));
    }

    if !session.body().grounded && session.body().velocity_y == 0.0 {
        error!("body ended airborne with zero velocity; simulation state is inconsistent");
    }
}

/// Scripted input for the demo run.
fn scripted_input(session: &Session, phase: u64) -> InputState {
    let mut input = InputState::idle();
    match phase {
        0 => {}
        1 | 2 => {
            input.move_right = true;
            if phase == 1 {
                input.jump = true;
            }
        }
        _ => {
            let body = session.body();
            let x = tile_coord(body.pos.x);
            let y = tile_coord(body.pos.y) + 1;
            input.break_target = Some((x, y));
        }
    }
    input
}

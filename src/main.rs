//! Headless driver: plays a scramble through the gesture controller.
//!
//! Usage: `cubeturn [OPTIONS.toml] "<moves>"`. With a single argument it is
//! taken as the move string and default options are used.

use std::path::Path;

use cubeturn::camera::Viewport;
use cubeturn::controls::{ControlsObserver, MoveOrigin};
use cubeturn::puzzle::notation::parse_sequence;
use cubeturn::util::frame_timing::FrameClock;
use cubeturn::{Cube, GestureController, Options, TurnError};
use web_time::Instant;

/// Counts settled scramble steps.
#[derive(Default)]
struct Progress {
    steps: usize,
}

impl ControlsObserver for Progress {
    fn rotation_settled(&mut self, origin: MoveOrigin) {
        if origin == MoveOrigin::Scramble {
            self.steps += 1;
            log::debug!("scramble step {} settled", self.steps);
        }
    }

    fn scramble_finished(&mut self) {
        log::info!("scramble finished after {} steps", self.steps);
    }
}

fn main() -> Result<(), TurnError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, moves) = match args.as_slice() {
        [moves] => (Options::default(), moves.as_str()),
        [path, moves] => (Options::load(Path::new(path))?, moves.as_str()),
        _ => {
            log::error!("usage: cubeturn [OPTIONS.toml] \"<moves>\"");
            std::process::exit(2);
        }
    };

    let size = options.puzzle.puzzle_size()?;
    let sequence = parse_sequence(moves, size)?;
    log::info!("{}x{0}x{0} puzzle, {} moves", size.get(), sequence.len());

    let mut controller = GestureController::new(
        Cube::new(size),
        Viewport::new(800.0, 600.0),
        &options,
        Progress::default(),
    );
    if !controller.scramble(sequence)? {
        log::warn!("nothing to play");
    }

    let mut clock = FrameClock::new(60);
    while controller.is_scrambling() {
        std::thread::sleep(clock.frame_budget());
        let dt = clock.tick(Instant::now());
        controller.tick(dt);
    }
    log::info!("average {:.1} fps", clock.fps());

    if controller.cube().is_solved() {
        log::info!("puzzle is solved");
    } else {
        log::info!("puzzle is scrambled");
    }
    Ok(())
}
